//! Year-indexed benefit stream output structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Benefit amounts for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearBenefit {
    /// Monthly benefit in payment during the year (then-current dollars)
    pub monthly: f64,
    /// Cumulative benefits received through the end of the year
    pub cumulative: f64,
}

/// A mapping from calendar year to monthly benefit and running cumulative
///
/// Invariants: cumulative is non-decreasing; monthly is 0 before the claim
/// year and non-decreasing afterward absent cuts, because COLA only grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenefitStream {
    years: BTreeMap<i32, YearBenefit>,
}

impl BenefitStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a year's amounts (last write wins)
    pub fn insert(&mut self, year: i32, entry: YearBenefit) {
        self.years.insert(year, entry);
    }

    pub fn get(&self, year: i32) -> Option<YearBenefit> {
        self.years.get(&year).copied()
    }

    /// Monthly benefit in a year, 0 when the year is outside the stream
    pub fn monthly_in(&self, year: i32) -> f64 {
        self.years.get(&year).map_or(0.0, |e| e.monthly)
    }

    /// Cumulative benefits through a year (carries the last value forward
    /// past the end of the stream, 0 before it starts)
    pub fn cumulative_through(&self, year: i32) -> f64 {
        self.years
            .range(..=year)
            .next_back()
            .map_or(0.0, |(_, e)| e.cumulative)
    }

    pub fn first_year(&self) -> Option<i32> {
        self.years.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Iterate years in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (i32, YearBenefit)> + '_ {
        self.years.iter().map(|(&y, &e)| (y, e))
    }

    /// Total benefits received over the whole stream
    pub fn lifetime_total(&self) -> f64 {
        self.years.values().next_back().map_or(0.0, |e| e.cumulative)
    }
}

impl FromIterator<(i32, YearBenefit)> for BenefitStream {
    fn from_iter<T: IntoIterator<Item = (i32, YearBenefit)>>(iter: T) -> Self {
        Self {
            years: iter.into_iter().collect(),
        }
    }
}

/// First calendar year in which `delayed`'s cumulative total overtakes
/// `early`'s, or None if it never does within the shared horizon
pub fn break_even_year(early: &BenefitStream, delayed: &BenefitStream) -> Option<i32> {
    let start = delayed.first_year()?;
    let end = delayed.last_year()?;
    (start..=end).find(|&year| delayed.cumulative_through(year) > early.cumulative_through(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(entries: &[(i32, f64, f64)]) -> BenefitStream {
        entries
            .iter()
            .map(|&(y, monthly, cumulative)| (y, YearBenefit { monthly, cumulative }))
            .collect()
    }

    #[test]
    fn test_lookup_outside_stream() {
        let s = stream(&[(2030, 1000.0, 12_000.0), (2031, 1025.0, 24_300.0)]);
        assert_eq!(s.monthly_in(2029), 0.0);
        assert_eq!(s.cumulative_through(2029), 0.0);
        assert_eq!(s.cumulative_through(2031), 24_300.0);
        // Past the end the cumulative carries forward
        assert_eq!(s.cumulative_through(2040), 24_300.0);
        assert_eq!(s.lifetime_total(), 24_300.0);
    }

    #[test]
    fn test_break_even_found() {
        // Early claimer banks 10k/year from 2030; delayed banks 18k/year from 2034
        let mut early = BenefitStream::new();
        let mut delayed = BenefitStream::new();
        let mut early_cum = 0.0;
        let mut delayed_cum = 0.0;
        for year in 2030..=2050 {
            early_cum += 10_000.0;
            early.insert(year, YearBenefit { monthly: 10_000.0 / 12.0, cumulative: early_cum });
            if year >= 2034 {
                delayed_cum += 18_000.0;
            }
            delayed.insert(year, YearBenefit { monthly: 1_500.0, cumulative: delayed_cum });
        }
        // Head start is 40k, annual gain is 8k: overtake during the 6th paying year
        assert_eq!(break_even_year(&early, &delayed), Some(2039));
    }

    #[test]
    fn test_break_even_never() {
        let early = stream(&[(2030, 1000.0, 12_000.0), (2031, 1000.0, 24_000.0)]);
        let delayed = stream(&[(2030, 100.0, 1_200.0), (2031, 100.0, 2_400.0)]);
        assert_eq!(break_even_year(&early, &delayed), None);
    }
}
