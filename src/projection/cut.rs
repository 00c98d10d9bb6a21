//! Policy-risk stress test: a uniform proportional benefit cut from a given
//! calendar year forward

use super::stream::{BenefitStream, YearBenefit};
use serde::{Deserialize, Serialize};

/// A modeled future benefit reduction (e.g. trust-fund depletion)
///
/// Typical caller inputs: cut year 2030-2050, percentage 10-35.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutScenario {
    /// First calendar year the cut applies
    pub cut_year: i32,
    /// Reduction as a percentage, e.g. 21.0 for a 21% cut
    pub cut_percentage: f64,
}

impl CutScenario {
    pub fn new(cut_year: i32, cut_percentage: f64) -> Self {
        Self { cut_year, cut_percentage }
    }

    /// Retention factor applied to monthly benefits from the cut year forward,
    /// floor-clamped at 0
    pub fn retention_factor(&self) -> f64 {
        (1.0 - self.cut_percentage / 100.0).max(0.0)
    }

    /// Produce the adjusted stream; the baseline is never mutated
    ///
    /// The cumulative is rebuilt as a fresh running sum over each year's
    /// adjusted accrual (derived from the baseline's cumulative deltas, which
    /// preserves any first-year month proration) rather than subtracted
    /// post-hoc, to avoid compounding errors.
    pub fn apply(&self, baseline: &BenefitStream) -> BenefitStream {
        let factor = self.retention_factor();
        let mut adjusted = BenefitStream::new();
        let mut prev_cumulative = 0.0;
        let mut running = 0.0;

        for (year, entry) in baseline.iter() {
            let accrual = entry.cumulative - prev_cumulative;
            prev_cumulative = entry.cumulative;

            let (monthly, accrual) = if year >= self.cut_year {
                (entry.monthly * factor, accrual * factor)
            } else {
                (entry.monthly, accrual)
            };

            running += accrual;
            adjusted.insert(year, YearBenefit { monthly, cumulative: running });
        }

        adjusted
    }

    /// Lifetime benefits lost to the cut relative to the baseline
    pub fn lifetime_delta(&self, baseline: &BenefitStream) -> f64 {
        baseline.lifetime_total() - self.apply(baseline).lifetime_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_stream(start: i32, end: i32, monthly: f64) -> BenefitStream {
        let mut s = BenefitStream::new();
        let mut cumulative = 0.0;
        for year in start..=end {
            cumulative += monthly * 12.0;
            s.insert(year, YearBenefit { monthly, cumulative });
        }
        s
    }

    #[test]
    fn test_zero_percent_reproduces_baseline() {
        let baseline = level_stream(2030, 2060, 1_800.0);
        let cut = CutScenario::new(2035, 0.0);
        assert_eq!(cut.apply(&baseline), baseline);
        assert_eq!(cut.lifetime_delta(&baseline), 0.0);
    }

    #[test]
    fn test_full_cut_zeroes_from_cut_year() {
        let baseline = level_stream(2030, 2040, 1_000.0);
        let adjusted = CutScenario::new(2035, 100.0).apply(&baseline);

        assert_eq!(adjusted.monthly_in(2034), 1_000.0);
        for year in 2035..=2040 {
            assert_eq!(adjusted.monthly_in(year), 0.0);
        }
        // Cumulative freezes at the pre-cut total
        assert_eq!(adjusted.lifetime_total(), baseline.cumulative_through(2034));
    }

    #[test]
    fn test_years_before_cut_unchanged() {
        let baseline = level_stream(2030, 2050, 2_000.0);
        let adjusted = CutScenario::new(2033, 21.0).apply(&baseline);

        for year in 2030..=2032 {
            assert_eq!(adjusted.get(year), baseline.get(year));
        }
        assert!((adjusted.monthly_in(2033) - 2_000.0 * 0.79).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_is_fresh_running_sum() {
        let baseline = level_stream(2030, 2034, 1_000.0);
        let adjusted = CutScenario::new(2032, 50.0).apply(&baseline);

        // 2 full years + 3 half years
        let expected = 2.0 * 12_000.0 + 3.0 * 6_000.0;
        assert!((adjusted.lifetime_total() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_preserves_first_year_proration() {
        // First year accrues only 7 months of benefit
        let mut baseline = BenefitStream::new();
        baseline.insert(2030, YearBenefit { monthly: 1_000.0, cumulative: 7_000.0 });
        baseline.insert(2031, YearBenefit { monthly: 1_000.0, cumulative: 19_000.0 });

        let adjusted = CutScenario::new(2030, 10.0).apply(&baseline);
        assert!((adjusted.cumulative_through(2030) - 6_300.0).abs() < 1e-9);
        assert!((adjusted.cumulative_through(2031) - (6_300.0 + 10_800.0)).abs() < 1e-9);
    }

    #[test]
    fn test_over_100_percent_clamps_to_zero() {
        let baseline = level_stream(2030, 2035, 1_000.0);
        let adjusted = CutScenario::new(2030, 140.0).apply(&baseline);
        assert_eq!(adjusted.lifetime_total(), 0.0);
    }
}
