//! Household stream combination and the hybrid two-person claiming strategy

use super::stream::{BenefitStream, YearBenefit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which partner a hybrid segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerRole {
    Primary,
    Spouse,
}

impl PartnerRole {
    pub fn other(self) -> Self {
        match self {
            PartnerRole::Primary => PartnerRole::Spouse,
            PartnerRole::Spouse => PartnerRole::Primary,
        }
    }
}

/// Which hybrid segments are in payment at a given evaluation age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridSegments {
    /// The lower-benefit partner's file-at-62 segment
    pub early_active: bool,
    /// The higher-benefit partner's file-at-70 segment
    pub late_active: bool,
}

/// Result of the hybrid strategy selection for a couple
///
/// The partner with the lower age-62 monthly benefit (a proxy for relative
/// PIA size) files at 62; the other delays to 70. This two-boundary pair is a
/// heuristic, not an exhaustive search over claim-age combinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridPlan {
    /// Partner assigned the file-at-62 segment
    pub early_filer: PartnerRole,
    /// Stream of the partner filing at 62
    pub early_stream: BenefitStream,
    /// Stream of the partner delaying to 70
    pub late_stream: BenefitStream,
    /// The two streams combined with no death adjustment
    pub combined: BenefitStream,
}

impl HybridPlan {
    pub fn late_filer(&self) -> PartnerRole {
        self.early_filer.other()
    }

    /// Segment activity at an evaluation age: the early segment pays from 62
    /// onward, the delayed segment only once the evaluation age reaches 70
    pub fn active_segments(&self, evaluation_age: f64) -> HybridSegments {
        HybridSegments {
            early_active: evaluation_age >= 62.0,
            late_active: evaluation_age >= 70.0,
        }
    }
}

/// Merge two individual streams into one household stream
///
/// For every calendar year present in either stream the combined monthly is
/// the sum of both benefits (0 for a not-yet-filed partner). With a survivor
/// switch, years at or after the death year pay `max(primary, spouse)`
/// instead: the widow keeps the larger benefit, not both. Cumulative is an
/// annual running sum of monthly x 12; first-year month proration is applied
/// upstream in the individual streams, not recomputed here.
pub fn combine_couple(
    primary: &BenefitStream,
    spouse: &BenefitStream,
    survivor_switch: Option<i32>,
) -> BenefitStream {
    let years: BTreeSet<i32> = primary
        .iter()
        .map(|(y, _)| y)
        .chain(spouse.iter().map(|(y, _)| y))
        .collect();

    let mut combined = BenefitStream::new();
    let mut running = 0.0;

    for year in years {
        let p = primary.monthly_in(year);
        let s = spouse.monthly_in(year);

        let monthly = match survivor_switch {
            Some(death_year) if year >= death_year => p.max(s),
            _ => p + s,
        };

        running += monthly * 12.0;
        combined.insert(year, YearBenefit { monthly, cumulative: running });
    }

    combined
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
    fn test_plain_combination_sums() {
        let primary = level_stream(2030, 2040, 2_000.0);
        let spouse = level_stream(2033, 2040, 1_200.0);
        let combined = combine_couple(&primary, &spouse, None);

        // Spouse not yet filed in 2031: their side contributes 0
        assert_eq!(combined.monthly_in(2031), 2_000.0);
        assert_eq!(combined.monthly_in(2035), 3_200.0);
        assert_eq!(combined.first_year(), Some(2030));
        assert_eq!(combined.last_year(), Some(2040));
    }

    #[test]
    fn test_survivor_switch_takes_max_not_sum() {
        let primary = level_stream(2030, 2040, 2_000.0);
        let spouse = level_stream(2030, 2040, 1_200.0);
        let combined = combine_couple(&primary, &spouse, Some(2035));

        // Year before death: full sum
        assert_eq!(combined.monthly_in(2034), 3_200.0);
        // Death year onward: the larger benefit only
        assert_eq!(combined.monthly_in(2035), 2_000.0);
        assert_eq!(combined.monthly_in(2040), 2_000.0);
    }

    #[test]
    fn test_survivor_keeps_larger_of_the_two() {
        // Spouse holds the larger benefit; the survivor switches up to it
        let primary = level_stream(2030, 2040, 1_100.0);
        let spouse = level_stream(2030, 2040, 2_600.0);
        let combined = combine_couple(&primary, &spouse, Some(2032));
        assert_eq!(combined.monthly_in(2033), 2_600.0);
    }

    #[test]
    fn test_cumulative_is_running_annual_sum() {
        let primary = level_stream(2030, 2031, 1_000.0);
        let spouse = level_stream(2030, 2031, 500.0);
        let combined = combine_couple(&primary, &spouse, None);

        assert!((combined.cumulative_through(2030) - 18_000.0).abs() < 1e-9);
        assert!((combined.cumulative_through(2031) - 36_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_hybrid_segment_activation() {
        let plan = HybridPlan {
            early_filer: PartnerRole::Spouse,
            early_stream: level_stream(2030, 2040, 900.0),
            late_stream: level_stream(2038, 2040, 2_800.0),
            combined: level_stream(2030, 2040, 900.0),
        };

        assert_eq!(plan.late_filer(), PartnerRole::Primary);

        let at_65 = plan.active_segments(65.0);
        assert!(at_65.early_active && !at_65.late_active);

        let at_70 = plan.active_segments(70.0);
        assert!(at_70.early_active && at_70.late_active);

        let at_61 = plan.active_segments(61.5);
        assert!(!at_61.early_active && !at_61.late_active);
    }
}
