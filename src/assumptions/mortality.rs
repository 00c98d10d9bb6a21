//! Mortality assumptions based on a national period life table with
//! lifestyle risk adjustment
//!
//! The model separates:
//! - Base mortality rates qx (deaths per 1,000) by age and gender
//! - A multiplicative risk factor from the three-way smoking/education/health
//!   profile (27 calibrated constants, never additive)
//!
//! Ages beyond the table's upper bound use a fixed fallback per-year survival
//! factor rather than extrapolated rates; this is a documented approximation.

use crate::person::Gender;
use serde::{Deserialize, Serialize};

/// Lowest age covered by the base table
pub const TABLE_MIN_AGE: u32 = 60;

/// Highest age covered by the base table
pub const TABLE_MAX_AGE: u32 = 105;

/// Survival curves extend one year past the table
pub const CURVE_MAX_AGE: u32 = 106;

/// Flat per-year survival factor applied past the table's upper bound.
/// A conservative placeholder, not derived from data.
pub const EXTREME_AGE_SURVIVAL: f64 = 0.7;

/// Smoking status of a covered life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Smoking {
    Never,
    Former,
    Current,
}

/// Highest education attained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    College,
    SomeCollege,
    HighSchool,
}

/// Self-reported health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
}

/// Three-way lifestyle profile mapped to a single multiplicative qx factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub smoking: Smoking,
    pub education: Education,
    pub health: HealthStatus,
}

/// Calibrated risk factors indexed [smoking][education][health].
///
/// Row order matches the enum declarations: smoking Never/Former/Current,
/// education College/SomeCollege/HighSchool, health Excellent/Good/Fair.
const RISK_FACTORS: [[[f64; 3]; 3]; 3] = [
    // Never smoked
    [
        [0.62, 0.76, 1.05],
        [0.70, 0.86, 1.17],
        [0.80, 0.98, 1.34],
    ],
    // Former smoker
    [
        [0.82, 1.00, 1.38],
        [0.92, 1.13, 1.55],
        [1.05, 1.29, 1.77],
    ],
    // Current smoker
    [
        [1.35, 1.66, 2.28],
        [1.52, 1.86, 2.56],
        [1.73, 2.12, 2.92],
    ],
];

impl RiskProfile {
    pub const fn new(smoking: Smoking, education: Education, health: HealthStatus) -> Self {
        Self { smoking, education, health }
    }

    /// The reference profile whose factor is calibrated to 1.0
    /// (former smoker, college, good health)
    pub const fn baseline() -> Self {
        Self::new(Smoking::Former, Education::College, HealthStatus::Good)
    }

    /// Multiplicative factor applied to every per-age base rate for this life
    pub fn multiplier(&self) -> f64 {
        let s = match self.smoking {
            Smoking::Never => 0,
            Smoking::Former => 1,
            Smoking::Current => 2,
        };
        let e = match self.education {
            Education::College => 0,
            Education::SomeCollege => 1,
            Education::HighSchool => 2,
        };
        let h = match self.health {
            HealthStatus::Excellent => 0,
            HealthStatus::Good => 1,
            HealthStatus::Fair => 2,
        };
        RISK_FACTORS[s][e][h]
    }
}

/// Mortality table with per-age, per-gender base rates
#[derive(Debug, Clone)]
pub struct MortalityTable {
    /// Base annual qx in deaths per 1,000, index 0 = age `TABLE_MIN_AGE`
    /// Stored as (female_rate, male_rate)
    base_rates: Vec<(f64, f64)>,
}

impl MortalityTable {
    /// Create the built-in national period life table (ages 60-105)
    pub fn period_life_table() -> Self {
        Self {
            base_rates: Self::period_life_base_rates(),
        }
    }

    /// Create from loaded CSV assumptions
    pub fn from_loaded(loaded: &super::loader::LoadedAssumptions) -> Self {
        Self {
            base_rates: loaded.mortality_base_rates.clone(),
        }
    }

    /// Create with custom base rates (index 0 = age 60, deaths per 1,000)
    pub fn new(base_rates: Vec<(f64, f64)>) -> Self {
        Self { base_rates }
    }

    /// Annual qx in deaths per 1,000 for a given age and gender
    ///
    /// Returns None past the table's upper bound; ages below the table clamp
    /// to the first entry so that slightly-early start ages stay well-defined.
    pub fn annual_rate_per_1000(&self, age: u32, gender: Gender) -> Option<f64> {
        if age > TABLE_MAX_AGE {
            return None;
        }
        let idx = age.saturating_sub(TABLE_MIN_AGE) as usize;
        let (female, male) = self.base_rates.get(idx).copied()?;
        Some(match gender {
            Gender::Female => female,
            Gender::Male => male,
        })
    }

    /// One-year survival probability at `age` with a risk multiplier applied
    ///
    /// The adjusted rate is capped at 999 per 1,000 so the probability never
    /// goes negative; ages past the table use the fixed fallback factor.
    pub fn yearly_survival(&self, age: u32, gender: Gender, multiplier: f64) -> f64 {
        match self.annual_rate_per_1000(age, gender) {
            Some(qx) => 1.0 - (qx * multiplier).min(999.0) / 1000.0,
            None => EXTREME_AGE_SURVIVAL,
        }
    }

    /// National period life table qx, deaths per 1,000, ages 60-105
    /// Stored as (female, male)
    fn period_life_base_rates() -> Vec<(f64, f64)> {
        vec![
            // Age 60-64
            (6.70, 11.20), (7.32, 12.01), (7.98, 12.87), (8.68, 13.77), (9.43, 14.75),
            // Age 65-69
            (10.30, 15.85), (11.28, 17.10), (12.37, 18.46), (13.57, 19.96), (14.91, 21.62),
            // Age 70-74
            (16.44, 23.53), (18.16, 25.69), (20.02, 28.04), (22.00, 30.57), (24.17, 33.35),
            // Age 75-79
            (26.71, 36.61), (29.60, 40.39), (32.72, 44.49), (36.03, 48.91), (39.68, 53.71),
            // Age 80-84
            (43.90, 59.05), (48.81, 65.12), (54.37, 71.93), (60.66, 79.47), (67.75, 87.85),
            // Age 85-89
            (75.73, 97.44), (84.67, 108.17), (94.65, 119.99), (105.69, 132.96), (117.85, 147.12),
            // Age 90-94
            (131.15, 162.55), (145.59, 179.31), (161.18, 197.46), (177.91, 217.01), (195.77, 237.96),
            // Age 95-99
            (214.73, 259.25), (233.76, 280.77), (252.75, 302.40), (271.56, 323.96), (290.06, 345.25),
            // Age 100-105
            (308.12, 366.06), (326.60, 387.43), (345.22, 409.06), (363.89, 430.81),
            (382.44, 452.51), (400.75, 473.95),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_full_domain() {
        let table = MortalityTable::period_life_table();
        for age in TABLE_MIN_AGE..=TABLE_MAX_AGE {
            assert!(
                table.annual_rate_per_1000(age, Gender::Male).is_some(),
                "missing male rate at age {}",
                age
            );
            assert!(table.annual_rate_per_1000(age, Gender::Female).is_some());
        }
        assert!(table.annual_rate_per_1000(TABLE_MAX_AGE + 1, Gender::Male).is_none());
    }

    #[test]
    fn test_rates_increase_with_age() {
        let table = MortalityTable::period_life_table();
        for gender in [Gender::Female, Gender::Male] {
            let mut prev = 0.0;
            for age in TABLE_MIN_AGE..=TABLE_MAX_AGE {
                let qx = table.annual_rate_per_1000(age, gender).unwrap();
                assert!(qx > prev, "qx not increasing at age {}", age);
                prev = qx;
            }
        }
    }

    #[test]
    fn test_female_rates_below_male() {
        let table = MortalityTable::period_life_table();
        for age in TABLE_MIN_AGE..=TABLE_MAX_AGE {
            let f = table.annual_rate_per_1000(age, Gender::Female).unwrap();
            let m = table.annual_rate_per_1000(age, Gender::Male).unwrap();
            assert!(f < m, "female qx not below male at age {}", age);
        }
    }

    #[test]
    fn test_yearly_survival_caps_extreme_multipliers() {
        let table = MortalityTable::period_life_table();
        // Adjusted rate would exceed 1,000 per 1,000 without the cap
        let survival = table.yearly_survival(105, Gender::Male, 10.0);
        assert!((survival - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_fallback_past_table() {
        let table = MortalityTable::period_life_table();
        assert_eq!(table.yearly_survival(106, Gender::Female, 1.0), EXTREME_AGE_SURVIVAL);
        assert_eq!(table.yearly_survival(120, Gender::Male, 2.0), EXTREME_AGE_SURVIVAL);
    }

    #[test]
    fn test_below_table_clamps_to_first_entry() {
        let table = MortalityTable::period_life_table();
        let at_60 = table.annual_rate_per_1000(60, Gender::Male).unwrap();
        let at_55 = table.annual_rate_per_1000(55, Gender::Male).unwrap();
        assert_eq!(at_55, at_60);
    }

    #[test]
    fn test_risk_factor_orderings() {
        let best = RiskProfile::new(Smoking::Never, Education::College, HealthStatus::Excellent);
        let worst = RiskProfile::new(Smoking::Current, Education::HighSchool, HealthStatus::Fair);
        assert!(best.multiplier() < 1.0);
        assert!(worst.multiplier() > 2.0);

        // Heavier smoking never decreases the factor, holding the rest fixed
        for education in [Education::College, Education::SomeCollege, Education::HighSchool] {
            for health in [HealthStatus::Excellent, HealthStatus::Good, HealthStatus::Fair] {
                let never = RiskProfile::new(Smoking::Never, education, health).multiplier();
                let former = RiskProfile::new(Smoking::Former, education, health).multiplier();
                let current = RiskProfile::new(Smoking::Current, education, health).multiplier();
                assert!(never < former && former < current);
            }
        }
    }

    #[test]
    fn test_baseline_profile_is_unity() {
        assert_eq!(RiskProfile::baseline().multiplier(), 1.0);
    }
}
