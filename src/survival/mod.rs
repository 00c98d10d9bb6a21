//! Survival modeling: individual and joint-life curves with lifestyle risk
//! adjustment
//!
//! Independent of the benefit projection pipeline; shares only the mortality
//! table and age/gender inputs.

mod curve;

pub use curve::{CurvePoint, SurvivalCurve, SurvivalThresholds};

use crate::assumptions::{MortalityTable, RiskProfile, CURVE_MAX_AGE};
use crate::person::Gender;
use serde::{Deserialize, Serialize};

/// One life for survival modeling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Life {
    /// Current (anchor) age
    pub current_age: u32,
    pub gender: Gender,
    pub profile: RiskProfile,
}

impl Life {
    pub fn new(current_age: u32, gender: Gender, profile: RiskProfile) -> Self {
        Self { current_age, gender, profile }
    }
}

/// Joint-life survival output for a couple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSurvival {
    /// First life's individual curve, anchored at their own start age
    pub first: SurvivalCurve,
    /// Second life's individual curve
    pub second: SurvivalCurve,
    /// Probability at least one of the two survives to each age
    pub either: SurvivalCurve,
    /// Probability both survive to each age
    pub both: SurvivalCurve,
}

/// Survival curve engine over a mortality table
#[derive(Debug, Clone)]
pub struct SurvivalModel {
    mortality: MortalityTable,
}

impl SurvivalModel {
    pub fn new(mortality: MortalityTable) -> Self {
        Self { mortality }
    }

    /// Model over the built-in period life table
    pub fn default_planning() -> Self {
        Self::new(MortalityTable::period_life_table())
    }

    /// Cumulative survival curve for one life from their current age to 106
    ///
    /// P(a) is the product of risk-adjusted one-year survival probabilities
    /// from the anchor age up to a-1; the anchor itself carries 1.0. Anchor
    /// ages past the curve maximum clamp to it, yielding a single-point curve.
    pub fn individual_curve(&self, life: &Life) -> SurvivalCurve {
        let multiplier = life.profile.multiplier();
        let anchor = life.current_age.min(CURVE_MAX_AGE);
        let mut points = Vec::with_capacity((CURVE_MAX_AGE - anchor + 1) as usize);
        let mut probability = 1.0;
        points.push(CurvePoint { age: anchor, probability });

        for age in anchor..CURVE_MAX_AGE {
            probability *= self.mortality.yearly_survival(age, life.gender, multiplier);
            points.push(CurvePoint { age: age + 1, probability });
        }

        SurvivalCurve::from_points(points)
    }

    /// Joint curves for two lives, aligned on attained age
    ///
    /// Each life's probability of reaching age `a` is anchored at their own
    /// start age (1.0 for ages they have already reached). "Either" composes
    /// as 1 - (1-P1)(1-P2); "both" as P1 x P2.
    pub fn joint_curves(&self, first: &Life, second: &Life) -> JointSurvival {
        let first_curve = self.individual_curve(first);
        let second_curve = self.individual_curve(second);

        let start = first.current_age.min(second.current_age).min(CURVE_MAX_AGE);
        let span = (CURVE_MAX_AGE - start + 1) as usize;
        let mut either_points = Vec::with_capacity(span);
        let mut both_points = Vec::with_capacity(span);

        for age in start..=CURVE_MAX_AGE {
            let p1 = first_curve.probability_at(age);
            let p2 = second_curve.probability_at(age);
            either_points.push(CurvePoint {
                age,
                probability: 1.0 - (1.0 - p1) * (1.0 - p2),
            });
            both_points.push(CurvePoint {
                age,
                probability: p1 * p2,
            });
        }

        JointSurvival {
            first: first_curve,
            second: second_curve,
            either: SurvivalCurve::from_points(either_points),
            both: SurvivalCurve::from_points(both_points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{Education, HealthStatus, Smoking};

    fn average_profile() -> RiskProfile {
        RiskProfile::baseline()
    }

    #[test]
    fn test_curve_anchored_at_one_and_non_increasing() {
        let model = SurvivalModel::default_planning();
        let life = Life::new(65, Gender::Female, average_profile());
        let curve = model.individual_curve(&life);

        assert_eq!(curve.start_age(), Some(65));
        assert_eq!(curve.end_age(), Some(106));
        assert!((curve.probability_at(65) - 1.0).abs() < 1e-12);

        let mut prev = f64::INFINITY;
        for point in curve.points() {
            assert!(point.probability <= prev, "curve increased at age {}", point.age);
            assert!(point.probability >= 0.0);
            prev = point.probability;
        }
    }

    #[test]
    fn test_higher_risk_lowers_median_age() {
        let model = SurvivalModel::default_planning();
        let healthy = Life::new(
            65,
            Gender::Male,
            RiskProfile::new(Smoking::Never, Education::College, HealthStatus::Excellent),
        );
        let smoker = Life::new(
            65,
            Gender::Male,
            RiskProfile::new(Smoking::Current, Education::HighSchool, HealthStatus::Fair),
        );

        let healthy_median = model.individual_curve(&healthy).threshold_age(0.5);
        let smoker_median = model.individual_curve(&smoker).threshold_age(0.5);
        assert!(
            healthy_median > smoker_median + 3.0,
            "healthy median {} not clearly above smoker median {}",
            healthy_median,
            smoker_median
        );
    }

    #[test]
    fn test_female_outlives_male_on_average() {
        let model = SurvivalModel::default_planning();
        let female = Life::new(62, Gender::Female, average_profile());
        let male = Life::new(62, Gender::Male, average_profile());

        let f_median = model.individual_curve(&female).threshold_age(0.5);
        let m_median = model.individual_curve(&male).threshold_age(0.5);
        assert!(f_median > m_median);
    }

    #[test]
    fn test_median_in_plausible_range() {
        let model = SurvivalModel::default_planning();
        let life = Life::new(65, Gender::Male, average_profile());
        let median = model.individual_curve(&life).threshold_age(0.5);
        assert!((78.0..=90.0).contains(&median), "median {} implausible", median);
    }

    #[test]
    fn test_anchor_age_past_curve_max_clamps() {
        let model = SurvivalModel::default_planning();
        let life = Life::new(107, Gender::Female, average_profile());
        let curve = model.individual_curve(&life);

        // Single-point curve at the maximum, no panic
        assert_eq!(curve.start_age(), Some(106));
        assert_eq!(curve.end_age(), Some(106));
        assert!((curve.probability_at(106) - 1.0).abs() < 1e-12);

        let other = Life::new(110, Gender::Male, average_profile());
        let joint = model.joint_curves(&life, &other);
        assert_eq!(joint.either.start_age(), Some(106));
        assert!((joint.both.probability_at(106) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_joint_bounds() {
        let model = SurvivalModel::default_planning();
        let first = Life::new(66, Gender::Female, average_profile());
        let second = Life::new(63, Gender::Male, average_profile());
        let joint = model.joint_curves(&first, &second);

        assert_eq!(joint.either.start_age(), Some(63));
        for age in 63..=106 {
            let p1 = joint.first.probability_at(age);
            let p2 = joint.second.probability_at(age);
            let either = joint.either.probability_at(age);
            let both = joint.both.probability_at(age);

            assert!(either <= 1.0 + 1e-12);
            assert!(
                either >= p1.max(p2) - 1e-12,
                "either {} below max individual at age {}",
                either,
                age
            );
            assert!(both <= p1.min(p2) + 1e-12);
            assert!((both - p1 * p2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_either_median_beyond_individual_medians() {
        let model = SurvivalModel::default_planning();
        let first = Life::new(65, Gender::Female, average_profile());
        let second = Life::new(65, Gender::Male, average_profile());
        let joint = model.joint_curves(&first, &second);

        let either_median = joint.either.threshold_age(0.5);
        let first_median = joint.first.threshold_age(0.5);
        let second_median = joint.second.threshold_age(0.5);
        assert!(either_median >= first_median.max(second_median));
    }
}
