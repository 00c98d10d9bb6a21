//! Survival curve data structure and threshold-age search

use serde::{Deserialize, Serialize};

/// One point on a survival curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub age: u32,
    pub probability: f64,
}

/// Cumulative survival probability from an anchor age to each subsequent age
///
/// Probabilities start at 1.0 at the anchor and are non-increasing over a
/// bounded age domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalCurve {
    points: Vec<CurvePoint>,
}

/// Named percentile milestone ages for "how long will I live" planning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalThresholds {
    /// Age with a 75% chance of still being alive
    pub p75: f64,
    /// Median survival age (50%)
    pub p50: f64,
    /// Age with a 25% chance of still being alive
    pub p25: f64,
}

impl SurvivalCurve {
    /// Build from consecutive per-age points (one point per age, ascending)
    pub fn from_points(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn start_age(&self) -> Option<u32> {
        self.points.first().map(|p| p.age)
    }

    pub fn end_age(&self) -> Option<u32> {
        self.points.last().map(|p| p.age)
    }

    /// Probability of surviving to `age`: 1.0 before the anchor, the final
    /// probability past the end of the domain
    pub fn probability_at(&self, age: u32) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        if age <= first.age {
            return 1.0;
        }
        let idx = (age - first.age) as usize;
        match self.points.get(idx) {
            Some(point) => point.probability,
            None => self.points.last().map_or(0.0, |p| p.probability),
        }
    }

    /// Age at which survival probability falls to `target`, linearly
    /// interpolated between the bracketing curve ages
    ///
    /// Returns the last curve age when the threshold is never crossed; this
    /// is the defined boundary behavior, not an error.
    pub fn threshold_age(&self, target: f64) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        if first.probability <= target {
            return first.age as f64;
        }

        for pair in self.points.windows(2) {
            let (above, below) = (pair[0], pair[1]);
            if below.probability <= target {
                let span = above.probability - below.probability;
                if span <= 0.0 {
                    return below.age as f64;
                }
                let fraction = (above.probability - target) / span;
                return above.age as f64 + fraction * (below.age - above.age) as f64;
            }
        }

        self.points.last().map_or(first.age as f64, |p| p.age as f64)
    }

    /// The three named milestone ages (75%, 50%, 25% survival)
    pub fn thresholds(&self) -> SurvivalThresholds {
        SurvivalThresholds {
            p75: self.threshold_age(0.75),
            p50: self.threshold_age(0.50),
            p25: self.threshold_age(0.25),
        }
    }
}
