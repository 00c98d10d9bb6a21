//! Scenario runner for efficient batch projections
//!
//! Pre-loads assumptions once, then allows running many projections with
//! different configurations without re-reading CSV files. Every run is a
//! pure function of its inputs, so recomputation is only needed when an
//! input actually changes.

use crate::assumptions::Assumptions;
use crate::person::Household;
use crate::projection::{
    BenefitStream, CutScenario, EngineError, HouseholdProjection, ProjectionConfig,
    ProjectionEngine,
};
use crate::survival::{JointSurvival, Life, SurvivalCurve, SurvivalModel};

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [0.02, 0.025, 0.03] {
///     let config = ProjectionConfig { inflation_rate: rate, ..Default::default() };
///     let projection = runner.run(&household, config)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base assumptions
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the built-in planning assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_planning(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single household projection with the given config
    pub fn run(
        &self,
        household: &Household,
        config: ProjectionConfig,
    ) -> Result<HouseholdProjection, EngineError> {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        engine.project_household(household)
    }

    /// Run projections for multiple households with the same config
    pub fn run_batch(
        &self,
        households: &[Household],
        config: ProjectionConfig,
    ) -> Vec<Result<HouseholdProjection, EngineError>> {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        households
            .iter()
            .map(|h| engine.project_household(h))
            .collect()
    }

    /// Run multiple configs (e.g. an inflation sweep) for one household
    pub fn run_scenarios(
        &self,
        household: &Household,
        configs: &[ProjectionConfig],
    ) -> Vec<Result<HouseholdProjection, EngineError>> {
        configs
            .iter()
            .map(|config| self.run(household, *config))
            .collect()
    }

    /// Apply a policy-risk cut to a projected stream
    ///
    /// The baseline stays untouched for side-by-side comparison.
    pub fn run_cut(&self, baseline: &BenefitStream, cut: &CutScenario) -> BenefitStream {
        cut.apply(baseline)
    }

    /// Survival curve for one life over the runner's mortality table
    pub fn survival_curve(&self, life: &Life) -> SurvivalCurve {
        SurvivalModel::new(self.base_assumptions.mortality.clone()).individual_curve(life)
    }

    /// Joint survival curves for a couple
    pub fn joint_survival(&self, first: &Life, second: &Life) -> JointSurvival {
        SurvivalModel::new(self.base_assumptions.mortality.clone()).joint_curves(first, second)
    }

    /// Get reference to base assumptions for inspection/modification
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{ClaimAge, Gender, Person};
    use chrono::NaiveDate;

    fn test_household() -> Household {
        Household::single(Person::new(
            NaiveDate::from_ymd_opt(1960, 1, 15).unwrap(),
            Gender::Female,
            2_000.0,
            ClaimAge::new(67, 0),
        ))
    }

    #[test]
    fn test_inflation_sweep() {
        let runner = ScenarioRunner::new();
        let household = test_household();

        let configs: Vec<_> = [0.0, 0.02, 0.04]
            .iter()
            .map(|&rate| ProjectionConfig {
                inflation_rate: rate,
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(&household, &configs);
        assert_eq!(results.len(), 3);

        // Higher COLA assumption means higher lifetime benefits
        let totals: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().combined.lifetime_total())
            .collect();
        assert!(totals[0] < totals[1] && totals[1] < totals[2]);
    }

    #[test]
    fn test_cut_leaves_baseline_available() {
        let runner = ScenarioRunner::new();
        let projection = runner
            .run(&test_household(), ProjectionConfig::default())
            .unwrap();

        let cut = CutScenario::new(2035, 21.0);
        let adjusted = runner.run_cut(&projection.combined, &cut);

        assert!(adjusted.lifetime_total() < projection.combined.lifetime_total());
        // Baseline is still intact
        assert!(projection.combined.lifetime_total() > 0.0);
    }
}
