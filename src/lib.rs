//! Retirement Engine - Benefit projection and survival modeling for claiming
//! strategies
//!
//! This library provides:
//! - Full Retirement Age resolution and month-precise claiming adjustments
//! - Year-indexed benefit streams under COLA compounding
//! - Household combination (survivor switch, hybrid 62/70 strategies)
//! - Policy-risk cut scenarios
//! - Actuarial survival curves with lifestyle risk adjustment

pub mod assumptions;
pub mod person;
pub mod projection;
pub mod scenario;
pub mod survival;

// Re-export commonly used types
pub use assumptions::{full_retirement_age, Assumptions, FullRetirementAge, MortalityTable, RiskProfile};
pub use person::{ClaimAge, CoupleMode, Gender, Household, Person};
pub use projection::{
    BenefitStream, CutScenario, EngineError, HouseholdProjection, ProjectionConfig,
    ProjectionEngine,
};
pub use scenario::ScenarioRunner;
pub use survival::{Life, SurvivalCurve, SurvivalModel, SurvivalThresholds};
