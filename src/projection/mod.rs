//! Benefit projection: claiming adjustments, COLA growth, streams,
//! household combination, and cut scenarios

pub mod benefit;
mod combine;
mod cut;
mod engine;
mod stream;

pub use combine::{combine_couple, HybridPlan, HybridSegments, PartnerRole};
pub use cut::CutScenario;
pub use engine::{HouseholdProjection, ProjectionConfig, ProjectionEngine, ProjectionSummary};
pub use stream::{break_even_year, BenefitStream, YearBenefit};

use thiserror::Error;

/// Errors surfaced to the caller instead of being clamped away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A household combination was requested but no member carries a usable
    /// date of birth; this indicates a caller logic error
    #[error("household combination requires at least one member with a valid birth date")]
    MissingBirthDates,
}
