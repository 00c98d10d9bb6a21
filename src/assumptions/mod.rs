//! Engine assumptions: Full Retirement Age schedule and mortality data

mod fra;
mod mortality;
pub mod loader;

pub use fra::{full_retirement_age, FullRetirementAge};
pub use loader::LoadedAssumptions;
pub use mortality::{
    Education, HealthStatus, MortalityTable, RiskProfile, Smoking, CURVE_MAX_AGE,
    EXTREME_AGE_SURVIVAL, TABLE_MAX_AGE, TABLE_MIN_AGE,
};

use std::path::Path;

/// Container for all projection assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub mortality: MortalityTable,
}

impl Assumptions {
    /// Create assumptions with the built-in tables
    pub fn default_planning() -> Self {
        Self {
            mortality: MortalityTable::period_life_table(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Ok(Self {
            mortality: MortalityTable::from_loaded(&loaded),
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_planning()
    }
}
