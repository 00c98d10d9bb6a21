//! Load assumption tables from CSV files
//!
//! Allows the mortality table to be swapped without recompiling, e.g. for
//! sensitivity testing against an updated period life table.

use csv::Reader;
use std::error::Error;
use std::path::Path;

use super::mortality::TABLE_MIN_AGE;

/// Default directory for assumption CSV files
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Raw CSV row for the mortality table: Age,Female,Male (deaths per 1,000)
#[derive(Debug, serde::Deserialize)]
struct MortalityRow {
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Female")]
    female: f64,
    #[serde(rename = "Male")]
    male: f64,
}

/// Load per-age mortality rates, validating a contiguous age domain from 60
pub fn load_mortality_rates(path: &Path) -> Result<Vec<(f64, f64)>, Box<dyn Error>> {
    read_mortality_rates(Reader::from_path(path)?)
}

fn read_mortality_rates<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<(f64, f64)>, Box<dyn Error>> {
    let mut rates = Vec::new();
    let mut expected_age = TABLE_MIN_AGE;

    for result in reader.deserialize() {
        let row: MortalityRow = result?;
        if row.age != expected_age {
            return Err(format!(
                "mortality table ages must be contiguous from {}: expected {}, got {}",
                TABLE_MIN_AGE, expected_age, row.age
            )
            .into());
        }
        if row.female <= 0.0 || row.male <= 0.0 {
            return Err(format!("non-positive qx at age {}", row.age).into());
        }
        rates.push((row.female, row.male));
        expected_age += 1;
    }

    if rates.is_empty() {
        return Err("mortality table is empty".into());
    }

    Ok(rates)
}

/// All assumption data loaded from a directory
#[derive(Debug, Clone)]
pub struct LoadedAssumptions {
    /// (female, male) qx per 1,000, index 0 = age 60
    pub mortality_base_rates: Vec<(f64, f64)>,
}

impl LoadedAssumptions {
    /// Load from a specific directory
    pub fn load_from(dir: &Path) -> Result<Self, Box<dyn Error>> {
        let mortality_base_rates = load_mortality_rates(&dir.join("mortality_qx.csv"))?;
        log::info!(
            "loaded mortality table: {} ages from {}",
            mortality_base_rates.len(),
            TABLE_MIN_AGE
        );
        Ok(Self { mortality_base_rates })
    }

    /// Load from the default location (data/assumptions/)
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }
}
