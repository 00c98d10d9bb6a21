//! Full Retirement Age schedule by birth year

use serde::{Deserialize, Serialize};

/// Full Retirement Age in years and months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullRetirementAge {
    pub years: u8,
    pub months: u8,
}

impl FullRetirementAge {
    pub const fn new(years: u8, months: u8) -> Self {
        Self { years, months }
    }

    /// Decimal years (month-granular)
    pub fn as_years(&self) -> f64 {
        self.years as f64 + self.months as f64 / 12.0
    }
}

/// Full Retirement Age for a given birth year
///
/// The statutory schedule: 65 for 1937 and earlier, rising in two-month
/// steps to 66 at 1943, flat through 1954, then rising again in two-month
/// steps to 67 at 1960. Years outside the table fall through to 67y0m so an
/// unexpected birth year cannot leave the projection without an FRA.
pub fn full_retirement_age(birth_year: i32) -> FullRetirementAge {
    match birth_year {
        ..=1937 => FullRetirementAge::new(65, 0),
        1938 => FullRetirementAge::new(65, 2),
        1939 => FullRetirementAge::new(65, 4),
        1940 => FullRetirementAge::new(65, 6),
        1941 => FullRetirementAge::new(65, 8),
        1942 => FullRetirementAge::new(65, 10),
        1943..=1954 => FullRetirementAge::new(66, 0),
        1955 => FullRetirementAge::new(66, 2),
        1956 => FullRetirementAge::new(66, 4),
        1957 => FullRetirementAge::new(66, 6),
        1958 => FullRetirementAge::new(66, 8),
        1959 => FullRetirementAge::new(66, 10),
        _ => FullRetirementAge::new(67, 0),
    }
}
