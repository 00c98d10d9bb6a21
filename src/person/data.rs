//! Person and household data structures supplied by the surrounding application

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Gender of a covered life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A claiming age with month granularity
///
/// Claim ages in the product flows run from 62y0m to 70y0m; the engine does
/// not re-validate the range because the adjustment formulas remain
/// well-defined (and monotonic) slightly outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimAge {
    pub years: u8,
    pub months: u8,
}

impl ClaimAge {
    pub const fn new(years: u8, months: u8) -> Self {
        Self { years, months }
    }

    /// Total months from birth to the claiming date
    pub fn total_months(&self) -> u32 {
        self.years as u32 * 12 + self.months as u32
    }

    /// Decimal years (month-granular)
    pub fn as_years(&self) -> f64 {
        self.years as f64 + self.months as f64 / 12.0
    }
}

/// Whether the person has already filed for benefits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FiledStatus {
    /// Not yet filed; projection uses `pia_at_fra` and `claim_age`
    NotFiled,
    /// Already receiving benefits; projection anchors on the current payment
    Filed {
        /// Monthly benefit currently in payment (then-current dollars)
        monthly_benefit: f64,
        /// Age at which the person filed
        filed_age: ClaimAge,
    },
}

/// One covered life as supplied by the caller
///
/// The date of birth is optional because the interactive planning tool feeds
/// momentarily incomplete inputs mid-edit; a person without a birth date
/// contributes a zero stream rather than crashing the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Date of birth (None while the caller's form is incomplete)
    pub date_of_birth: Option<NaiveDate>,

    /// Gender for mortality table lookup
    pub gender: Gender,

    /// Primary Insurance Amount: monthly benefit at Full Retirement Age
    pub pia_at_fra: f64,

    /// Chosen claiming age (ignored once filed)
    pub claim_age: ClaimAge,

    /// Filed status with current benefit details when already filed
    pub filed: FiledStatus,
}

impl Person {
    /// Create a not-yet-filed person
    pub fn new(date_of_birth: NaiveDate, gender: Gender, pia_at_fra: f64, claim_age: ClaimAge) -> Self {
        Self {
            date_of_birth: Some(date_of_birth),
            gender,
            pia_at_fra,
            claim_age,
            filed: FiledStatus::NotFiled,
        }
    }

    /// Create a person who has already filed and is receiving `monthly_benefit`
    pub fn already_filed(
        date_of_birth: NaiveDate,
        gender: Gender,
        monthly_benefit: f64,
        filed_age: ClaimAge,
    ) -> Self {
        Self {
            date_of_birth: Some(date_of_birth),
            gender,
            pia_at_fra: monthly_benefit,
            claim_age: filed_age,
            filed: FiledStatus::Filed {
                monthly_benefit,
                filed_age,
            },
        }
    }

    /// Birth year, if a date of birth is present
    pub fn birth_year(&self) -> Option<i32> {
        self.date_of_birth.map(|d| d.year())
    }

    /// Decimal age on a given date
    pub fn age_on(&self, date: NaiveDate) -> Option<f64> {
        let dob = self.date_of_birth?;
        Some((date - dob).num_days() as f64 / 365.25)
    }

    /// The age that drives the projection: filed age when filed, else the chosen claim age
    pub fn effective_claim_age(&self) -> ClaimAge {
        match self.filed {
            FiledStatus::Filed { filed_age, .. } => filed_age,
            FiledStatus::NotFiled => self.claim_age,
        }
    }

    /// Calendar date on which benefits start (birth-month aligned)
    pub fn claim_date(&self) -> Option<NaiveDate> {
        let dob = self.date_of_birth?;
        dob.checked_add_months(Months::new(self.effective_claim_age().total_months()))
    }

    /// Calendar year in which the person reaches a given age
    pub fn year_at_age(&self, age: u32) -> Option<i32> {
        self.date_of_birth.map(|d| d.year() + age as i32)
    }
}

/// How a couple's two streams are merged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoupleMode {
    /// Both benefits paid for the full horizon; combined monthly is the sum
    Plain,
    /// From the death year forward the survivor keeps the larger of the two
    /// benefits instead of the sum
    SurvivorSwitch { death_year: i32 },
    /// Lower-benefit partner files at 62, higher-benefit partner delays to 70
    Hybrid,
}

/// Household composition
///
/// A tagged representation rather than boolean flags so that illegal
/// combinations (e.g. a survivor switch with no spouse) are unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Household {
    /// One covered life; behaves identically to the person's own stream
    Single(Person),
    /// Two covered lives merged according to `mode`
    Couple {
        primary: Person,
        spouse: Person,
        mode: CoupleMode,
    },
}

impl Household {
    pub fn single(person: Person) -> Self {
        Household::Single(person)
    }

    pub fn couple(primary: Person, spouse: Person, mode: CoupleMode) -> Self {
        Household::Couple { primary, spouse, mode }
    }

    pub fn primary(&self) -> &Person {
        match self {
            Household::Single(p) => p,
            Household::Couple { primary, .. } => primary,
        }
    }

    pub fn spouse(&self) -> Option<&Person> {
        match self {
            Household::Single(_) => None,
            Household::Couple { spouse, .. } => Some(spouse),
        }
    }

    /// True when at least one member has a usable date of birth
    pub fn has_valid_birth_date(&self) -> bool {
        self.primary().date_of_birth.is_some()
            || self.spouse().is_some_and(|s| s.date_of_birth.is_some())
    }
}
