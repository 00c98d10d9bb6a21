//! Core projection engine: claiming-age adjustment, COLA growth, and
//! household combination over a calendar-year horizon

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::assumptions::{full_retirement_age, Assumptions};
use crate::person::{ClaimAge, CoupleMode, FiledStatus, Household, Person};
use crate::survival::SurvivalModel;

use super::benefit::{claim_adjustment_factor, monthly_benefit_at_claim};
use super::combine::{combine_couple, HybridPlan, PartnerRole};
use super::stream::{BenefitStream, YearBenefit};
use super::EngineError;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Valuation date ("now") from which current ages are measured
    pub as_of: NaiveDate,

    /// Project each stream through the year the person reaches this age
    pub horizon_age: u32,

    /// Annual COLA assumption, e.g. 0.025 for 2.5%
    pub inflation_rate: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            as_of: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            horizon_age: 95,
            inflation_rate: 0.025,
        }
    }
}

/// Projection output for a household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProjection {
    /// The primary person's individual stream
    pub primary: BenefitStream,

    /// The spouse's individual stream, when a spouse exists
    pub spouse: Option<BenefitStream>,

    /// The household stream after combination rules
    pub combined: BenefitStream,

    /// Hybrid strategy detail, present only for `CoupleMode::Hybrid`
    pub hybrid: Option<HybridPlan>,
}

impl HouseholdProjection {
    /// Summary scalars for display
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            first_year: self.combined.first_year(),
            last_year: self.combined.last_year(),
            primary_lifetime: self.primary.lifetime_total(),
            spouse_lifetime: self.spouse.as_ref().map_or(0.0, |s| s.lifetime_total()),
            combined_lifetime: self.combined.lifetime_total(),
        }
    }
}

/// Summary statistics for a household projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub primary_lifetime: f64,
    pub spouse_lifetime: f64,
    pub combined_lifetime: f64,
}

/// Main projection engine
///
/// Stateless and side-effect-free: every call is a deterministic mapping from
/// inputs to a fresh output, so results may be memoized by the caller and
/// independent households projected in parallel.
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Survival model over this engine's mortality assumptions, so benefit
    /// streams and milestone ages come from the same assumption set
    pub fn survival_model(&self) -> SurvivalModel {
        SurvivalModel::new(self.assumptions.mortality.clone())
    }

    /// Project one person's year-indexed benefit stream
    ///
    /// A person without a birth date contributes an empty stream; a missing
    /// or NaN PIA produces a zero-valued stream. The stream carries zero
    /// years from the year the person turns 62 up to the claim year, then the
    /// COLA-grown benefit through the horizon, with the claim year's
    /// cumulative prorated to the months from the claim month onward.
    pub fn project_person(&self, person: &Person) -> BenefitStream {
        let (Some(dob), Some(claim_date)) = (person.date_of_birth, person.claim_date()) else {
            return BenefitStream::new();
        };

        let rate = self.config.inflation_rate;
        let claim_year = claim_date.year();
        let claim_month = claim_date.month();
        let as_of_year = self.config.as_of.year();
        let horizon_year = dob.year() + self.config.horizon_age as i32;

        // Benefit in the first month of claiming, in claim-year dollars
        let monthly_at_claim = match person.filed {
            FiledStatus::Filed { monthly_benefit, .. } => monthly_benefit,
            FiledStatus::NotFiled => {
                let fra = full_retirement_age(dob.year());
                let current_age = person.age_on(self.config.as_of).unwrap_or(0.0);
                monthly_benefit_at_claim(
                    person.pia_at_fra,
                    person.claim_age.as_years(),
                    fra.as_years(),
                    current_age,
                    rate,
                )
            }
        };

        // Post-claim COLA compounding. Already-filed benefits are anchored at
        // the valuation year (historical years held flat at the current
        // payment); projected claims compound from the claim year.
        let monthly_for_year = |year: i32| -> f64 {
            match person.filed {
                FiledStatus::Filed { monthly_benefit, .. } => {
                    if year >= as_of_year {
                        monthly_benefit * (1.0 + rate).powi(year - as_of_year)
                    } else {
                        monthly_benefit
                    }
                }
                FiledStatus::NotFiled => monthly_at_claim * (1.0 + rate).powi(year - claim_year),
            }
        };

        let start_year = claim_year.min(dob.year() + 62);
        let mut stream = BenefitStream::new();
        let mut cumulative = 0.0;

        for year in start_year..=horizon_year {
            if year < claim_year {
                stream.insert(year, YearBenefit { monthly: 0.0, cumulative });
                continue;
            }

            let monthly = monthly_for_year(year);
            // Benefits start on the birth-month-aligned claim date, not Jan 1
            let months_paid = if year == claim_year {
                (13 - claim_month) as f64
            } else {
                12.0
            };
            cumulative += monthly * months_paid;
            stream.insert(year, YearBenefit { monthly, cumulative });
        }

        stream
    }

    /// Project a household under its claiming mode
    ///
    /// Fails only when no member has a valid birth date; that is a caller
    /// logic error, not a recoverable input state.
    pub fn project_household(
        &self,
        household: &Household,
    ) -> Result<HouseholdProjection, EngineError> {
        if !household.has_valid_birth_date() {
            return Err(EngineError::MissingBirthDates);
        }

        match household {
            Household::Single(person) => {
                // A household without a partner behaves identically to the
                // single stream
                let stream = self.project_person(person);
                Ok(HouseholdProjection {
                    primary: stream.clone(),
                    spouse: None,
                    combined: stream,
                    hybrid: None,
                })
            }
            Household::Couple { primary, spouse, mode } => {
                let (primary_stream, spouse_stream, combined, hybrid) = match mode {
                    CoupleMode::Plain => {
                        let p = self.project_person(primary);
                        let s = self.project_person(spouse);
                        let combined = combine_couple(&p, &s, None);
                        (p, s, combined, None)
                    }
                    CoupleMode::SurvivorSwitch { death_year } => {
                        let p = self.project_person(primary);
                        let s = self.project_person(spouse);
                        let combined = combine_couple(&p, &s, Some(*death_year));
                        (p, s, combined, None)
                    }
                    CoupleMode::Hybrid => {
                        let plan = self.hybrid_plan(primary, spouse);
                        let (p, s) = match plan.early_filer {
                            PartnerRole::Primary => {
                                (plan.early_stream.clone(), plan.late_stream.clone())
                            }
                            PartnerRole::Spouse => {
                                (plan.late_stream.clone(), plan.early_stream.clone())
                            }
                        };
                        let combined = plan.combined.clone();
                        (p, s, combined, Some(plan))
                    }
                };

                Ok(HouseholdProjection {
                    primary: primary_stream,
                    spouse: Some(spouse_stream),
                    combined,
                    hybrid,
                })
            }
        }
    }

    /// Build the hybrid 62/70 plan for a couple
    ///
    /// The age-62 monthly benefit stands in for relative PIA size; the lower
    /// of the two files at 62 and the other delays to 70. A tie resolves to
    /// the primary filing early. The 62/70 boundary pair is assumed optimal
    /// under monotonic adjustment factors; it is not proven by exhaustive
    /// search over the claim-age grid.
    fn hybrid_plan(&self, primary: &Person, spouse: &Person) -> HybridPlan {
        let early_filer = if self.age_62_proxy(primary) <= self.age_62_proxy(spouse) {
            PartnerRole::Primary
        } else {
            PartnerRole::Spouse
        };

        let (early_person, late_person) = match early_filer {
            PartnerRole::Primary => (primary, spouse),
            PartnerRole::Spouse => (spouse, primary),
        };

        let early_stream = self.project_person(&with_claim_age(early_person, ClaimAge::new(62, 0)));
        let late_stream = self.project_person(&with_claim_age(late_person, ClaimAge::new(70, 0)));
        let combined = combine_couple(&early_stream, &late_stream, None);

        HybridPlan {
            early_filer,
            early_stream,
            late_stream,
            combined,
        }
    }

    /// Monthly benefit if this person filed at exactly 62, used only to rank
    /// the two partners (COLA cancels out of the comparison)
    fn age_62_proxy(&self, person: &Person) -> f64 {
        let pia = if person.pia_at_fra.is_finite() && person.pia_at_fra > 0.0 {
            person.pia_at_fra
        } else {
            0.0
        };
        let fra = person
            .birth_year()
            .map(full_retirement_age)
            .map_or(67.0, |f| f.as_years());
        pia * claim_adjustment_factor(62.0, fra)
    }
}

/// Clone a person with an overridden claim age (already-filed persons keep
/// their filed age; a hybrid plan cannot unfile them)
fn with_claim_age(person: &Person, claim_age: ClaimAge) -> Person {
    let mut adjusted = person.clone();
    adjusted.claim_age = claim_age;
    adjusted
}
