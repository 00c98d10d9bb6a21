//! Claiming-age benefit adjustment and cost-of-living projection
//!
//! These are the month-precise statutory formulas; they are the single source
//! of truth for claiming adjustments. Everything clamps rather than errors so
//! a momentarily invalid input from the planning UI cannot crash a view.

/// Delayed retirement credit: 2/3 of 1% per month past FRA, through age 70
const DELAYED_CREDIT_PER_MONTH: f64 = 2.0 / 3.0 / 100.0;

/// Early reduction for the first 36 months before FRA: 5/9 of 1% per month
const EARLY_REDUCTION_FIRST_36: f64 = 5.0 / 9.0 / 100.0;

/// Early reduction beyond 36 months: 5/12 of 1% per month
const EARLY_REDUCTION_BEYOND_36: f64 = 5.0 / 12.0 / 100.0;

/// Adjustment factor for claiming at `claim_age_years` relative to FRA
///
/// Months are rounded to the nearest whole month. Claiming at or after FRA
/// earns the delayed credit; claiming before FRA applies the tiered early
/// reduction, floor-clamped at 0 so the factor is never negative. Callers
/// clamp claim ages above 70 before calling; the product flows never request
/// one.
pub fn claim_adjustment_factor(claim_age_years: f64, fra_years: f64) -> f64 {
    let months_from_fra = ((claim_age_years - fra_years) * 12.0).round() as i64;

    if months_from_fra >= 0 {
        1.0 + DELAYED_CREDIT_PER_MONTH * months_from_fra as f64
    } else {
        let months_early = (-months_from_fra) as f64;
        let reduction = months_early.min(36.0) * EARLY_REDUCTION_FIRST_36
            + (months_early - 36.0).max(0.0) * EARLY_REDUCTION_BEYOND_36;
        (1.0 - reduction).max(0.0)
    }
}

/// Pre-claim COLA factor growing the PIA baseline between now and claiming
///
/// Compounds over the years from current age up to age 60, plus whole years
/// from 62 up to the floor of the claim age. Ages 60-61 are a statutory COLA
/// blackout and earn nothing. Returns 1 when the claim age is already reached.
pub fn preclaim_cola_factor(current_age: f64, claim_age: f64, annual_rate: f64) -> f64 {
    if claim_age <= current_age {
        return 1.0;
    }
    let pre60_years = (claim_age.min(60.0) - current_age).max(0.0);
    let cola_years_from_62 = (claim_age.floor() - 62.0).max(0.0);
    (1.0 + annual_rate).powf(pre60_years + cola_years_from_62)
}

/// Monthly benefit payable in the first month of claiming, in then-current
/// dollars
///
/// Missing or NaN PIA is treated as 0, producing a zero-valued stream rather
/// than failing.
pub fn monthly_benefit_at_claim(
    pia_at_fra: f64,
    claim_age_years: f64,
    fra_years: f64,
    current_age: f64,
    annual_rate: f64,
) -> f64 {
    let pia = if pia_at_fra.is_finite() && pia_at_fra > 0.0 {
        pia_at_fra
    } else {
        0.0
    };
    let grown = pia * preclaim_cola_factor(current_age, claim_age_years, annual_rate);
    grown * claim_adjustment_factor(claim_age_years, fra_years)
}
