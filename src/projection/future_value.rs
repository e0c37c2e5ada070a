//! Closed-form future value and growth-rate helpers

use serde::{Deserialize, Serialize};

/// When periodic contributions land within each period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionTiming {
    /// Ordinary annuity: contributions at the end of each period
    #[default]
    EndOfPeriod,
    /// Annuity due: contributions at the start of each period
    BeginningOfPeriod,
}

/// Future value of a lump sum plus a level annual contribution.
///
/// # Arguments
/// * `present_value` - Amount invested at time 0
/// * `annual_rate` - Annual growth rate as a decimal (may be zero or negative)
/// * `years` - Elapsed time in years (fractional years allowed)
/// * `annual_contribution` - Contribution added each year
/// * `timing` - Whether contributions land at the start or end of each year
///
/// A zero rate degenerates to simple accumulation.
pub fn future_value(
    present_value: f64,
    annual_rate: f64,
    years: f64,
    annual_contribution: f64,
    timing: ContributionTiming,
) -> f64 {
    if annual_rate == 0.0 {
        return present_value + annual_contribution * years;
    }

    let growth = (1.0 + annual_rate).powf(years);
    let fv_principal = present_value * growth;

    let mut fv_annuity = annual_contribution * (growth - 1.0) / annual_rate;
    if timing == ContributionTiming::BeginningOfPeriod {
        fv_annuity *= 1.0 + annual_rate;
    }

    fv_principal + fv_annuity
}

/// Compound annual growth rate between two values; zero for a non-positive
/// starting value or horizon
pub fn cagr(initial_value: f64, final_value: f64, years: f64) -> f64 {
    if initial_value <= 0.0 || years <= 0.0 {
        return 0.0;
    }

    (final_value / initial_value).powf(1.0 / years) - 1.0
}
