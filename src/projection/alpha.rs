//! Yearly and cumulative alpha against the benchmark

use super::results::{AlphaPoint, ProjectionPoint};
use crate::error::{ProjectionError, Result};

/// Period return between two consecutive values
fn period_return(previous: f64, current: f64, series: &str, year: u32) -> Result<f64> {
    if previous == 0.0 {
        return Err(ProjectionError::division_by_zero(format!(
            "{} return for year {} (year {} value is zero)",
            series,
            year,
            year.saturating_sub(1)
        )));
    }
    Ok(current / previous - 1.0)
}

/// Compute yearly alpha (portfolio return minus benchmark return) and its
/// running sum for each projection year.
///
/// Year 0 has no prior value and always carries zero alpha. Cumulative
/// alpha is a simple sum of the yearly figures, not compounded.
pub fn compute_alpha(projection: &[ProjectionPoint]) -> Result<Vec<AlphaPoint>> {
    let mut alpha = Vec::with_capacity(projection.len());

    if let Some(first) = projection.first() {
        alpha.push(AlphaPoint {
            year: first.year,
            yearly_alpha: 0.0,
            cumulative_alpha: 0.0,
        });
    }

    let mut cumulative = 0.0;
    for pair in projection.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);

        let portfolio_return = period_return(prev.portfolio_value, curr.portfolio_value, "portfolio", curr.year)?;
        let benchmark_return = period_return(prev.benchmark_value, curr.benchmark_value, "benchmark", curr.year)?;

        let yearly_alpha = portfolio_return - benchmark_return;
        cumulative += yearly_alpha;

        alpha.push(AlphaPoint {
            year: curr.year,
            yearly_alpha,
            cumulative_alpha: cumulative,
        });
    }

    Ok(alpha)
}
