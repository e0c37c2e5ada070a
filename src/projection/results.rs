//! Projection output structures

use serde::{Deserialize, Serialize};

use super::future_value::cagr;

/// Portfolio, benchmark and contributions at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub portfolio_value: f64,
    pub benchmark_value: f64,
    /// Initial investment plus contributions, without growth
    pub contributions_value: f64,
}

/// Outperformance over the benchmark for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaPoint {
    pub year: u32,
    pub yearly_alpha: f64,
    /// Running sum of yearly alpha up to and including this year
    pub cumulative_alpha: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Allocation-weighted portfolio return used for compounding
    pub blended_return: f64,

    /// Benchmark return used for compounding
    pub benchmark_return: f64,

    /// Yearly rows, year 0 through the horizon
    pub points: Vec<ProjectionPoint>,

    /// Alpha rows aligned with `points`
    pub alpha: Vec<AlphaPoint>,

    /// Target average annual alpha the summary is judged against
    pub alpha_target: f64,
}

impl ProjectionResult {
    /// Horizon in years (number of points minus year 0)
    pub fn years(&self) -> u32 {
        self.points.len().saturating_sub(1) as u32
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let first = self.points.first();
        let last = self.points.last();

        let initial = first.map(|p| p.portfolio_value).unwrap_or(0.0);
        let final_portfolio_value = last.map(|p| p.portfolio_value).unwrap_or(0.0);
        let final_benchmark_value = last.map(|p| p.benchmark_value).unwrap_or(0.0);
        let total_contributions = last.map(|p| p.contributions_value).unwrap_or(0.0);
        let cumulative_alpha = self.alpha.last().map(|a| a.cumulative_alpha).unwrap_or(0.0);

        let years = self.years();
        let average_annual_alpha = if years > 0 {
            cumulative_alpha / years as f64
        } else {
            0.0
        };

        ProjectionSummary {
            years,
            final_portfolio_value,
            final_benchmark_value,
            total_contributions,
            projected_profit: final_portfolio_value - total_contributions,
            portfolio_cagr: cagr(initial, final_portfolio_value, years as f64),
            cumulative_alpha,
            average_annual_alpha,
            meets_alpha_target: average_annual_alpha >= self.alpha_target,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_portfolio_value: f64,
    pub final_benchmark_value: f64,
    pub total_contributions: f64,
    pub projected_profit: f64,
    pub portfolio_cagr: f64,
    pub cumulative_alpha: f64,
    pub average_annual_alpha: f64,
    pub meets_alpha_target: bool,
}
