//! Core projection engine for yearly portfolio and benchmark projections

use log::debug;

use super::alpha::compute_alpha;
use super::future_value::{future_value, ContributionTiming};
use super::results::{ProjectionPoint, ProjectionResult};
use crate::assumptions::ReturnTable;
use crate::error::Result;
use crate::portfolio::PortfolioParameters;

/// Target average annual outperformance over the S&P 500
pub const DEFAULT_ALPHA_TARGET: f64 = 0.01;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// When yearly contributions are credited
    pub contribution_timing: ContributionTiming,

    /// Average annual alpha the portfolio is expected to beat
    pub alpha_target: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            contribution_timing: ContributionTiming::EndOfPeriod,
            alpha_target: DEFAULT_ALPHA_TARGET,
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    returns: ReturnTable,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given return table and config
    pub fn new(returns: ReturnTable, config: ProjectionConfig) -> Self {
        Self { returns, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Allocation-weighted return of the portfolio under its risk profile
    pub fn blended_return(&self, params: &PortfolioParameters) -> Result<f64> {
        let rates = self.returns.get(params.risk_profile)?;
        Ok(rates.blended(params.tech_allocation, params.complementary_allocation))
    }

    /// Project portfolio, benchmark and contributions for years 0..=duration
    pub fn build_projection(&self, params: &PortfolioParameters) -> Result<Vec<ProjectionPoint>> {
        params.validate()?;

        let rates = self.returns.get(params.risk_profile)?;
        let blended = rates.blended(params.tech_allocation, params.complementary_allocation);
        let annual_contribution = params.annual_contribution();
        let timing = self.config.contribution_timing;

        debug!(
            "projecting {} years at blended {:.4} vs benchmark {:.4} ({})",
            params.investment_duration, blended, rates.benchmark, params.risk_profile
        );

        let points = (0..=params.investment_duration)
            .map(|year| {
                let t = year as f64;
                ProjectionPoint {
                    year,
                    portfolio_value: future_value(params.initial_investment, blended, t, annual_contribution, timing),
                    benchmark_value: future_value(params.initial_investment, rates.benchmark, t, annual_contribution, timing),
                    contributions_value: params.initial_investment + annual_contribution * t,
                }
            })
            .collect();

        Ok(points)
    }

    /// Run the projection and its alpha series
    pub fn project(&self, params: &PortfolioParameters) -> Result<ProjectionResult> {
        let points = self.build_projection(params)?;
        let alpha = compute_alpha(&points)?;
        let rates = self.returns.get(params.risk_profile)?;

        Ok(ProjectionResult {
            blended_return: rates.blended(params.tech_allocation, params.complementary_allocation),
            benchmark_return: rates.benchmark,
            points,
            alpha,
            alpha_target: self.config.alpha_target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{CategoryReturns, RiskProfile};
    use crate::error::ProjectionError;
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(ReturnTable::default_assumptions(), ProjectionConfig::default())
    }

    fn medium_70_30() -> PortfolioParameters {
        PortfolioParameters::new(100_000.0, 0.0, RiskProfile::Medium)
            .with_duration(5)
            .with_tech_allocation(0.7)
    }

    #[test]
    fn test_medium_mandate_example() {
        let engine = engine();
        let params = medium_70_30();

        assert_relative_eq!(engine.blended_return(&params).unwrap(), 0.105, epsilon = 1e-12);

        let points = engine.build_projection(&params).unwrap();
        let last = points.last().unwrap();
        assert_eq!(last.year, 5);
        assert_relative_eq!(last.portfolio_value, 100_000.0 * 1.105_f64.powi(5), epsilon = 1e-6);
        assert_relative_eq!(last.portfolio_value, 164_744.68, epsilon = 0.01);
        assert_relative_eq!(last.benchmark_value, 146_932.81, epsilon = 0.01);
        assert_relative_eq!(last.contributions_value, 100_000.0);
    }

    #[test]
    fn test_projection_shape() {
        let engine = engine();
        let params = medium_70_30().with_duration(12);
        let points = engine.build_projection(&params).unwrap();

        assert_eq!(points.len(), 13);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.year, i as u32);
        }
        assert_relative_eq!(points[0].portfolio_value, 100_000.0);
        assert_relative_eq!(points[0].benchmark_value, 100_000.0);
    }

    #[test]
    fn test_contributions_line() {
        let engine = engine();
        let params = PortfolioParameters::new(10_000.0, 500.0, RiskProfile::Low).with_duration(4);
        let points = engine.build_projection(&params).unwrap();

        assert_relative_eq!(points[3].contributions_value, 10_000.0 + 6_000.0 * 3.0);
        // Growth beats plain saving
        assert!(points[4].portfolio_value > points[4].contributions_value);
    }

    #[test]
    fn test_monotonic_with_positive_return() {
        let engine = engine();
        for profile in RiskProfile::ALL {
            let params = PortfolioParameters::new(50_000.0, 1_000.0, profile).with_duration(20);
            let points = engine.build_projection(&params).unwrap();
            assert!(points.windows(2).all(|w| w[1].portfolio_value > w[0].portfolio_value));
        }
    }

    #[test]
    fn test_beginning_of_period_timing() {
        let end = engine();
        let begin = ProjectionEngine::new(
            ReturnTable::default_assumptions(),
            ProjectionConfig {
                contribution_timing: ContributionTiming::BeginningOfPeriod,
                ..ProjectionConfig::default()
            },
        );
        let params = PortfolioParameters::new(10_000.0, 100.0, RiskProfile::High);

        let a = end.build_projection(&params).unwrap();
        let b = begin.build_projection(&params).unwrap();
        assert!(b[5].portfolio_value > a[5].portfolio_value);
        assert_relative_eq!(b[0].portfolio_value, a[0].portfolio_value);
    }

    #[test]
    fn test_alpha_series() {
        let result = engine().project(&medium_70_30()).unwrap();
        assert_eq!(result.alpha.len(), result.points.len());
        assert_eq!(result.alpha[0].cumulative_alpha, 0.0);

        // Without contributions each year's alpha is the plain rate spread
        for a in &result.alpha[1..] {
            assert_relative_eq!(a.yearly_alpha, 0.105 - 0.08, epsilon = 1e-9);
        }

        let mut running = 0.0;
        for a in &result.alpha {
            running += a.yearly_alpha;
            assert_relative_eq!(a.cumulative_alpha, running, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_summary() {
        let summary = engine().project(&medium_70_30()).unwrap().summary();
        assert_eq!(summary.years, 5);
        assert_relative_eq!(summary.total_contributions, 100_000.0);
        assert_relative_eq!(summary.projected_profit, summary.final_portfolio_value - 100_000.0);
        assert_relative_eq!(summary.portfolio_cagr, 0.105, epsilon = 1e-9);
        assert_relative_eq!(summary.average_annual_alpha, 0.025, epsilon = 1e-9);
        assert!(summary.meets_alpha_target);
    }

    #[test]
    fn test_zero_investment_alpha_fails() {
        let params = PortfolioParameters::new(0.0, 0.0, RiskProfile::Medium);
        let engine = engine();

        // The projection itself is well defined
        let points = engine.build_projection(&params).unwrap();
        assert!(points.iter().all(|p| p.portfolio_value == 0.0));

        let err = engine.project(&params).unwrap_err();
        assert!(matches!(err, ProjectionError::DivisionByZero { .. }));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut params = medium_70_30();
        params.complementary_allocation = 0.5;
        assert!(matches!(
            engine().build_projection(&params),
            Err(ProjectionError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_missing_profile_in_table() {
        let empty = ReturnTable::from_rows(Vec::<(RiskProfile, CategoryReturns)>::new());
        let engine = ProjectionEngine::new(empty, ProjectionConfig::default());
        let err = engine.build_projection(&medium_70_30()).unwrap_err();
        assert!(matches!(err, ProjectionError::MissingRiskProfile(RiskProfile::Medium)));
    }
}
