//! Portfolio Projection - deterministic projection engine for tech-tilted ETF portfolios
//!
//! This library provides:
//! - Future value compounding with end- or beginning-of-period contributions
//! - Year-by-year portfolio projections against an S&P 500 benchmark
//! - Yearly and cumulative alpha (outperformance) series
//! - Risk-profile return tables, investor profiles and ETF allocation splits
//! - Batch and risk-profile scenario runs

pub mod error;
pub mod assumptions;
pub mod portfolio;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use assumptions::{CategoryReturns, ReturnTable, RiskProfile};
pub use portfolio::{InvestorProfile, PortfolioParameters};
pub use projection::{
    compute_alpha, future_value, AlphaPoint, ContributionTiming, ProjectionConfig, ProjectionEngine,
    ProjectionPoint, ProjectionResult,
};
pub use scenario::ScenarioRunner;
