//! Projection engine for portfolio, benchmark and alpha series

mod future_value;
mod engine;
mod alpha;
mod results;

pub use future_value::{cagr, future_value, ContributionTiming};
pub use engine::{ProjectionConfig, ProjectionEngine, DEFAULT_ALPHA_TARGET};
pub use alpha::compute_alpha;
pub use results::{AlphaPoint, ProjectionPoint, ProjectionResult, ProjectionSummary};
