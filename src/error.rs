//! Error types for portfolio projections

use thiserror::Error;

use crate::assumptions::RiskProfile;

/// Result type alias for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while loading inputs or running a projection
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A portfolio parameter failed validation
    #[error("Invalid parameter {field}: {reason}")]
    InvalidParameter { field: String, reason: String },

    /// A period-over-period return was requested against a zero base value
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    /// The return table has no row for the requested risk profile
    #[error("No return assumptions for risk profile {0}")]
    MissingRiskProfile(RiskProfile),

    /// A risk profile name could not be parsed
    #[error("Unknown risk profile: {0}")]
    UnknownRiskProfile(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectionError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a division by zero error
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }
}
