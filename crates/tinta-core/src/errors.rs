//! Error types for the estimator.

use thiserror::Error;

/// Errors raised while turning raw input into an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// A numeric field is missing, not a number, or not positive.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A quality or surface token is not in the coverage table (strict policy only).
    #[error("Unknown {kind} '{token}'")]
    UnknownCategory { kind: &'static str, token: String },
}
