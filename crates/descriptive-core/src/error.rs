//! Error types for descriptive statistical analysis
//!
//! Provides a unified error type for all descriptive-stats crates.
//!
//! Statistical queries never fail with an error: undefined results are reported
//! through `Option` (and, for the coefficient of variation, `NaN`). Errors are
//! reserved for malformed input shapes and invalid configuration.

use thiserror::Error;

/// Contract stated when dynamic input is not a sequence of observations
pub const NOT_A_SEQUENCE: &str = "data must be an array/sequence";

/// Core error type for descriptive statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Argument has the wrong shape (e.g. a scalar where a sequence is required)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed JSON text
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for input that is not a sequence
    pub fn not_a_sequence() -> Self {
        Self::InvalidArgument(NOT_A_SEQUENCE.to_string())
    }

    /// Create an error for a sequence element that is not numeric
    pub fn not_a_number(index: usize, found: &serde_json::Value) -> Self {
        Self::InvalidInput(format!("element {index} is not a number: {found}"))
    }

    /// Create an error for an unusable outlier factor
    pub fn invalid_factor(factor: f64) -> Self {
        Self::InvalidParameter(format!(
            "Outlier factor {factor} must be finite and non-negative"
        ))
    }
}
