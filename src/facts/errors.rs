//! # Fact Input Errors
//!
//! Shape anomalies in the supplied fact set. The data-entry form upstream is
//! responsible for type-correct input, so these are treated as fatal rather
//! than silently coerced.

use thiserror::Error;

/// Result type for fact operations
pub type FactResult<T> = Result<T, FactError>;

/// Fact input errors
#[derive(Debug, Clone, Error)]
pub enum FactError {
    #[error("Fact input must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("Fact '{key}' must be a boolean, got {got}")]
    ExpectedBool { key: String, got: String },

    #[error("Fact '{key}' must be a non-negative integer, got {got}")]
    ExpectedCount { key: String, got: String },

    #[error("Fact '{key}' must be a non-negative number of hours, got {got}")]
    ExpectedHours { key: String, got: String },

    #[error("Fact '{key}' has unsupported value type: {got}")]
    UnsupportedValue { key: String, got: String },
}
