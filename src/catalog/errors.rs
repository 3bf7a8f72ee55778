//! # Catalog Errors
//!
//! Configuration defects in the rule catalog. All of these are fatal: a
//! correctly configured catalog never produces them at runtime.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Duplicate rule name: {0}")]
    DuplicateName(String),

    #[error("Rule '{name}' has confidence {value}, expected 0-100")]
    ConfidenceOutOfRange { name: String, value: u8 },

    #[error("Rule '{name}' is malformed: {reason}")]
    MalformedRule { name: String, reason: String },

    #[error("Rule '{name}' resolved an invalid savings range {min}-{max}")]
    InvalidSavingsRange { name: String, min: u32, max: u32 },
}
