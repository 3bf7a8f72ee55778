//! # Rephrasing Errors
//!
//! Failures of the external rephrasing capability. Unlike catalog and fact
//! errors these are expected operating conditions: the renderer always
//! recovers locally via the fallback path and never propagates them.

use thiserror::Error;

/// Result type for rephrasing calls
pub type RephraseResult<T> = Result<T, RephraseError>;

/// Rephrasing call failures
#[derive(Debug, Error)]
pub enum RephraseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rephrasing service returned status {0}")]
    Status(u16),

    #[error("Rephrasing response had no usable content")]
    MalformedResponse,

    #[error("API token environment variable '{0}' is not set")]
    MissingToken(String),

    #[error("Rephrasing unavailable: {0}")]
    Unavailable(String),
}
