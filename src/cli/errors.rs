//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use thiserror::Error;

use crate::advisor::AdvisorError;
use crate::config::ConfigError;
use crate::render::RephraseError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot read facts file: {0}")]
    FactsIo(#[from] std::io::Error),

    #[error("Facts file is not valid JSON: {0}")]
    FactsJson(#[from] serde_json::Error),

    #[error("{0}")]
    Advisor(#[from] AdvisorError),

    #[error("Cannot initialize rephrasing client: {0}")]
    Rephrase(#[from] RephraseError),

    #[error("Server error: {0}")]
    Server(String),
}
