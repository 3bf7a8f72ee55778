//! # Advisor Configuration
//!
//! Process configuration loaded once from a JSON file: the boolean
//! defaulting policy for sparse fact sets and the rephrasing client
//! settings. Every field has a working default, so an empty object is a
//! valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facts::DefaultPolicy;
use crate::render::RephraseConfig;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level advisor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// How absent boolean facts read (see [`DefaultPolicy`])
    #[serde(default)]
    pub default_policy: DefaultPolicy,

    /// External rephrasing settings
    #[serde(default)]
    pub rephrase: RephraseConfig,

    /// Bind address for the HTTP surface
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port for the HTTP surface
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8088
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_policy: DefaultPolicy::default(),
            rephrase: RephraseConfig::default(),
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl AdvisorConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Full bind address with port
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
