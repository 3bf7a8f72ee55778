//! # Rephrasing Capability
//!
//! The external natural-language collaborator, behind a trait so the
//! renderer can be exercised deterministically with a fake. The HTTP
//! implementation talks to a chat-completions endpoint; model identity,
//! endpoint, and credentials are configuration concerns.

use std::collections::VecDeque;
use std::sync::RwLock;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::errors::{RephraseError, RephraseResult};

/// Rephrasing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RephraseConfig {
    /// Whether to call the external service at all
    #[serde(default)]
    pub enabled: bool,

    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub api_token_env: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://router.huggingface.co/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "meta-llama/Meta-Llama-3-8B-Instruct".to_string()
}

fn default_token_env() -> String {
    "HF_TOKEN".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for RephraseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            model: default_model(),
            api_token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Function-shaped dependency: prompt in, text or failure out.
pub trait Rephraser: Send + Sync {
    fn rephrase(&self, prompt: &str) -> RephraseResult<String>;
}

/// HTTP client for a chat-completions rephrasing endpoint.
pub struct HttpRephraser {
    client: Client,
    endpoint: String,
    model: String,
    token: String,
}

impl HttpRephraser {
    /// Build the client from config, reading the token from the configured
    /// environment variable. Constructed once, reused across evaluations.
    pub fn from_config(config: &RephraseConfig) -> RephraseResult<Self> {
        let token = std::env::var(&config.api_token_env)
            .map_err(|_| RephraseError::MissingToken(config.api_token_env.clone()))?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            token,
        })
    }
}

impl Rephraser for HttpRephraser {
    fn rephrase(&self, prompt: &str) -> RephraseResult<String> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RephraseError::Status(status.as_u16()));
        }

        let payload: Value = response.json()?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(RephraseError::MalformedResponse)?;
        Ok(content.trim().to_string())
    }
}

/// Always-unavailable rephraser for offline mode: every explanation takes
/// the deterministic fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRephraser;

impl Rephraser for DisabledRephraser {
    fn rephrase(&self, _prompt: &str) -> RephraseResult<String> {
        Err(RephraseError::Unavailable("rephrasing disabled".to_string()))
    }
}

/// Scripted rephraser for tests: queued responses or failures, with the
/// received prompts recorded for inspection.
#[derive(Default)]
pub struct MockRephraser {
    script: RwLock<VecDeque<Option<String>>>,
    prompts: RwLock<Vec<String>>,
}

impl MockRephraser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn push_response(&self, text: impl Into<String>) {
        self.script.write().unwrap().push_back(Some(text.into()));
    }

    /// Queue a failure
    pub fn push_failure(&self) {
        self.script.write().unwrap().push_back(None);
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

impl Rephraser for MockRephraser {
    fn rephrase(&self, prompt: &str) -> RephraseResult<String> {
        self.prompts.write().unwrap().push(prompt.to_string());
        match self.script.write().unwrap().pop_front() {
            Some(Some(text)) => Ok(text),
            _ => Err(RephraseError::Unavailable("script exhausted".to_string())),
        }
    }
}
