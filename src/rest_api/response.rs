//! # HTTP Surface Responses

use serde::Serialize;

use crate::catalog::{Rule, Savings};

/// Static metadata for one catalog rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub name: String,
    pub recommendation: String,
    pub confidence: u8,
    /// `"fixed"` or `"computed"` — condition and estimator bodies are code,
    /// not data, so only their shape is reported.
    pub savings_kind: &'static str,
}

impl From<&Rule> for RuleSummary {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name.to_string(),
            recommendation: rule.recommendation.to_string(),
            confidence: rule.confidence,
            savings_kind: match rule.savings {
                Savings::Fixed(_) => "fixed",
                Savings::Computed(_) => "computed",
            },
        }
    }
}

/// Liveness probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub rules: usize,
}
