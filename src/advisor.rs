//! # Advisor Pipeline
//!
//! The evaluation entry point: one fact set in, one ordered triple out.
//! Facts flow through inference, display ordering, savings resolution, and
//! explanation rendering. The caller always receives three co-indexed,
//! equal-length lists; external-service failures never surface here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{CatalogError, RuleCatalog, SavingsContext};
use crate::config::AdvisorConfig;
use crate::engine::{sort_for_display, InferenceEngine, SavingsCalculator};
use crate::facts::{DefaultPolicy, FactError, FactSet, FactView};
use crate::observability::{Logger, Severity};
use crate::render::{ExplanationRenderer, Rephraser};

/// Result type for advisor evaluations
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Fatal evaluation errors: input-shape anomalies and configuration
/// defects. External-service failures are absorbed inside rendering and
/// never appear here.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("{0}")]
    Facts(#[from] FactError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

/// One evaluation's output: three co-indexed lists in display order.
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub evaluation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<String>,
    pub fired_rules: Vec<String>,
    pub explanations: Vec<String>,
}

/// The advisor: immutable catalog plus injected rephrasing dependency,
/// constructed once and reused across evaluations.
pub struct Advisor {
    catalog: RuleCatalog,
    policy: DefaultPolicy,
    calculator: SavingsCalculator,
    renderer: ExplanationRenderer,
}

impl Advisor {
    /// Build an advisor over the builtin catalog.
    pub fn new(config: &AdvisorConfig, rephraser: Box<dyn Rephraser>) -> AdvisorResult<Self> {
        Ok(Self {
            catalog: RuleCatalog::builtin()?,
            policy: config.default_policy,
            calculator: SavingsCalculator::new(),
            renderer: ExplanationRenderer::new(rephraser),
        })
    }

    /// Evaluate one fact set.
    pub fn advise(&self, facts: &FactSet) -> AdvisorResult<Advice> {
        let evaluation_id = Uuid::new_v4();
        let id_str = evaluation_id.to_string();
        let view = FactView::new(facts, self.policy);

        let mut fired = InferenceEngine::new(&self.catalog).infer(&view);
        sort_for_display(&mut fired);

        let mut recommendations = Vec::with_capacity(fired.len());
        let mut fired_rules = Vec::with_capacity(fired.len());
        let mut explanations = Vec::with_capacity(fired.len());

        for firing in &fired {
            let rule = self.catalog.get(&firing.name)?;
            let cx = SavingsContext::new(view, &firing.bindings);
            let savings = self.calculator.resolve(rule, &cx)?;

            let rendered =
                self.renderer
                    .render(rule.explanation, &savings.display, rule.confidence);
            if rendered.fallback {
                Logger::log(
                    Severity::Warn,
                    "rephrase_fallback",
                    &[("evaluation_id", &id_str), ("rule", rule.name)],
                );
            }

            recommendations.push(firing.recommendation.clone());
            fired_rules.push(firing.name.clone());
            explanations.push(rendered.text);
        }

        Logger::log(
            Severity::Info,
            "evaluation_complete",
            &[
                ("evaluation_id", &id_str),
                ("fired", &fired_rules.len().to_string()),
            ],
        );

        Ok(Advice {
            evaluation_id,
            generated_at: Utc::now(),
            recommendations,
            fired_rules,
            explanations,
        })
    }

    /// Evaluate a raw JSON fact object (the HTTP and CLI entry path).
    pub fn advise_json(&self, input: &serde_json::Value) -> AdvisorResult<Advice> {
        let facts = FactSet::from_json(input)?;
        self.advise(&facts)
    }

    /// The catalog this advisor evaluates
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MockRephraser;

    fn offline_advisor() -> Advisor {
        let config = AdvisorConfig::default();
        Advisor::new(&config, Box::new(MockRephraser::new())).unwrap()
    }

    #[test]
    fn test_triple_lists_stay_co_indexed() {
        let advisor = offline_advisor();
        let facts = FactSet::new()
            .with_flag("has_ac", true)
            .with_hours("ac_hours", 7.0)
            .with_count("incandescent_count", 5);
        let advice = advisor.advise(&facts).unwrap();
        assert_eq!(advice.recommendations.len(), advice.fired_rules.len());
        assert_eq!(advice.fired_rules.len(), advice.explanations.len());
    }

    #[test]
    fn test_advise_json_rejects_bad_shape() {
        let advisor = offline_advisor();
        let result = advisor.advise_json(&serde_json::json!({ "has_ac": "yes" }));
        assert!(matches!(result, Err(AdvisorError::Facts(_))));
    }

    #[test]
    fn test_no_firings_yields_empty_triple() {
        let config = AdvisorConfig {
            default_policy: DefaultPolicy::LegacyPresence,
            ..AdvisorConfig::default()
        };
        let advisor = Advisor::new(&config, Box::new(MockRephraser::new())).unwrap();
        let advice = advisor.advise(&FactSet::new()).unwrap();
        assert!(advice.recommendations.is_empty());
        assert!(advice.fired_rules.is_empty());
        assert!(advice.explanations.is_empty());
    }
}
