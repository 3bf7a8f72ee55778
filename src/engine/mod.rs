//! # Inference Engine
//!
//! Single-pass forward chaining from a fact set to the set of fired rules.
//! Conditions are pure and independent: no rule's firing can trigger or
//! suppress another's, so evaluation order never changes which rules fire.

pub mod order;
pub mod savings;

pub use order::sort_for_display;
pub use savings::{ResolvedSavings, SavingsCalculator};

use crate::catalog::{Bindings, RuleCatalog};
use crate::facts::FactView;

/// The result of one rule's condition holding.
#[derive(Debug, Clone)]
pub struct FiredRule {
    /// Rule name, resolvable back through the catalog
    pub name: String,
    /// The rule's static action text
    pub recommendation: String,
    /// The fact-derived values the condition observed
    pub bindings: Bindings,
}

/// Evaluates every catalog rule against one fact view.
#[derive(Debug, Clone, Copy)]
pub struct InferenceEngine<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> InferenceEngine<'a> {
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Evaluate all conditions in catalog order and collect the firings.
    /// Rules with overlapping conditions may all fire; that is intended.
    pub fn infer(&self, view: &FactView<'_>) -> Vec<FiredRule> {
        let mut fired = Vec::new();
        for rule in self.catalog.iter() {
            if let Some(bindings) = (rule.condition)(view) {
                fired.push(FiredRule {
                    name: rule.name.to_string(),
                    recommendation: rule.recommendation.to_string(),
                    bindings,
                });
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{DefaultPolicy, FactSet};

    fn infer(facts: &FactSet, policy: DefaultPolicy) -> Vec<FiredRule> {
        let catalog = RuleCatalog::builtin().unwrap();
        let view = FactView::new(facts, policy);
        InferenceEngine::new(&catalog).infer(&view)
    }

    #[test]
    fn test_overlapping_ac_rules_both_fire() {
        let facts = FactSet::new()
            .with_flag("has_ac", true)
            .with_hours("ac_hours", 7.0);
        let fired = infer(&facts, DefaultPolicy::UniformFalse);
        let names: Vec<&str> = fired.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"AC_Usage_Reduction"));
        assert!(names.contains(&"AC_Efficiency"));
    }

    #[test]
    fn test_empty_facts_under_uniform_policy() {
        // All boolean facts read false, so only Standby_Unplug (which checks
        // for false) can fire from an empty set.
        let fired = infer(&FactSet::new(), DefaultPolicy::UniformFalse);
        let names: Vec<&str> = fired.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Standby_Unplug"]);
    }

    #[test]
    fn test_empty_facts_under_legacy_policy() {
        // unplug_habit reads true when absent, so nothing fires.
        let fired = infer(&FactSet::new(), DefaultPolicy::LegacyPresence);
        assert!(fired.is_empty());
    }

    #[test]
    fn test_bindings_carry_observed_values() {
        let facts = FactSet::new().with_count("fridge_door_opens", 15);
        let fired = infer(&facts, DefaultPolicy::UniformFalse);
        let habit = fired
            .iter()
            .find(|f| f.name == "Fridge_Door_Habits")
            .unwrap();
        assert_eq!(
            habit.bindings.get("opens"),
            Some(crate::facts::FactValue::Int(15))
        );
    }
}
