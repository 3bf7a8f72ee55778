//! # Fact View
//!
//! Total read accessors over a [`FactSet`] with an explicit policy for
//! absent boolean facts.

use serde::{Deserialize, Serialize};

use super::set::{FactSet, FactValue};

/// Policy for boolean facts absent from the input.
///
/// The legacy data model defaulted appliance-presence flags
/// (`has_fans`, `has_rice_cooker`, `has_water_heater`) and `unplug_habit`
/// to true when absent, while every other boolean defaulted to false. That
/// asymmetry is preserved here as an explicit choice rather than silently
/// picking one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultPolicy {
    /// Every absent boolean reads as false.
    #[default]
    UniformFalse,
    /// Presence-style flags read as true when absent, everything else false.
    LegacyPresence,
}

/// Read facade over one evaluation's facts.
///
/// All accessors are total: absent keys default, numeric kinds coerce to
/// each other. Conditions and savings functions never observe an error.
#[derive(Debug, Clone, Copy)]
pub struct FactView<'a> {
    facts: &'a FactSet,
    policy: DefaultPolicy,
}

impl<'a> FactView<'a> {
    pub fn new(facts: &'a FactSet, policy: DefaultPolicy) -> Self {
        Self { facts, policy }
    }

    /// Boolean fact; absent reads as false regardless of policy.
    pub fn flag(&self, key: &str) -> bool {
        match self.facts.get(key) {
            Some(FactValue::Bool(b)) => b,
            _ => false,
        }
    }

    /// Presence-style boolean fact; the absent default follows the policy.
    pub fn assumed_flag(&self, key: &str) -> bool {
        match self.facts.get(key) {
            Some(FactValue::Bool(b)) => b,
            _ => match self.policy {
                DefaultPolicy::UniformFalse => false,
                DefaultPolicy::LegacyPresence => true,
            },
        }
    }

    /// Integer fact; absent reads as 0.
    pub fn count(&self, key: &str) -> i64 {
        match self.facts.get(key) {
            Some(FactValue::Int(n)) => n,
            Some(FactValue::Float(f)) => f as i64,
            _ => 0,
        }
    }

    /// Hours fact; absent reads as 0.0.
    pub fn hours(&self, key: &str) -> f64 {
        match self.facts.get(key) {
            Some(FactValue::Float(f)) => f,
            Some(FactValue::Int(n)) => n as f64,
            _ => 0.0,
        }
    }

    /// The underlying fact set
    pub fn facts(&self) -> &FactSet {
        self.facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_facts_default() {
        let facts = FactSet::new();
        let view = FactView::new(&facts, DefaultPolicy::UniformFalse);
        assert!(!view.flag("has_ac"));
        assert_eq!(view.count("fan_count"), 0);
        assert_eq!(view.hours("ac_hours"), 0.0);
    }

    #[test]
    fn test_assumed_flag_follows_policy() {
        let facts = FactSet::new();
        let uniform = FactView::new(&facts, DefaultPolicy::UniformFalse);
        let legacy = FactView::new(&facts, DefaultPolicy::LegacyPresence);
        assert!(!uniform.assumed_flag("has_fans"));
        assert!(legacy.assumed_flag("has_fans"));
    }

    #[test]
    fn test_present_value_ignores_policy() {
        let facts = FactSet::new().with_flag("has_fans", false);
        let legacy = FactView::new(&facts, DefaultPolicy::LegacyPresence);
        assert!(!legacy.assumed_flag("has_fans"));
    }

    #[test]
    fn test_numeric_coercion() {
        let facts = FactSet::new()
            .with_hours("fridge_age", 6.0)
            .with_count("heater_hours", 2);
        let view = FactView::new(&facts, DefaultPolicy::UniformFalse);
        assert_eq!(view.count("fridge_age"), 6);
        assert_eq!(view.hours("heater_hours"), 2.0);
    }
}
