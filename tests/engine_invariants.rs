//! Engine Invariant Tests
//!
//! - The three output lists always have equal length, equal to the number
//!   of rules whose condition holds
//! - Firing is independent of evaluation order and of other rules
//! - Sparse fact sets never fail; absent keys default
//! - Both boolean defaulting policies behave as configured

use wattsage::advisor::Advisor;
use wattsage::catalog::RuleCatalog;
use wattsage::config::AdvisorConfig;
use wattsage::engine::InferenceEngine;
use wattsage::facts::{DefaultPolicy, FactSet, FactView};
use wattsage::render::MockRephraser;

// =============================================================================
// Helper Functions
// =============================================================================

fn offline_advisor(policy: DefaultPolicy) -> Advisor {
    let config = AdvisorConfig {
        default_policy: policy,
        ..AdvisorConfig::default()
    };
    Advisor::new(&config, Box::new(MockRephraser::new())).unwrap()
}

fn busy_household() -> FactSet {
    FactSet::new()
        .with_count("incandescent_count", 5)
        .with_count("cfl_count", 3)
        .with_hours("lights_left_on", 2.0)
        .with_flag("has_ac", true)
        .with_hours("ac_hours", 7.0)
        .with_flag("has_fans", true)
        .with_count("fan_count", 3)
        .with_hours("fan_hours", 5.0)
        .with_flag("windows_closed", true)
        .with_count("fridge_age", 12)
        .with_count("fridge_door_opens", 15)
        .with_flag("has_rice_cooker", true)
        .with_hours("rice_cooker_keep_warm", 3.0)
        .with_flag("has_water_heater", true)
        .with_hours("heater_hours", 3.0)
        .with_hours("iron_hours", 1.0)
        .with_flag("peak_hour_use", true)
        .with_hours("total_appliance_hours", 4.0)
        .with_flag("unplug_habit", false)
}

// =============================================================================
// Triple Shape
// =============================================================================

/// Output lists are co-indexed and equal in length to the firing count.
#[test]
fn test_triple_length_matches_firing_count() {
    let advisor = offline_advisor(DefaultPolicy::UniformFalse);
    let facts = busy_household();

    let catalog = RuleCatalog::builtin().unwrap();
    let view = FactView::new(&facts, DefaultPolicy::UniformFalse);
    let fired = InferenceEngine::new(&catalog).infer(&view);

    let advice = advisor.advise(&facts).unwrap();
    assert_eq!(advice.recommendations.len(), fired.len());
    assert_eq!(advice.fired_rules.len(), fired.len());
    assert_eq!(advice.explanations.len(), fired.len());
}

/// The busy household trips every rule in the catalog.
#[test]
fn test_busy_household_fires_all_sixteen() {
    let advisor = offline_advisor(DefaultPolicy::UniformFalse);
    let advice = advisor.advise(&busy_household()).unwrap();
    assert_eq!(advice.fired_rules.len(), 16);
}

// =============================================================================
// Firing Independence
// =============================================================================

/// Re-evaluating the same facts fires the same rules every time.
#[test]
fn test_inference_is_deterministic() {
    let catalog = RuleCatalog::builtin().unwrap();
    let facts = busy_household();
    let view = FactView::new(&facts, DefaultPolicy::UniformFalse);
    let engine = InferenceEngine::new(&catalog);

    let first: Vec<String> = engine.infer(&view).into_iter().map(|f| f.name).collect();
    for _ in 0..50 {
        let again: Vec<String> = engine.infer(&view).into_iter().map(|f| f.name).collect();
        assert_eq!(first, again);
    }
}

/// Adding unrelated facts never changes an unrelated rule's firing.
#[test]
fn test_rules_are_independent() {
    let catalog = RuleCatalog::builtin().unwrap();
    let engine = InferenceEngine::new(&catalog);

    let base = FactSet::new().with_count("incandescent_count", 4);
    let extended = base.clone().with_count("fridge_age", 12);

    let view = FactView::new(&base, DefaultPolicy::UniformFalse);
    let base_led = engine.infer(&view).iter().any(|f| f.name == "LED_Lighting");

    let view = FactView::new(&extended, DefaultPolicy::UniformFalse);
    let extended_led = engine.infer(&view).iter().any(|f| f.name == "LED_Lighting");

    assert!(base_led);
    assert_eq!(base_led, extended_led);
}

// =============================================================================
// Default Handling
// =============================================================================

/// A completely empty fact set evaluates without error.
#[test]
fn test_sparse_facts_never_fail() {
    let advisor = offline_advisor(DefaultPolicy::UniformFalse);
    assert!(advisor.advise(&FactSet::new()).is_ok());
}

/// Scenario D: under uniform-false defaults, only Standby_Unplug is
/// satisfied by an empty fact set (its condition checks for false).
#[test]
fn test_empty_facts_uniform_policy_fires_only_standby() {
    let advisor = offline_advisor(DefaultPolicy::UniformFalse);
    let advice = advisor.advise(&FactSet::new()).unwrap();
    assert_eq!(advice.fired_rules, vec!["Standby_Unplug"]);
}

/// Under the legacy policy, unplug_habit reads true when absent and
/// nothing fires from an empty fact set.
#[test]
fn test_empty_facts_legacy_policy_fires_nothing() {
    let advisor = offline_advisor(DefaultPolicy::LegacyPresence);
    let advice = advisor.advise(&FactSet::new()).unwrap();
    assert!(advice.fired_rules.is_empty());
}

/// The legacy presence default only matters when the threshold facts are
/// present without the flag: keep-warm hours with no has_rice_cooker fact.
#[test]
fn test_legacy_presence_assumes_appliance() {
    let facts = FactSet::new().with_hours("rice_cooker_keep_warm", 3.0);

    let legacy = offline_advisor(DefaultPolicy::LegacyPresence)
        .advise(&facts)
        .unwrap();
    assert!(legacy.fired_rules.contains(&"Rice_Cooker_Timer".to_string()));

    let uniform = offline_advisor(DefaultPolicy::UniformFalse)
        .advise(&facts)
        .unwrap();
    assert!(!uniform.fired_rules.contains(&"Rice_Cooker_Timer".to_string()));
}
