//! # Rule Definition Types
//!
//! A rule is a tagged record with function-valued fields: a pure condition
//! predicate over the fact view, static recommendation and explanation
//! texts, a savings estimator (literal or computed), and a confidence
//! percentage.

use std::collections::BTreeMap;
use std::fmt;

use crate::facts::{FactValue, FactView};

/// Condition predicate: returns the bound variables when the rule fires,
/// `None` otherwise. Must be pure and total over any constructed fact view.
pub type ConditionFn = fn(&FactView<'_>) -> Option<Bindings>;

/// Computed savings estimator over the merged fact context. Responsible for
/// its own clamping; the calculator only verifies the global invariant.
pub type SavingsFn = fn(&SavingsContext<'_>) -> SavingsRange;

/// Monthly savings estimate, either a fixed human-readable range or a
/// function of the fact context.
#[derive(Clone, Copy)]
pub enum Savings {
    /// Literal in `"Save ~LKR min-max/month."` form, already final.
    Fixed(&'static str),
    /// Computed from the merged fact context.
    Computed(SavingsFn),
}

impl fmt::Debug for Savings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Savings::Fixed(s) => f.debug_tuple("Fixed").field(s).finish(),
            Savings::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A non-negative monthly savings range in LKR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsRange {
    pub min: u32,
    pub max: u32,
}

impl SavingsRange {
    /// Build a range, clamping negative endpoints to zero and saturating
    /// at `u32::MAX` so oversized estimator arithmetic can never wrap or
    /// invert the range.
    pub fn of(min: i64, max: i64) -> Self {
        const CEIL: i64 = u32::MAX as i64;
        Self {
            min: min.clamp(0, CEIL) as u32,
            max: max.clamp(0, CEIL) as u32,
        }
    }
}

impl fmt::Display for SavingsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Variables a condition closed over when it fired (`count`, `hours`,
/// `age`, `opens`). Kept minimal and explicit rather than carrying the
/// whole fact set downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: BTreeMap<&'static str, FactValue>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, key: &'static str, value: i64) -> Self {
        self.values.insert(key, FactValue::Int(value));
        self
    }

    pub fn with_hours(mut self, key: &'static str, value: f64) -> Self {
        self.values.insert(key, FactValue::Float(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<FactValue> {
        self.values.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Merged context for computed savings: the full fact view plus the firing
/// rule's bindings, bindings taking precedence on key collision.
#[derive(Debug, Clone, Copy)]
pub struct SavingsContext<'a> {
    view: FactView<'a>,
    bindings: &'a Bindings,
}

impl<'a> SavingsContext<'a> {
    pub fn new(view: FactView<'a>, bindings: &'a Bindings) -> Self {
        Self { view, bindings }
    }

    /// Integer lookup, bindings first
    pub fn count(&self, key: &str) -> i64 {
        match self.bindings.get(key) {
            Some(FactValue::Int(n)) => n,
            Some(FactValue::Float(f)) => f as i64,
            _ => self.view.count(key),
        }
    }

    /// Hours lookup, bindings first
    pub fn hours(&self, key: &str) -> f64 {
        match self.bindings.get(key) {
            Some(FactValue::Float(f)) => f,
            Some(FactValue::Int(n)) => n as f64,
            _ => self.view.hours(key),
        }
    }
}

/// One advisory rule. Read-only after catalog construction.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Unique, stable identifier
    pub name: &'static str,
    /// Fires the rule when it returns bindings
    pub condition: ConditionFn,
    /// Static user-facing action text
    pub recommendation: &'static str,
    /// Raw rationale, input to the explanation renderer
    pub explanation: &'static str,
    /// Monthly savings estimate
    pub savings: Savings,
    /// Confidence percentage, 0-100
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{DefaultPolicy, FactSet};

    #[test]
    fn test_range_clamps_negative_endpoints() {
        let range = SavingsRange::of(-120, 300);
        assert_eq!(range, SavingsRange { min: 0, max: 300 });
        assert_eq!(range.to_string(), "0-300");
    }

    #[test]
    fn test_range_saturates_above_u32() {
        let big = (1i64 << 32) + 100;
        let range = SavingsRange::of(big, big + 100);
        assert_eq!(
            range,
            SavingsRange {
                min: u32::MAX,
                max: u32::MAX
            }
        );
    }

    #[test]
    fn test_range_stays_ordered_when_only_max_overflows() {
        let range = SavingsRange::of(100, (1i64 << 32) + 200);
        assert_eq!(
            range,
            SavingsRange {
                min: 100,
                max: u32::MAX
            }
        );
        assert!(range.min <= range.max);
    }

    #[test]
    fn test_bindings_shadow_facts_in_context() {
        let facts = FactSet::new().with_hours("hours", 1.0);
        let view = FactView::new(&facts, DefaultPolicy::UniformFalse);
        let bindings = Bindings::new().with_hours("hours", 7.0);
        let cx = SavingsContext::new(view, &bindings);
        assert_eq!(cx.hours("hours"), 7.0);
    }

    #[test]
    fn test_context_falls_back_to_facts() {
        let facts = FactSet::new().with_count("incandescent_count", 5);
        let view = FactView::new(&facts, DefaultPolicy::UniformFalse);
        let bindings = Bindings::new();
        let cx = SavingsContext::new(view, &bindings);
        assert_eq!(cx.count("incandescent_count"), 5);
    }
}
