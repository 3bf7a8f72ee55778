//! # Rule Catalog
//!
//! The closed, ordered set of advisory rules. Rules are read-only after
//! construction; there is no mutation, deletion, or dynamic registration.
//! Name resolution is centralized here so business logic never embeds its
//! own catalog scans.

pub mod definitions;
pub mod errors;
pub mod rule;

pub use errors::{CatalogError, CatalogResult};
pub use rule::{Bindings, Rule, Savings, SavingsContext, SavingsRange};

/// The ordered rule catalog with validated invariants.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Build a catalog, rejecting duplicate names and out-of-range
    /// confidence values. Both are configuration defects, not input errors.
    pub fn new(rules: Vec<Rule>) -> CatalogResult<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for rule in &rules {
            if !seen.insert(rule.name) {
                return Err(CatalogError::DuplicateName(rule.name.to_string()));
            }
            if rule.confidence > 100 {
                return Err(CatalogError::ConfidenceOutOfRange {
                    name: rule.name.to_string(),
                    value: rule.confidence,
                });
            }
        }
        Ok(Self { rules })
    }

    /// The builtin household-energy catalog.
    pub fn builtin() -> CatalogResult<Self> {
        Self::new(definitions::builtin_rules())
    }

    /// Look up a rule by name. A miss means the catalog and a caller
    /// disagree about what exists, which is fatal.
    pub fn get(&self, name: &str) -> CatalogResult<&Rule> {
        self.rules
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CatalogError::UnknownRule(name.to_string()))
    }

    /// Iterate rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
