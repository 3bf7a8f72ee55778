//! # Savings Resolution
//!
//! Resolves each fired rule's savings field to a concrete LKR range.
//! Computed estimators run against the merged fact context; fixed literals
//! are parsed out of their surrounding phrase. Either way the global
//! invariant (min <= max, non-negative) is verified here.

use crate::catalog::{
    CatalogError, CatalogResult, Rule, Savings, SavingsContext, SavingsRange,
};

/// Fixed phrase surrounding a literal savings range
const FIXED_PREFIX: &str = "Save ~LKR ";
const FIXED_SUFFIX: &str = "/month.";

/// A fired rule's savings, resolved to numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSavings {
    pub range: SavingsRange,
    /// `"min-max"`, the substring interpolated into explanations
    pub display: String,
}

/// Resolves savings fields for fired rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsCalculator;

impl SavingsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Resolve one rule's savings against the merged context.
    pub fn resolve(
        &self,
        rule: &Rule,
        cx: &SavingsContext<'_>,
    ) -> CatalogResult<ResolvedSavings> {
        let (range, display) = match rule.savings {
            Savings::Computed(f) => {
                let range = f(cx);
                (range, range.to_string())
            }
            Savings::Fixed(literal) => {
                let inner = strip_fixed_phrase(literal).ok_or_else(|| {
                    CatalogError::MalformedRule {
                        name: rule.name.to_string(),
                        reason: format!("unparsable savings literal '{}'", literal),
                    }
                })?;
                let range = parse_range(inner).ok_or_else(|| {
                    CatalogError::MalformedRule {
                        name: rule.name.to_string(),
                        reason: format!("unparsable savings range '{}'", inner),
                    }
                })?;
                (range, inner.to_string())
            }
        };

        if range.min > range.max {
            return Err(CatalogError::InvalidSavingsRange {
                name: rule.name.to_string(),
                min: range.min,
                max: range.max,
            });
        }
        Ok(ResolvedSavings { range, display })
    }
}

/// Extract `"min-max"` from `"Save ~LKR min-max/month."`.
fn strip_fixed_phrase(literal: &str) -> Option<&str> {
    literal
        .strip_prefix(FIXED_PREFIX)?
        .strip_suffix(FIXED_SUFFIX)
}

fn parse_range(inner: &str) -> Option<SavingsRange> {
    let (min, max) = inner.split_once('-')?;
    Some(SavingsRange {
        min: min.trim().parse().ok()?,
        max: max.trim().parse().ok()?,
    })
}
