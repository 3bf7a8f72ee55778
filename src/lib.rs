//! wattsage - a rule-based home energy advisor for Sri Lankan households
//!
//! Pipeline: facts -> inference -> display ordering -> savings resolution
//! -> explanation rendering. Every stage is pure and deterministic except
//! the rendering step's external rephrasing call, which carries a
//! deterministic fallback.

pub mod advisor;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod facts;
pub mod observability;
pub mod render;
pub mod rest_api;

pub use advisor::{Advice, Advisor, AdvisorError, AdvisorResult};
pub use catalog::{Rule, RuleCatalog, Savings, SavingsRange};
pub use config::AdvisorConfig;
pub use facts::{DefaultPolicy, FactSet};
