//! # Household Facts
//!
//! Typed observations about a household's energy usage, supplied once per
//! evaluation. Shape checking happens here, at the input boundary, so that
//! every downstream predicate and savings function is total over a
//! constructed `FactSet`.

pub mod errors;
pub mod set;
pub mod view;

pub use errors::{FactError, FactResult};
pub use set::{FactSet, FactValue};
pub use view::{DefaultPolicy, FactView};
