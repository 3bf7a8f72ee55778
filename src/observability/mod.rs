//! # Observability
//!
//! Structured logging for the advisor pipeline: one JSON line per event,
//! deterministic key order, synchronous writes, and no effect on pipeline
//! semantics.

pub mod logger;

pub use logger::{Logger, Severity};
