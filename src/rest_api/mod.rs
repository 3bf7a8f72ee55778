//! # HTTP Surface
//!
//! Axum endpoints over the advisor pipeline:
//! - `POST /v1/advise` — evaluate a fact object, return the advice triple
//! - `GET /v1/rules` — static catalog metadata
//! - `GET /v1/health` — liveness probe

pub mod errors;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use response::{HealthResponse, RuleSummary};
pub use server::AdvisorServer;
