//! # HTTP Server
//!
//! Axum server over a shared [`Advisor`]. The pipeline is blocking (the
//! rephrasing call may wait on the network), so evaluations run on the
//! blocking pool; one request's external-call failure never affects
//! another's.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::advisor::{Advice, Advisor};
use crate::observability::{Logger, Severity};

use super::errors::{ApiError, ApiResult};
use super::response::{HealthResponse, RuleSummary};

/// HTTP server state
pub struct AdvisorServer {
    advisor: Arc<Advisor>,
}

impl AdvisorServer {
    pub fn new(advisor: Advisor) -> Self {
        Self {
            advisor: Arc::new(advisor),
        }
    }

    /// Build the router
    pub fn router(self) -> Router {
        let state = self.advisor;
        Router::new()
            .route("/v1/advise", post(advise_handler))
            .route("/v1/rules", get(rules_handler))
            .route("/v1/health", get(health_handler))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind and serve until shutdown.
    pub async fn serve(self, addr: &str) -> std::io::Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        Logger::log(Severity::Info, "server_started", &[("addr", addr)]);
        axum::serve(listener, router).await
    }
}

/// Evaluate a fact object
async fn advise_handler(
    State(advisor): State<Arc<Advisor>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Advice>> {
    let advice = tokio::task::spawn_blocking(move || advisor.advise_json(&body))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))??;
    Ok(Json(advice))
}

/// Catalog metadata
async fn rules_handler(State(advisor): State<Arc<Advisor>>) -> Json<Vec<RuleSummary>> {
    let summaries = advisor.catalog().iter().map(RuleSummary::from).collect();
    Json(summaries)
}

/// Liveness probe
async fn health_handler(State(advisor): State<Arc<Advisor>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        rules: advisor.catalog().len(),
    })
}
