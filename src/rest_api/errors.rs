//! # HTTP Surface Errors
//!
//! Maps the advisor error taxonomy onto HTTP status codes: input-shape
//! anomalies are client errors, configuration defects are server errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::advisor::AdvisorError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP surface errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid facts: {0}")]
    InvalidFacts(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFacts(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidFacts(_) => "INVALID_FACTS",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        match err {
            // Wrong-shape input comes from the client.
            AdvisorError::Facts(e) => ApiError::InvalidFacts(e.to_string()),
            // Catalog defects are ours, and fatal.
            AdvisorError::Catalog(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            code: self.code(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
