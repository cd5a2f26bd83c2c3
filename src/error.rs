//! Error types for the countries service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::cache::StoreError;
use crate::models::ErrorResponse;

// == API Error Enum ==
/// Unified error type for the countries service.
///
/// Every variant is retryable from the caller's point of view: none of them is
/// ever written to the cache.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested entity does not exist upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream answered with a failure status, or could not be reached at all
    /// (`status` is `None` in that case)
    #[error("Upstream error (status {}): {}", display_status(.status), .body.as_deref().unwrap_or("no response"))]
    Upstream {
        status: Option<u16>,
        body: Option<String>,
    },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache store failed and the failure policy does not allow degrading
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(#[from] StoreError),

    /// Aggregation or serialization failure unrelated to upstream
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    // == Constructors ==
    /// Builds an upstream error for a response that carried a status.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status: Some(status),
            body: Some(body.into()),
        }
    }

    /// Builds an upstream error for a request that never got a response.
    pub fn unreachable() -> Self {
        Self::Upstream {
            status: None,
            body: None,
        }
    }

    // == Classification ==
    /// Returns true if upstream answered 404.
    pub fn is_upstream_not_found(&self) -> bool {
        matches!(self, Self::Upstream { status: Some(404), .. })
    }

    /// Maps an upstream 404 into `NotFound` with the given message, leaving
    /// every other error untouched.
    pub fn not_found_on_404(self, what: impl Into<String>) -> Self {
        if self.is_upstream_not_found() {
            Self::NotFound(what.into())
        } else {
            self
        }
    }
}

fn display_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "unavailable".to_string(), |s| s.to_string())
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("serialization failed: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { status: Some(_), .. } => StatusCode::BAD_GATEWAY,
            ApiError::Upstream { status: None, .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::CacheUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let upstream_status = match &self {
            ApiError::Upstream { status, .. } => *status,
            _ => None,
        };
        let body = ErrorResponse::new(self.to_string()).with_upstream_status(upstream_status);

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the countries service.
pub type Result<T> = std::result::Result<T, ApiError>;
