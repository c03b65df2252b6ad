//! Error types for the key-value service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Api Error Enum ==
/// Unified error type for the key-value service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Key not found in the store
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// No handler matched the request
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// PUT body is missing the required `value` field
    #[error("value required")]
    ValueRequired,

    /// Request body exceeded the configured limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    /// Maps body-extraction failures onto the service error model.
    ///
    /// Oversized bodies keep their 413 status; everything else (malformed
    /// JSON, missing content type) is treated as an internal fault.
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Internal(format!("Body rejected: {rejection}"))
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client-facing messages are fixed strings; the detail (missing
        // key, rejected body) stays in the server-side log only.
        let (status, message) = match &self {
            ApiError::KeyNotFound(_) | ApiError::RouteNotFound(_) => {
                (StatusCode::NOT_FOUND, "Not found")
            }
            ApiError::ValueRequired => (StatusCode::BAD_REQUEST, "value required"),
            ApiError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large"),
            ApiError::Internal(detail) => {
                error!("Internal error while handling request: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key-value service.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_key_not_found_does_not_leak_key() {
        let (status, body) = response_parts(ApiError::KeyNotFound("secret".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn test_value_required_response() {
        let (status, body) = response_parts(ApiError::ValueRequired).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "value required");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let (status, body) =
            response_parts(ApiError::Internal("lock poisoned at store.rs".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
