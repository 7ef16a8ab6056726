//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.
//!
//! Storage failures are deliberately coarse: an unreadable file, a corrupt
//! collection and a failed write all become the same 500 response. The
//! underlying cause is only written to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Message returned to clients for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Record not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request payload (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ApiErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: msg,
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiErrorDetail {
                    code: "BAD_REQUEST".to_string(),
                    message: msg,
                },
            ),
            ApiError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: INTERNAL_ERROR_MESSAGE.to_string(),
                },
            ),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<shop_core::CoreError> for ApiError {
    fn from(err: shop_core::CoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<shop_storage::StorageError> for ApiError {
    fn from(err: shop_storage::StorageError) -> Self {
        tracing::error!(error = %err, "collection store failure");
        ApiError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_storage::{Collection, StorageError};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = ApiError::NotFound("product 'x' not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "product 'x' not found");
    }

    #[tokio::test]
    async fn storage_errors_are_indistinguishable() {
        let io: ApiError = StorageError::Io {
            collection: Collection::Products,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let parse: ApiError = StorageError::Parse {
            collection: Collection::Products,
            source: serde_json::from_str::<Vec<serde_json::Value>>("{").unwrap_err(),
        }
        .into();

        let io = io.into_response();
        let parse = parse.into_response();
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parse.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(io).await, body_json(parse).await);
    }

    #[test]
    fn core_errors_are_bad_requests() {
        let err: ApiError = shop_core::CoreError::NotAnObject { kind: "array" }.into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
