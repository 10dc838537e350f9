//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers that cannot degrade to a default
//! payload return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::vendure::VendureError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Vendure shop-API operation failed.
    #[error("Vendure error: {0}")]
    Vendure(#[from] VendureError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture upstream and server errors to Sentry; client-caused
        // failures (validation, not-found) are not error events.
        let is_server_error = match &self {
            Self::Vendure(err) => matches!(
                err,
                VendureError::Http(_) | VendureError::GraphQL(_) | VendureError::Parse(_)
            ),
            Self::Internal(_) => true,
            Self::NotFound(_) | Self::BadRequest(_) => false,
        };
        if is_server_error {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Vendure(err) => match err {
                VendureError::NotFound(_) => StatusCode::NOT_FOUND,
                VendureError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                VendureError::Http(_) | VendureError::GraphQL(_) | VendureError::Parse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let body = match &self {
            Self::Vendure(VendureError::Validation(fields)) => json!({
                "error": "validation",
                "fields": fields,
            }),
            Self::Vendure(VendureError::NotFound(msg)) | Self::NotFound(msg) => json!({
                "error": "not_found",
                "message": msg,
            }),
            Self::Vendure(_) => json!({
                "error": "upstream",
                "message": "External service error",
            }),
            Self::BadRequest(msg) => json!({
                "error": "bad_request",
                "message": msg,
            }),
            Self::Internal(_) => json!({
                "error": "internal",
                "message": "Internal server error",
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendure::FieldError;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("collection: cartridges".to_string());
        assert_eq!(err.to_string(), "Not found: collection: cartridges");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_vendure_error_status_mapping() {
        assert_eq!(
            get_status(AppError::Vendure(VendureError::NotFound(
                "seller".to_string()
            ))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Vendure(VendureError::Validation(vec![
                FieldError {
                    field: "cnpj".to_string(),
                    message: "must not be empty".to_string(),
                }
            ]))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Vendure(VendureError::GraphQL(vec![]))),
            StatusCode::BAD_GATEWAY
        );
    }
}
