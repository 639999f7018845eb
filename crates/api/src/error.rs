use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use organizer_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `organizer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body was not usable JSON.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotImplemented { .. } => {
                    (StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED", core.to_string())
                }
                CoreError::UnknownEntity(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Serialization(err) => {
                    (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD", err.to_string())
                }
                CoreError::NullArgument(_) | CoreError::InvalidCast { .. } => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", core.to_string())
                }
            },

            // --- HTTP-specific errors ---
            AppError::InvalidPayload(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD", msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
