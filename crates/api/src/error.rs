use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use curio_core::error::CoreError;
use curio_db::store::StoreError;
use serde_json::json;

use crate::upload::UploadError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, store, and upload error types and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `curio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A catalog store error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An upload policy violation.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            AppError::Store(StoreError::Validation(CoreError::Validation(msg))) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Store(StoreError::Backend(err)) => {
                tracing::error!(error = %err, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Storage failure".to_string(),
                )
            }

            AppError::Upload(err) => {
                let code = match err {
                    UploadError::FileTooLarge => "FILE_TOO_LARGE",
                    _ => "UPLOAD_REJECTED",
                };
                (StatusCode::BAD_REQUEST, code, err.to_string())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
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
