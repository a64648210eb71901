use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use flightquote_core::error::CoreError;
use flightquote_export::error::ExportError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Composition or PDF serialization failed.
    Render(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("bad request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Render(msg) => {
                tracing::error!("error generating PDF: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "error generating PDF".to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Serialization(e) => ApiError::BadRequest(format!("invalid quotation: {e}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::UnknownTheme(name) => ApiError::BadRequest(format!("unknown theme: {name}")),
            other => ApiError::Render(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Render(e.to_string())
    }
}
