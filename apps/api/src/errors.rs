use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The completion service answered with a non-success status.
    #[error("AI service error: {0}")]
    AiService(String),

    /// The completion call failed before any content was produced.
    #[error("AI processing failed: {0}")]
    AiProcessing(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::AiService(msg) => {
                tracing::error!("Completion service error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI service error".to_string(),
                )
            }
            AppError::AiProcessing(msg) => {
                tracing::error!("Completion call failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI processing failed".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
