use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for every provider or internal failure. Provider detail is
/// logged server-side and never echoed to the caller.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate cover letter";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to generate cover letter")]
    Generation,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Generation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_FAILED_MESSAGE.to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
