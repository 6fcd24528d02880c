#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::genai::GenAiError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The JSON routes answer failures with `{"success": false, "error": {...}}`.
/// The two upload routes answer with the plain-text bodies the frontend
/// already parses, so those stay text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No file uploaded")]
    MissingFile,

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("GenAI error: {0}")]
    GenAi(#[from] GenAiError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingFile => {
                (StatusCode::BAD_REQUEST, "No file uploaded.").into_response()
            }
            AppError::Upload(msg) => {
                tracing::error!("Upload error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            AppError::GenAi(e) => {
                tracing::error!("GenAI error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            // A malformed params envelope is answered with a 500; the
            // frontend only branches on the `success` flag.
            AppError::Validation(msg) => {
                tracing::error!("Validation error: {msg}");
                json_failure(StatusCode::INTERNAL_SERVER_ERROR, "VALIDATION_ERROR", msg)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                json_failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred",
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                json_failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred",
                )
            }
        }
    }
}

fn json_failure(status: StatusCode, code: &str, message: &str) -> Response {
    let body = Json(json!({
        "success": false,
        "error": {
            "code": code,
            "message": message
        }
    }));

    (status, body).into_response()
}
