//! Error types for the laudo server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use laudo_engine::LaudoError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Generation timeout after {0}ms")]
    Timeout(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::Timeout(ms) => (
                StatusCode::REQUEST_TIMEOUT,
                "TIMEOUT",
                format!("Generation timeout after {}ms", ms),
            ),
            ServerError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<LaudoError> for ServerError {
    fn from(err: LaudoError) -> Self {
        match err {
            LaudoError::InvalidRequest(msg) => ServerError::InvalidRequest(msg),
            LaudoError::Timeout(ms) => ServerError::Timeout(ms),
            other => ServerError::Internal(other.to_string()),
        }
    }
}
