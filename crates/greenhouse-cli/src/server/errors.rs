//! Error handling utilities for the HTTP server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use greenhouse_core::TrackerError;
use log::error;
use serde_json::json;

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An error response rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Helper to convert tracker errors to API errors.
///
/// Missing entities become 404 and rejected input 400, both with a message
/// safe to show to clients. Anything else is logged and reported as a 500
/// carrying only `message`.
pub fn to_api_error(message: &str, error: TrackerError) -> ApiError {
    match error {
        TrackerError::PlantNotFound { .. } => ApiError::not_found("Plant not found"),
        TrackerError::CategoryNotFound { .. } => ApiError::not_found("Category not found"),
        TrackerError::InvalidInput { .. } => ApiError::bad_request(error.to_string()),
        other => {
            error!("{message}: {other}");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}
