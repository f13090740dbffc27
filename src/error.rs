//! Application error type and HTTP response mapping.
//!
//! Every fallible operation in the service surfaces an [`AppError`]. The
//! variants map one-to-one onto HTTP status codes; clients always receive a
//! JSON body of the form `{ "error": "<message>" }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Service-wide error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or rejected input (400).
    #[error("{0}")]
    Validation(String),

    /// Unknown short code (404).
    #[error("{0}")]
    NotFound(String),

    /// Short code already taken at insert time (409). Consumed internally
    /// by the allocation retry loop; rarely client-visible.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected store failure or exhausted collision budget (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
