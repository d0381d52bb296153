//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{models::account::PayloadError, store::StoreError};

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Store operation failed (e.g., connection error, query error).
    ///
    /// Returns HTTP 500; details are logged, never sent to the client.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// No route matches the request path.
    #[error("Not found")]
    RouteNotFound,

    /// Request body is missing, not JSON, or has the wrong shape.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request")]
    InvalidRequest(#[from] PayloadError),

    /// `Content-Type` is missing or not `application/json`.
    ///
    /// Returns HTTP 415. The String holds the header value received, if any.
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType(Option<String>),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": "Account not found"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `AccountNotFound`, `RouteNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `UnsupportedMediaType` → 415 Unsupported Media Type
/// - `Store` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::AccountNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                StatusCode::BAD_REQUEST
            }
            AppError::UnsupportedMediaType(found) => {
                tracing::debug!("Rejected Content-Type: {:?}", found);
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::Store(e) => {
                tracing::error!("Store failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match self {
            AppError::Store(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
