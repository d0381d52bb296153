//! Content-Type enforcement middleware.
//!
//! Create and update accept JSON only. This middleware rejects any request on
//! those routes whose `Content-Type` is missing or not `application/json`
//! with HTTP 415, before the body is read or the store is touched.

use crate::error::AppError;
use axum::{
    extract::Request,
    http::{HeaderMap, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Require `Content-Type: application/json`.
///
/// Parameters such as `; charset=utf-8` are allowed and the media type is
/// compared case-insensitively.
///
/// # Returns
///
/// - `Ok(Response)` from the next handler if the header matches
/// - `Err(AppError::UnsupportedMediaType)` otherwise (returns 415)
pub async fn require_json(request: Request, next: Next) -> Result<Response, AppError> {
    check_content_type(request.headers())?;

    Ok(next.run(request).await)
}

fn check_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Err(AppError::UnsupportedMediaType(None));
    };

    let raw = value
        .to_str()
        .map_err(|_| AppError::UnsupportedMediaType(None))?;

    // "application/json; charset=utf-8" -> "application/json"
    let essence = raw.split(';').next().unwrap_or_default().trim();

    if essence.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
        Ok(())
    } else {
        Err(AppError::UnsupportedMediaType(Some(raw.to_string())))
    }
}
