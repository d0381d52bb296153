//! Liveness and service identity endpoints.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Service identity response.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// Liveness probe.
///
/// Does not touch the store, so it answers as long as the process serves
/// requests.
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "ok" }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Service name and version, taken from the crate metadata.
///
/// # Response (200 OK)
///
/// ```json
/// { "name": "accounts_service", "version": "0.1.0" }
/// ```
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
