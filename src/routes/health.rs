//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used as the Kubernetes liveness and readiness probe target.

use axum::http::StatusCode;

/// Health check handler.
///
/// Returns "OK" for any method. There are no dependencies to check, so this
/// only proves the process can answer HTTP.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
