//! Liveness probe.

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

/// GET /health - empty 200 while the process is serving.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Router exposing the liveness probe.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}
