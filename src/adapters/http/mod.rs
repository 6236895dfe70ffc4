//! HTTP adapters - the relay's REST surface.

pub mod chat;
pub mod health;

use axum::Router;

pub use chat::{chat_router, ChatAppState};
pub use health::health_router;

/// Assembles the application router: liveness probe plus the chat API.
///
/// Middleware (tracing, timeout, CORS) and static file serving are
/// layered on by the binary so tests can exercise the bare routes.
pub fn app(state: ChatAppState) -> Router {
    Router::new()
        .merge(health_router())
        .merge(chat_router().with_state(state))
}
