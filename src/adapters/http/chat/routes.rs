//! Axum routes for the chat endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{post_chat, ChatAppState};

/// Creates the chat route table.
///
/// - POST /chat - answer a question and record the interaction
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new().route("/chat", post(post_chat))
}

/// Combined router with the chat routes under /api/v1.
pub fn chat_router() -> Router<ChatAppState> {
    Router::new().nest("/api/v1", chat_routes())
}
