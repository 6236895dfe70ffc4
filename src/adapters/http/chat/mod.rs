//! HTTP adapter for the chat endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::ChatRequest;
pub use handlers::{post_chat, ChatApiError, ChatAppState};
pub use routes::{chat_router, chat_routes};
