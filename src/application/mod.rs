//! Application layer - use case handlers.

mod chat;

pub use chat::{ChatError, ChatHandler};
