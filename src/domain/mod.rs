//! Domain types for the relay.

mod interaction;

pub use interaction::{InteractionRecord, Question, DEFAULT_QUESTION};
