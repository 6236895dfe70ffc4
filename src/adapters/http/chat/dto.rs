//! Request DTOs for the chat endpoint.
//!
//! The response carries no DTO: success is the answer as plain text,
//! failure is the underlying error message as plain text.

use serde::Deserialize;

/// Body of `POST /api/v1/chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// The question. Optional; absent or empty means "use the default
    /// greeting".
    pub q: Option<String>,
}
