//! HTTP handlers for the chat endpoint.
//!
//! Connects the Axum route to the application-layer chat handler and
//! maps its failures to status codes. Both failure families collapse to
//! 500 with the underlying message as plain-text body; the caller sees
//! no distinction between transient and permanent failures.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{ChatError, ChatHandler};

use super::dto::ChatRequest;

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub chat: ChatHandler,
}

impl ChatAppState {
    /// Creates a new ChatAppState.
    pub fn new(chat: ChatHandler) -> Self {
        Self { chat }
    }
}

/// POST /api/v1/chat - Answer a question and record the interaction.
///
/// A missing body, a body without `q`, or an empty `q` all behave as
/// the default greeting.
///
/// # Responses
/// - 200: plain-text body = the generated answer
/// - 500: plain-text body = the failing call's error message
pub async fn post_chat(
    State(state): State<ChatAppState>,
    body: Option<Json<ChatRequest>>,
) -> Result<String, ChatApiError> {
    let question = body.and_then(|Json(request)| request.q);
    let answer = state.chat.handle(question).await?;
    Ok(answer)
}

/// HTTP-facing chat error.
///
/// Wraps [`ChatError`] so the application layer stays free of response
/// types.
#[derive(Debug)]
pub struct ChatApiError(ChatError);

impl From<ChatError> for ChatApiError {
    fn from(err: ChatError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
