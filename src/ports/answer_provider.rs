//! AnswerProvider port - interface to the managed search/summarization
//! service.
//!
//! Implementations turn a question into a generated answer derived from
//! a document corpus. The relay treats the call as opaque, single-shot,
//! and non-idempotent: no retry or timeout policy is layered on top of
//! whatever the underlying transport enforces.

use async_trait::async_trait;
use thiserror::Error;

/// Port for answer generation.
///
/// Implementations connect to an external search/summarization service
/// and translate its failures into [`ProviderError`].
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Generate an answer for the given question.
    ///
    /// Empty string is a valid (if degenerate) answer. Any upstream
    /// failure - auth, quota, malformed response, network - surfaces as
    /// a [`ProviderError`] with a human-readable message.
    async fn generate_answer(&self, question: &str) -> Result<String, ProviderError>;
}

/// Errors from the answer provider.
///
/// The public contract collapses all of these to an HTTP 500 with the
/// message as body; the variants exist for logging and tests.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Credentials rejected by the provider.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider quota exhausted.
    #[error("quota exceeded")]
    QuotaExceeded,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Provider returned a non-success status.
    #[error("provider error ({status}): {message}")]
    Upstream {
        /// HTTP status from the provider.
        status: u16,
        /// Error details.
        message: String,
    },

    /// Provider response did not contain an answer.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an upstream error.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
