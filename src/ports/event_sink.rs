//! EventSink port - interface to the analytics warehouse.
//!
//! This port defines how interaction records are appended without
//! coupling the chat handler to a specific warehouse. Single-shot: no
//! batching, no retry, no local buffering. A failure is reported, not
//! corrected.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::InteractionRecord;

/// Port for durably appending interaction records.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Append one record.
    ///
    /// Called at most once per request, and only after an answer was
    /// successfully produced.
    async fn record_interaction(&self, record: &InteractionRecord) -> Result<(), SinkError>;
}

/// Errors from the event sink.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    /// Credentials rejected by the warehouse.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Warehouse returned a non-success status.
    #[error("sink error ({status}): {message}")]
    Upstream {
        /// HTTP status from the warehouse.
        status: u16,
        /// Error details.
        message: String,
    },

    /// The insert succeeded at the transport level but the row was
    /// rejected (schema mismatch, invalid value).
    #[error("row rejected: {0}")]
    RowRejected(String),
}

impl SinkError {
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

    /// Creates a row rejection error.
    pub fn row_rejected(message: impl Into<String>) -> Self {
        Self::RowRejected(message.into())
    }
}
