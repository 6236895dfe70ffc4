//! Chat use case.
//!
//! The one piece of in-scope logic: take a question, obtain an answer
//! from the provider, append the pair to the event sink, and hand the
//! answer back. Two dependent remote calls, strictly sequenced.
//!
//! # Response policy
//!
//! The sink write is awaited before the response is composed, so every
//! request has exactly one deterministic outcome:
//!
//! - provider fails -> `ChatError::Provider`, no sink call
//! - provider ok, sink ok -> the answer
//! - provider ok, sink fails -> `ChatError::Sink`
//!
//! No retries anywhere; a failure of either call is terminal for the
//! request and logged once.

use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::config::DeploymentConfig;
use crate::domain::{InteractionRecord, Question};
use crate::ports::{AnswerProvider, EventSink, ProviderError, SinkError};

/// Errors that can occur while handling a chat request.
///
/// Both variants are terminal and surface to the caller as HTTP 500
/// with the underlying message as body.
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    /// The answer provider call failed; no sink write was attempted.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The answer was produced but the sink write failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Handles chat requests against injected collaborator clients.
///
/// Requests are independent and share no mutable state; the handler
/// itself is cheap to clone behind the `Arc`s.
#[derive(Clone)]
pub struct ChatHandler {
    provider: Arc<dyn AnswerProvider>,
    sink: Arc<dyn EventSink>,
    deployment: DeploymentConfig,
}

impl ChatHandler {
    /// Creates a new chat handler.
    pub fn new(
        provider: Arc<dyn AnswerProvider>,
        sink: Arc<dyn EventSink>,
        deployment: DeploymentConfig,
    ) -> Self {
        Self {
            provider,
            sink,
            deployment,
        }
    }

    /// Answers a question and records the interaction.
    ///
    /// `question` is the raw caller input; `None` or empty becomes the
    /// default greeting. Exactly one record is written per successful
    /// answer; a provider failure suppresses the sink write entirely.
    pub async fn handle(&self, question: Option<String>) -> Result<String, ChatError> {
        let question = Question::from_input(question);

        let answer = match self.provider.generate_answer(question.as_str()).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, "answer provider call failed");
                return Err(e.into());
            }
        };

        let record = InteractionRecord::new(
            &self.deployment.revision,
            &self.deployment.version,
            question.into_string(),
            answer.clone(),
        );

        if let Err(e) = self.sink.record_interaction(&record).await {
            error!(error = %e, "event sink call failed");
            return Err(e.into());
        }

        Ok(answer)
    }
}
