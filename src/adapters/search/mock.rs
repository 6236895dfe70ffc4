//! Mock answer provider for testing.
//!
//! Configurable to return queued answers or errors without calling the
//! real search API, and captures every question for verification.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAnswerProvider::new().with_answer("Hello!");
//!
//! let answer = provider.generate_answer("Hi").await?;
//! assert_eq!(answer, "Hello!");
//! assert_eq!(provider.questions(), vec!["Hi"]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::{AnswerProvider, ProviderError};

/// Mock answer provider for testing.
///
/// Responses are consumed in order; when the queue runs dry the last
/// configured response repeats. An empty queue fails every call.
///
/// # Panics
///
/// Methods panic if internal locks are poisoned. Acceptable for test
/// code; this adapter is not meant for production use.
pub struct MockAnswerProvider {
    /// Pre-configured responses (consumed in order, last one repeats).
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    /// Questions received, for assertions.
    questions: Mutex<Vec<String>>,
}

impl Default for MockAnswerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnswerProvider {
    /// Creates a mock with no configured responses (every call fails).
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Queues a successful answer.
    pub fn with_answer(self, answer: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("MockAnswerProvider: responses lock poisoned")
            .push_back(Ok(answer.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.responses
            .lock()
            .expect("MockAnswerProvider: responses lock poisoned")
            .push_back(Err(error));
        self
    }

    /// Returns every question received so far.
    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .expect("MockAnswerProvider: questions lock poisoned")
            .clone()
    }
}

#[async_trait]
impl AnswerProvider for MockAnswerProvider {
    async fn generate_answer(&self, question: &str) -> Result<String, ProviderError> {
        self.questions
            .lock()
            .expect("MockAnswerProvider: questions lock poisoned")
            .push(question.to_string());

        let mut responses = self
            .responses
            .lock()
            .expect("MockAnswerProvider: responses lock poisoned");

        if responses.len() > 1 {
            responses
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::network("mock: no response configured")))
        } else {
            responses
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ProviderError::network("mock: no response configured")))
        }
    }
}
