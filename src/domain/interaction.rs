//! Interaction entities.
//!
//! A `Question` is whatever the caller submitted, with a fixed greeting
//! substituted when nothing was. An `InteractionRecord` is the persisted
//! question/answer pair; it is created once per successfully answered
//! request and never mutated here. Column names match the warehouse
//! table schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Question used when the caller omits one.
pub const DEFAULT_QUESTION: &str = "Hi!";

/// A user-submitted question.
///
/// No length or encoding validation is performed; the only rule is the
/// default substitution for absent or empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question(String);

impl Question {
    /// Builds a question from optional caller input.
    ///
    /// `None` and the empty string both yield [`DEFAULT_QUESTION`].
    pub fn from_input(input: Option<String>) -> Self {
        match input {
            Some(q) if !q.is_empty() => Self(q),
            _ => Self(DEFAULT_QUESTION.to_string()),
        }
    }

    /// Returns the question text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the question, returning the text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question/answer pair destined for the analytics warehouse.
///
/// Field names are the warehouse column names (`ts`, `env`, `ver`, `q`,
/// `a`); `ts` serializes as RFC 3339, which the warehouse accepts for
/// TIMESTAMP columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Creation instant.
    pub ts: DateTime<Utc>,
    /// Deployment revision identifier.
    pub env: String,
    /// Deployment version identifier.
    pub ver: String,
    /// The question as answered (after default substitution).
    pub q: String,
    /// The generated answer. Empty string is valid.
    pub a: String,
}

impl InteractionRecord {
    /// Creates a record stamped with the current instant.
    pub fn new(
        revision: impl Into<String>,
        version: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            ts: Utc::now(),
            env: revision.into(),
            ver: version.into(),
            q: question.into(),
            a: answer.into(),
        }
    }
}
