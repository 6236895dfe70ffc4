//! Mock event sink for testing.
//!
//! Captures records for assertions and can inject a failure for
//! resilience testing.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::InteractionRecord;
use crate::ports::{EventSink, SinkError};

/// Mock event sink for testing.
///
/// # Panics
///
/// Methods panic if internal locks are poisoned. Acceptable for test
/// code; this adapter is not meant for production use.
pub struct MockEventSink {
    records: Mutex<Vec<InteractionRecord>>,
    error: Option<SinkError>,
}

impl Default for MockEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEventSink {
    /// Creates a sink that accepts every record.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            error: None,
        }
    }

    /// Makes every insert fail with the given error. The record is
    /// still captured, so tests can distinguish "never called" from
    /// "called and failed".
    pub fn with_error(mut self, error: SinkError) -> Self {
        self.error = Some(error);
        self
    }

    /// Returns every record received so far.
    pub fn records(&self) -> Vec<InteractionRecord> {
        self.records
            .lock()
            .expect("MockEventSink: records lock poisoned")
            .clone()
    }

    /// Returns the number of insert attempts.
    pub fn record_count(&self) -> usize {
        self.records().len()
    }
}

#[async_trait]
impl EventSink for MockEventSink {
    async fn record_interaction(&self, record: &InteractionRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .expect("MockEventSink: records lock poisoned")
            .push(record.clone());

        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_records() {
        let sink = MockEventSink::new();
        let record = InteractionRecord::new("local", "-", "q?", "a.");

        sink.record_interaction(&record).await.unwrap();

        assert_eq!(sink.record_count(), 1);
        assert_eq!(sink.records()[0].q, "q?");
    }

    #[tokio::test]
    async fn injected_error_fails_every_insert() {
        let sink = MockEventSink::new().with_error(SinkError::network("boom"));
        let record = InteractionRecord::new("local", "-", "q?", "a.");

        let err = sink.record_interaction(&record).await.unwrap_err();

        assert_eq!(err.to_string(), "network error: boom");
        // Attempt is still captured.
        assert_eq!(sink.record_count(), 1);
    }
}
