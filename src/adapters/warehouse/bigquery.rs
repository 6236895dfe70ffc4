//! BigQuery sink - EventSink backed by the warehouse streaming-insert
//! REST API.
//!
//! Appends one row per interaction via `tabledata.insertAll`. The API
//! reports per-row failures inside a 200 response, so a success status
//! still requires checking the body for `insertErrors`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::WarehouseConfig;
use crate::domain::InteractionRecord;
use crate::ports::{EventSink, SinkError};

/// BigQuery implementation of [`EventSink`].
pub struct BigQuerySink {
    config: WarehouseConfig,
    client: Client,
}

impl BigQuerySink {
    /// Creates a new sink with the given configuration.
    pub fn new(config: WarehouseConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the insert body for one record.
    fn build_insert(record: &InteractionRecord) -> InsertAllRequest<'_> {
        InsertAllRequest {
            rows: vec![Row { json: record }],
        }
    }

    /// Maps a non-success status and error body to a sink error.
    fn map_error(status: StatusCode, body: &str) -> SinkError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SinkError::AuthenticationFailed,
            _ => SinkError::upstream(status.as_u16(), upstream_message(body)),
        }
    }

    /// Checks a 2xx response body for per-row insert errors.
    fn check_insert_errors(response: InsertAllResponse) -> Result<(), SinkError> {
        let Some(errors) = response.insert_errors else {
            return Ok(());
        };
        let message = errors
            .first()
            .and_then(|row| row.errors.first())
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "insert rejected".to_string());
        Err(SinkError::row_rejected(message))
    }
}

#[async_trait]
impl EventSink for BigQuerySink {
    async fn record_interaction(&self, record: &InteractionRecord) -> Result<(), SinkError> {
        let mut request = self
            .client
            .post(self.config.insert_all_url())
            .json(&Self::build_insert(record));

        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SinkError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                SinkError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_error(status, &body));
        }

        let parsed: InsertAllResponse = response
            .json()
            .await
            .map_err(|e| SinkError::network(e.to_string()))?;

        Self::check_insert_errors(parsed)
    }
}

/// Pulls the human-readable message out of a structured error body,
/// falling back to the raw text.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<UpstreamErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// --- Wire types ---

#[derive(Debug, Serialize)]
struct InsertAllRequest<'a> {
    rows: Vec<Row<'a>>,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    json: &'a InteractionRecord,
}

#[derive(Debug, Deserialize)]
struct InsertAllResponse {
    #[serde(rename = "insertErrors")]
    insert_errors: Option<Vec<RowErrors>>,
}

#[derive(Debug, Deserialize)]
struct RowErrors {
    errors: Vec<RowError>,
}

#[derive(Debug, Deserialize)]
struct RowError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamError,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    message: String,
}
