//! Discovery Engine provider - AnswerProvider backed by the managed
//! search REST API.
//!
//! Sends one `servingConfigs:search` request per question with the
//! summarization spec enabled and returns the generated summary text.
//! No retry or timeout policy beyond the transport's own; failures map
//! to [`ProviderError`] variants with the upstream message preserved.
//!
//! # Configuration
//!
//! ```ignore
//! let provider = DiscoveryEngineProvider::new(config.search.clone());
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::ports::{AnswerProvider, ProviderError};

/// Instruction given to the answer generation model.
const ANSWER_PREAMBLE: &str = "Given the conversation between a user and a helpful assistant and some search results, create a final answer for the assistant. The answer should use all relevant information from the search results, not introduce any additional information, and use exactly the same words as the search results when possible. The assistant's answer should be brief, no more than 1 or 2 sentences.\n\nAnd avoid the following topics:\n- NEWS\n- SNS";

/// Results fetched per search.
const PAGE_SIZE: u32 = 10;

/// Results fed into the summary.
const SUMMARY_RESULT_COUNT: u32 = 5;

/// Discovery Engine implementation of [`AnswerProvider`].
pub struct DiscoveryEngineProvider {
    config: SearchConfig,
    base_url: String,
    client: Client,
}

impl DiscoveryEngineProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");
        let base_url = config.api_endpoint();

        Self {
            config,
            base_url,
            client,
        }
    }

    /// Overrides the endpoint base URL (for tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builds the search endpoint URL.
    fn search_url(&self) -> String {
        format!(
            "{}/v1/{}:search",
            self.base_url,
            self.config.serving_config_path()
        )
    }

    /// Builds the wire request for a question.
    fn build_request(&self, question: &str) -> SearchRequest {
        SearchRequest {
            query: question.to_string(),
            page_size: PAGE_SIZE,
            query_expansion_spec: QueryExpansionSpec { condition: "AUTO" },
            spell_correction_spec: SpellCorrectionSpec { mode: "AUTO" },
            content_search_spec: ContentSearchSpec {
                snippet_spec: SnippetSpec {
                    return_snippet: true,
                },
                summary_spec: SummarySpec {
                    ignore_adversarial_query: true,
                    include_citations: true,
                    summary_result_count: SUMMARY_RESULT_COUNT,
                    model_spec: ModelSpec {
                        version: self.config.summary_model.clone(),
                    },
                    model_prompt_spec: ModelPromptSpec {
                        preamble: ANSWER_PREAMBLE,
                    },
                },
            },
        }
    }

    /// Extracts the answer text from a parsed search response.
    fn extract_answer(response: SearchResponse) -> Result<String, ProviderError> {
        response
            .summary
            .and_then(|s| s.summary_text)
            .ok_or_else(|| ProviderError::malformed("response contains no summary text"))
    }

    /// Maps a non-success status and error body to a provider error.
    fn map_error(status: StatusCode, body: &str) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationFailed,
            StatusCode::TOO_MANY_REQUESTS => ProviderError::QuotaExceeded,
            _ => ProviderError::upstream(status.as_u16(), upstream_message(body)),
        }
    }
}

#[async_trait]
impl AnswerProvider for DiscoveryEngineProvider {
    async fn generate_answer(&self, question: &str) -> Result<String, ProviderError> {
        let mut request = self
            .client
            .post(self.search_url())
            .json(&self.build_request(question));

        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                ProviderError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_error(status, &body));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(e.to_string()))?;

        Self::extract_answer(parsed)
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
#[serde(rename_all = "camelCase")]
struct SearchRequest {
    query: String,
    page_size: u32,
    query_expansion_spec: QueryExpansionSpec,
    spell_correction_spec: SpellCorrectionSpec,
    content_search_spec: ContentSearchSpec,
}

#[derive(Debug, Serialize)]
struct QueryExpansionSpec {
    condition: &'static str,
}

#[derive(Debug, Serialize)]
struct SpellCorrectionSpec {
    mode: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentSearchSpec {
    snippet_spec: SnippetSpec,
    summary_spec: SummarySpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnippetSpec {
    return_snippet: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummarySpec {
    ignore_adversarial_query: bool,
    include_citations: bool,
    summary_result_count: u32,
    model_spec: ModelSpec,
    model_prompt_spec: ModelPromptSpec,
}

#[derive(Debug, Serialize)]
struct ModelSpec {
    version: String,
}

#[derive(Debug, Serialize)]
struct ModelPromptSpec {
    preamble: &'static str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    summary: Option<Summary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    summary_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamError,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DiscoveryEngineProvider {
        let config = SearchConfig {
            project: "demo".to_string(),
            datastore_id: "docs".to_string(),
            ..Default::default()
        };
        DiscoveryEngineProvider::new(config)
    }

    #[test]
    fn search_url_targets_serving_config() {
        let url = provider().search_url();
        assert_eq!(
            url,
            "https://discoveryengine.googleapis.com/v1/projects/demo/locations/global/collections/default_collection/dataStores/docs/servingConfigs/default_config:search"
        );
    }

    #[test]
    fn base_url_override_applies() {
        let url = provider().with_base_url("http://localhost:9090").search_url();
        assert!(url.starts_with("http://localhost:9090/v1/projects/demo"));
    }

    #[test]
    fn request_carries_question_and_search_specs() {
        let request = provider().build_request("What is the refund policy?");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["query"], "What is the refund policy?");
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["queryExpansionSpec"]["condition"], "AUTO");
        assert_eq!(json["spellCorrectionSpec"]["mode"], "AUTO");
        assert_eq!(json["contentSearchSpec"]["snippetSpec"]["returnSnippet"], true);
    }

    #[test]
    fn request_carries_summary_spec() {
        let request = provider().build_request("q");
        let json = serde_json::to_value(&request).unwrap();
        let summary = &json["contentSearchSpec"]["summarySpec"];

        assert_eq!(summary["ignoreAdversarialQuery"], true);
        assert_eq!(summary["includeCitations"], true);
        assert_eq!(summary["summaryResultCount"], 5);
        assert_eq!(
            summary["modelSpec"]["version"],
            "gemini-1.5-flash-001/answer_gen/v1"
        );
        assert!(summary["modelPromptSpec"]["preamble"]
            .as_str()
            .unwrap()
            .contains("no more than 1 or 2 sentences"));
    }

    #[test]
    fn extract_answer_returns_summary_text() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"results": [], "summary": {"summaryText": "Refunds take 5 days."}}"#,
        )
        .unwrap();
        assert_eq!(
            DiscoveryEngineProvider::extract_answer(response).unwrap(),
            "Refunds take 5 days."
        );
    }

    #[test]
    fn extract_answer_rejects_missing_summary() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        let err = DiscoveryEngineProvider::extract_answer(response).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            DiscoveryEngineProvider::map_error(StatusCode::UNAUTHORIZED, ""),
            ProviderError::AuthenticationFailed
        ));
        assert!(matches!(
            DiscoveryEngineProvider::map_error(StatusCode::FORBIDDEN, ""),
            ProviderError::AuthenticationFailed
        ));
        assert!(matches!(
            DiscoveryEngineProvider::map_error(StatusCode::TOO_MANY_REQUESTS, ""),
            ProviderError::QuotaExceeded
        ));
        assert!(matches!(
            DiscoveryEngineProvider::map_error(StatusCode::SERVICE_UNAVAILABLE, "down"),
            ProviderError::Upstream { status: 503, .. }
        ));
    }

    #[test]
    fn upstream_message_prefers_structured_error() {
        let body = r#"{"error": {"code": 400, "message": "Invalid serving config", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(upstream_message(body), "Invalid serving config");
        assert_eq!(upstream_message("plain text failure"), "plain text failure");
    }
}
