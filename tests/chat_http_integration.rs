//! Integration tests for the chat HTTP endpoint.
//!
//! These tests drive the assembled router with mock collaborator
//! clients and verify the request-handling contract end to end:
//! status codes, plain-text bodies, default-question substitution, and
//! the sink-write invariant (exactly one record per answered question,
//! none on provider failure).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use qa_relay::adapters::http::{app, ChatAppState};
use qa_relay::adapters::search::MockAnswerProvider;
use qa_relay::adapters::warehouse::MockEventSink;
use qa_relay::application::ChatHandler;
use qa_relay::config::DeploymentConfig;
use qa_relay::ports::{ProviderError, SinkError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app(
    provider: MockAnswerProvider,
    sink: MockEventSink,
) -> (Router, Arc<MockAnswerProvider>, Arc<MockEventSink>) {
    let provider = Arc::new(provider);
    let sink = Arc::new(sink);
    let deployment = DeploymentConfig {
        revision: "relay-00042-abc".to_string(),
        version: "1.2.3".to_string(),
    };
    let chat = ChatHandler::new(provider.clone(), sink.clone(), deployment);
    let router = app(ChatAppState::new(chat));
    (router, provider, sink)
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Success path
// =============================================================================

#[tokio::test]
async fn answered_question_returns_200_and_records_once() {
    let provider =
        MockAnswerProvider::new().with_answer("Refunds are processed within 5 business days.");
    let (router, provider, sink) = test_app(provider, MockEventSink::new());

    let response = router
        .oneshot(chat_request(r#"{"q": "What is the refund policy?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "Refunds are processed within 5 business days."
    );

    assert_eq!(provider.questions(), vec!["What is the refund policy?"]);
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].q, "What is the refund policy?");
    assert_eq!(records[0].a, "Refunds are processed within 5 business days.");
    assert_eq!(records[0].env, "relay-00042-abc");
    assert_eq!(records[0].ver, "1.2.3");
}

#[tokio::test]
async fn empty_answer_is_a_valid_200() {
    let provider = MockAnswerProvider::new().with_answer("");
    let (router, _, sink) = test_app(provider, MockEventSink::new());

    let response = router.oneshot(chat_request(r#"{"q": "hm"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "");
    assert_eq!(sink.records()[0].a, "");
}

// =============================================================================
// Default question
// =============================================================================

#[tokio::test]
async fn omitted_question_field_defaults_to_greeting() {
    let provider = MockAnswerProvider::new().with_answer("Hello!");
    let (router, provider, _) = test_app(provider, MockEventSink::new());

    let response = router.oneshot(chat_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.questions(), vec!["Hi!"]);
}

#[tokio::test]
async fn empty_question_defaults_to_greeting() {
    let provider = MockAnswerProvider::new().with_answer("Hello!");
    let (router, provider, _) = test_app(provider, MockEventSink::new());

    let response = router.oneshot(chat_request(r#"{"q": ""}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.questions(), vec!["Hi!"]);
}

#[tokio::test]
async fn missing_body_defaults_to_greeting() {
    let provider = MockAnswerProvider::new().with_answer("Hello!");
    let (router, provider, _) = test_app(provider, MockEventSink::new());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/chat")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.questions(), vec!["Hi!"]);
}

// =============================================================================
// Provider failure
// =============================================================================

#[tokio::test]
async fn provider_failure_returns_500_and_skips_sink() {
    let provider = MockAnswerProvider::new().with_error(ProviderError::QuotaExceeded);
    let (router, _, sink) = test_app(provider, MockEventSink::new());

    let response = router
        .oneshot(chat_request(r#"{"q": "anything"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "quota exceeded");
    assert_eq!(sink.record_count(), 0);
}

#[tokio::test]
async fn provider_network_failure_surfaces_its_message() {
    let provider =
        MockAnswerProvider::new().with_error(ProviderError::network("connection refused"));
    let (router, _, sink) = test_app(provider, MockEventSink::new());

    let response = router.oneshot(chat_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "network error: connection refused");
    assert_eq!(sink.record_count(), 0);
}

// =============================================================================
// Sink failure
// =============================================================================

#[tokio::test]
async fn sink_failure_returns_500_with_sink_message() {
    let provider = MockAnswerProvider::new().with_answer("an answer");
    let sink = MockEventSink::new().with_error(SinkError::upstream(403, "access denied"));
    let (router, _, sink) = test_app(provider, sink);

    let response = router.oneshot(chat_request(r#"{"q": "q"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "sink error (403): access denied");
    // The write was attempted exactly once, after the answer existed.
    assert_eq!(sink.record_count(), 1);
}

// =============================================================================
// Front door
// =============================================================================

#[tokio::test]
async fn health_probe_returns_empty_200() {
    let (router, _, _) = test_app(MockAnswerProvider::new(), MockEventSink::new());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn chat_endpoint_rejects_get() {
    let (router, _, _) = test_app(MockAnswerProvider::new(), MockEventSink::new());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/chat")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
