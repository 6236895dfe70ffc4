//! QA Relay server binary.
//!
//! Loads configuration, wires the two collaborator clients into the
//! chat handler, and serves the HTTP front door: the chat API, a
//! liveness probe, and static assets.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use qa_relay::adapters::http::{app, ChatAppState};
use qa_relay::adapters::search::DiscoveryEngineProvider;
use qa_relay::adapters::warehouse::BigQuerySink;
use qa_relay::application::ChatHandler;
use qa_relay::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider = Arc::new(DiscoveryEngineProvider::new(config.search.clone()));
    let sink = Arc::new(BigQuerySink::new(config.warehouse.clone()));
    let chat = ChatHandler::new(provider, sink, config.deployment.clone());
    let state = ChatAppState::new(chat);

    let router = app(state)
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, revision = %config.deployment.revision, "Server listening");

    axum::serve(listener, router).await?;

    Ok(())
}

/// CORS policy: configured origins when present, permissive otherwise.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
