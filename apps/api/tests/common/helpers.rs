//! Test helper functions for API integration tests

#![allow(dead_code)]

use aurabeats_api::{api_router, AppState, MetadataEnricher, SuggestionGenerator, SuggestionPipeline};
use aurabeats_catalog_client::CatalogClient;
use aurabeats_ollama_client::OllamaClient;
use aurabeats_shared_config::{CatalogConfig, OllamaConfig};
use aurabeats_test_utils::{MockCatalogServer, MockOllamaServer};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

/// Generation deadline used by test pipelines
pub const TEST_GENERATION_TIMEOUT_SECS: u64 = 1;

/// Build an enricher pointing at the mock catalog
pub fn test_enricher(catalog: &MockCatalogServer) -> MetadataEnricher {
    let config = CatalogConfig {
        url: catalog.url(),
        timeout_secs: 1,
    };
    MetadataEnricher::new(CatalogClient::new(&config).unwrap())
}

/// Build a pipeline whose model backend lives at `ollama_url`
pub fn pipeline_with_ollama_url(ollama_url: &str, catalog: &MockCatalogServer) -> SuggestionPipeline {
    let config = OllamaConfig {
        url: ollama_url.to_string(),
        model: "qwen3:8b".to_string(),
        timeout_secs: TEST_GENERATION_TIMEOUT_SECS,
        probe_timeout_secs: 1,
    };

    SuggestionPipeline::new(
        SuggestionGenerator::new(OllamaClient::new(&config).unwrap()),
        test_enricher(catalog),
    )
}

/// Build a pipeline pointing at the two mock servers
pub fn test_pipeline(ollama: &MockOllamaServer, catalog: &MockCatalogServer) -> SuggestionPipeline {
    pipeline_with_ollama_url(&ollama.url(), catalog)
}

/// Build the full router pointing at the two mock servers
pub fn test_app(ollama: &MockOllamaServer, catalog: &MockCatalogServer) -> Router {
    api_router(AppState::new(test_pipeline(ollama, catalog)))
}

/// Send a request and decode the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

/// `POST /suggestions` with a raw body
pub fn post_suggestions(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/suggestions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// `GET` request for a path
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
