//! Integration tests for health check endpoints

mod common;

use aurabeats_test_utils::{MockCatalogServer, MockOllamaServer};
use axum::http::StatusCode;

use common::*;

#[tokio::test]
async fn test_health_reports_connected_backend() {
    let ollama = MockOllamaServer::start().await;
    let catalog = MockCatalogServer::start().await;
    ollama.mock_list_models(&["qwen3:8b"]).await;

    let (status, body) = send(test_app(&ollama, &catalog), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend_connected"], true);
}

#[tokio::test]
async fn test_health_non_200_tags_is_disconnected() {
    let ollama = MockOllamaServer::start().await;
    let catalog = MockCatalogServer::start().await;
    ollama.mock_tags_unavailable(503).await;

    let (status, body) = send(test_app(&ollama, &catalog), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend_connected"], false);
}

#[tokio::test]
async fn test_health_unreachable_backend_is_disconnected() {
    let catalog = MockCatalogServer::start().await;
    let app = aurabeats_api::api_router(aurabeats_api::AppState::new(pipeline_with_ollama_url(
        "http://127.0.0.1:9",
        &catalog,
    )));

    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend_connected"], false);
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let ollama = MockOllamaServer::start().await;
    let catalog = MockCatalogServer::start().await;

    let (status, body) = send(test_app(&ollama, &catalog), get("/health/live")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let ollama = MockOllamaServer::start().await;
    let catalog = MockCatalogServer::start().await;

    let (status, _) = send(test_app(&ollama, &catalog), get("/suggestions/history")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
