//! Mock Ollama server for testing suggestion generation
//!
//! Provides a [`MockOllamaServer`] that simulates the Ollama chat and model
//! listing endpoints without a real Ollama instance.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock Ollama server
///
/// Wraps a [`wiremock::MockServer`] with helpers for the responses the
/// suggestion generator cares about.
///
/// # Example
///
/// ```rust,ignore
/// use aurabeats_test_utils::MockOllamaServer;
///
/// #[tokio::test]
/// async fn test_chat() {
///     let server = MockOllamaServer::start().await;
///     server.mock_chat_success("[]").await;
///
///     // Configure your Ollama client with server.url()
/// }
/// ```
pub struct MockOllamaServer {
    server: MockServer,
}

impl MockOllamaServer {
    /// Start a new mock Ollama server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    fn chat_body(content: &str) -> serde_json::Value {
        json!({
            "model": "qwen3:8b",
            "created_at": "2024-01-01T00:00:00Z",
            "message": {
                "role": "assistant",
                "content": content
            },
            "done": true
        })
    }

    /// Mount a mock chat completion whose assistant content is `content`
    pub async fn mock_chat_success(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::chat_body(content)))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock chat completion whose content is the serialized JSON value
    pub async fn mock_chat_with_json(&self, value: serde_json::Value) {
        self.mock_chat_success(&value.to_string()).await;
    }

    /// Mount a mock chat completion failure
    pub async fn mock_chat_failure(&self, status_code: u16, error_message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": error_message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a chat completion that answers only after `delay`
    pub async fn mock_chat_delay(&self, delay: Duration, content: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(delay)
                    .set_body_json(Self::chat_body(content)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the /api/tags endpoint (list models)
    pub async fn mock_list_models(&self, models: &[&str]) {
        let model_list: Vec<serde_json::Value> = models
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "modified_at": "2024-01-01T00:00:00Z",
                    "size": 5_200_000_000_i64
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": model_list
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a failing /api/tags endpoint
    pub async fn mock_tags_unavailable(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Number of chat requests received so far
    pub async fn chat_calls(&self) -> usize {
        self.count_requests("/api/chat").await
    }

    /// Bodies of every chat request received so far, in arrival order
    pub async fn chat_requests(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == "/api/chat")
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }

    async fn count_requests(&self, endpoint: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == endpoint)
            .count()
    }
}
