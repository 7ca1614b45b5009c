//! Core Ollama HTTP client with per-hop timeouts and connection pooling

use std::time::Duration;

use aurabeats_shared_config::OllamaConfig;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::error::{OllamaError, OllamaResult};
use crate::models::{ChatMessage, ChatRequest, ChatResponse, ListModelsResponse};

/// Maximum error body size to prevent memory exhaustion
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Connection establishment timeout, independent of the per-request deadline
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Structured output format requested from the model
const JSON_FORMAT: &str = "json";

/// Bound untrusted text before it goes into an error or a log line
///
/// Cuts on a UTF-8 boundary so multi-byte characters never cause a panic.
pub fn truncate_for_log(text: &str) -> String {
    if text.len() <= MAX_ERROR_BODY_SIZE {
        return text.to_string();
    }

    let truncate_at = text
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
        .last()
        .unwrap_or(0);

    format!("{}... (truncated)", &text[..truncate_at])
}

/// Ollama API client with connection pooling
///
/// Generation and the reachability probe carry separate deadlines taken from
/// [`OllamaConfig`]. Nothing is retried: a failed call surfaces immediately.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// HTTP client with connection pool
    http_client: Client,
    /// Configuration
    config: OllamaConfig,
}

impl OllamaClient {
    /// Create a new Ollama client from configuration
    pub fn new(config: &OllamaConfig) -> OllamaResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(OllamaError::HttpError)?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Classify a transport failure for a request sent with the given deadline
    fn map_transport_error(&self, e: reqwest::Error, timeout_secs: u64) -> OllamaError {
        if e.is_timeout() {
            OllamaError::Timeout(timeout_secs)
        } else if e.is_connect() {
            OllamaError::ConnectionRefused(self.config.url.clone())
        } else {
            OllamaError::HttpError(e)
        }
    }

    /// Check if Ollama is reachable
    ///
    /// Returns `Ok(true)` only for an HTTP 200 from the model listing endpoint.
    /// Transport failures are returned as errors so callers can log the cause.
    #[instrument(skip(self), fields(url = %self.config.url))]
    pub async fn health_check(&self) -> OllamaResult<bool> {
        let timeout_secs = self.config.probe_timeout_secs;

        let response = self
            .http_client
            .get(self.config.tags_url())
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e, timeout_secs))?;

        Ok(response.status() == StatusCode::OK)
    }

    /// List available models
    pub async fn list_models(&self) -> OllamaResult<Vec<String>> {
        let timeout_secs = self.config.probe_timeout_secs;

        let response = self
            .http_client
            .get(self.config.tags_url())
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e, timeout_secs))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = truncate_for_log(&response.text().await.unwrap_or_default());
            return Err(OllamaError::ApiError { status, body });
        }

        let list: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::InvalidResponse(e.to_string()))?;
        Ok(list.models.into_iter().map(|m| m.name).collect())
    }

    /// Check if the configured model is available
    pub async fn has_model(&self) -> OllamaResult<bool> {
        let models = self.list_models().await?;
        let wanted = self.config.model.as_str();
        let wanted_base = wanted.split(':').next().unwrap_or(wanted);

        Ok(models.iter().any(|m| {
            m == wanted || (!wanted.contains(':') && m.split(':').next() == Some(wanted_base))
        }))
    }

    /// Chat with the model, asking Ollama to constrain the completion to JSON
    ///
    /// The returned text is still untrusted: models may wrap it in Markdown
    /// fences or ignore the constraint entirely.
    #[instrument(skip(self, messages), fields(model = %self.config.model, message_count = messages.len()))]
    pub async fn chat_json(&self, messages: Vec<ChatMessage>) -> OllamaResult<String> {
        debug!("Sending JSON-constrained chat request");

        let timeout_secs = self.config.timeout_secs;
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            stream: false,
            format: Some(JSON_FORMAT.to_string()),
        };

        let response = self
            .http_client
            .post(self.config.chat_url())
            .timeout(Duration::from_secs(timeout_secs))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e, timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let body = truncate_for_log(&response.text().await.unwrap_or_default());

            if body.contains("model") && body.contains("not found") {
                return Err(OllamaError::ModelNotFound {
                    model: self.config.model.clone(),
                    status: status.as_u16(),
                });
            }

            return Err(OllamaError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e, timeout_secs))?;

        let chat_response: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            OllamaError::InvalidResponse(format!("{}: {}", e, truncate_for_log(&text)))
        })?;

        let content = chat_response.message.content;
        debug!(response_len = content.len(), "Chat response received");
        Ok(content)
    }
}
