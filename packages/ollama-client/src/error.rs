//! Error types for Ollama client

use thiserror::Error;

/// Errors that can occur when interacting with Ollama
#[derive(Error, Debug)]
pub enum OllamaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Ollama API returned a non-success status
    #[error("Ollama API error: status {status}: {body}")]
    ApiError { status: u16, body: String },

    /// Model not found or not pulled
    #[error("Model not found: {model}. Try running 'ollama pull {model}'")]
    ModelNotFound { model: String, status: u16 },

    /// Request timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Response body did not match the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Connection refused (Ollama not running)
    #[error("Connection refused. Is Ollama running at {0}?")]
    ConnectionRefused(String),
}

/// Result type for Ollama operations
pub type OllamaResult<T> = Result<T, OllamaError>;
