//! Ollama model backend configuration types

use crate::{get_env_or_default, parse_env, validate_base_url, validate_timeout, ConfigResult};

/// Default model backend URL (local Ollama daemon)
const DEFAULT_URL: &str = "http://localhost:11434";

/// Default model identifier
const DEFAULT_MODEL: &str = "qwen3:8b";

/// Ollama model backend configuration
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Ollama server URL
    pub url: String,

    /// Model used for every suggestion request
    pub model: String,

    /// Generation request timeout in seconds
    pub timeout_secs: u64,

    /// Reachability probe timeout in seconds
    pub probe_timeout_secs: u64,
}

impl OllamaConfig {
    /// Load Ollama configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            url: get_env_or_default("OLLAMA_URL", DEFAULT_URL),
            model: get_env_or_default("OLLAMA_MODEL", DEFAULT_MODEL),
            timeout_secs: parse_env("OLLAMA_TIMEOUT", 60)?,
            probe_timeout_secs: parse_env("OLLAMA_PROBE_TIMEOUT", 5)?,
        };

        validate_base_url("OLLAMA_URL", &config.url)?;
        validate_timeout("OLLAMA_TIMEOUT", config.timeout_secs)?;
        validate_timeout("OLLAMA_PROBE_TIMEOUT", config.probe_timeout_secs)?;

        Ok(config)
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Get the full URL for the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.url.trim_end_matches('/'))
    }

    /// Get the full URL for the model listing endpoint
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.url.trim_end_matches('/'))
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
            probe_timeout_secs: 5,
        }
    }
}
