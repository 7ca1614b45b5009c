//! Ollama API client for AuraBeats song suggestions
//!
//! This crate wraps the two Ollama endpoints the suggestion service needs:
//! non-streaming chat completion constrained to JSON output and
//! the model listing endpoint used as a reachability probe.
//!
//! # Requirements
//!
//! - Ollama must be running and accessible at the configured URL
//! - The configured model must be pulled before use:
//!   ```bash
//!   ollama pull qwen3:8b
//!   ```
//!
//! # Thread Safety
//!
//! `OllamaClient` is `Clone + Send + Sync` and can be safely shared
//! across threads. It uses a shared HTTP client connection pool.
//!
//! # Example
//!
//! ```no_run
//! use aurabeats_ollama_client::{ChatMessage, OllamaClient};
//! use aurabeats_shared_config::OllamaConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OllamaConfig::default();
//! let client = OllamaClient::new(&config)?;
//!
//! if client.health_check().await? {
//!     let messages = vec![
//!         ChatMessage::system("Reply with a JSON array."),
//!         ChatMessage::user("Three upbeat songs"),
//!     ];
//!     let completion = client.chat_json(messages).await?;
//!     println!("{}", completion);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::{truncate_for_log, OllamaClient};
pub use error::{OllamaError, OllamaResult};
pub use models::{
    ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage, ChatRole, ListModelsResponse,
    ModelInfo,
};
