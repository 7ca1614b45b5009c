//! Shared test utilities for AuraBeats workspace
//!
//! This crate provides mock implementations of the two upstream services so
//! the pipeline can be tested without network dependencies.
//!
//! # Mock Services
//!
//! - [`MockOllamaServer`] - Mock Ollama chat server for suggestion generation tests
//! - [`MockCatalogServer`] - Mock iTunes Search server for enrichment tests
//!
//! # Example
//!
//! ```rust,ignore
//! use aurabeats_test_utils::{MockCatalogServer, MockOllamaServer};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let ollama = MockOllamaServer::start().await;
//!     ollama.mock_chat_success(r#"[{"title":"Song","artist":"Artist"}]"#).await;
//!
//!     let catalog = MockCatalogServer::start().await;
//!     catalog.mock_no_results().await;
//!
//!     // Use ollama.url() and catalog.url() to configure your clients
//! }
//! ```

mod catalog;
mod ollama;

pub use catalog::MockCatalogServer;
pub use ollama::MockOllamaServer;
