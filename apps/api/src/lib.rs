//! AuraBeats API library
//!
//! This module exposes the server components for use in integration tests
//! and by the binary.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{api_router, AppState};
pub use services::{GenerationError, MetadataEnricher, SuggestionGenerator, SuggestionPipeline};
