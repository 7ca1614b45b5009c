//! HTTP route handlers for the AuraBeats API
//!
//! - `GET /health`, `GET /health/live` - backend probe and process liveness
//! - `POST /suggestions` - mood-based song suggestions

pub mod health;
pub mod suggestions;

use std::sync::Arc;

use axum::Router;

use crate::services::SuggestionPipeline;

pub use health::health_router;
pub use suggestions::suggestions_router;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SuggestionPipeline>,
}

impl AppState {
    pub fn new(pipeline: SuggestionPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Build the full API router (without transport layers)
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_router(state.clone()))
        .nest("/suggestions", suggestions_router(state))
}
