//! Suggestion HTTP route handler

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::instrument;

use super::AppState;
use crate::error::ApiResult;
use crate::models::{SuggestionRequest, SuggestionsResponse};

/// Create suggestions router
pub fn suggestions_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_suggestions))
        .with_state(state)
}

/// Generate and enrich song suggestions for a mood
///
/// # Response
/// - 200 with `{suggestions: [...]}`
/// - 422 `INVALID_BODY` if the body cannot be decoded
/// - 500 with the generation error code otherwise
#[instrument(skip_all)]
async fn create_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> ApiResult<Json<SuggestionsResponse>> {
    let Json(request) = payload?;

    let suggestions = state.pipeline.produce(&request).await?;

    Ok(Json(SuggestionsResponse { suggestions }))
}
