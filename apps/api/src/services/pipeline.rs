//! Suggestion pipeline: generate, enrich concurrently, merge in order

use futures_util::future::join_all;
use tracing::{info, instrument};

use crate::models::{EnrichedSuggestion, SuggestionRequest};
use crate::services::metadata::MetadataEnricher;
use crate::services::suggestions::{GenerationError, SuggestionGenerator};

/// Coordinates the generator and the enricher for one request at a time
///
/// Holds no per-request state; a single instance is shared by all handlers.
#[derive(Debug, Clone)]
pub struct SuggestionPipeline {
    generator: SuggestionGenerator,
    enricher: MetadataEnricher,
}

impl SuggestionPipeline {
    pub fn new(generator: SuggestionGenerator, enricher: MetadataEnricher) -> Self {
        Self {
            generator,
            enricher,
        }
    }

    /// Produce enriched suggestions for a request
    ///
    /// Output has the same length and order as the model's array. Only a
    /// generation failure fails the call; no lookups are issued in that case.
    #[instrument(skip(self, request), fields(mood = %request.mood))]
    pub async fn produce(
        &self,
        request: &SuggestionRequest,
    ) -> Result<Vec<EnrichedSuggestion>, GenerationError> {
        let suggestions = self
            .generator
            .generate(&request.mood, &request.history)
            .await?;

        let lookups = suggestions.iter().map(|s| {
            self.enricher.lookup(
                s.title.as_deref().unwrap_or_default(),
                s.artist.as_deref().unwrap_or_default(),
            )
        });
        let metadata = join_all(lookups).await;

        let enriched: Vec<EnrichedSuggestion> = suggestions
            .into_iter()
            .zip(metadata)
            .map(|(suggestion, meta)| EnrichedSuggestion::new(suggestion, meta))
            .collect();

        info!(
            count = enriched.len(),
            with_preview = enriched.iter().filter(|s| s.preview_url.is_some()).count(),
            "Suggestions enriched"
        );

        Ok(enriched)
    }

    /// Whether the model backend answers its reachability probe
    pub async fn backend_connected(&self) -> bool {
        self.generator.check_connection().await
    }
}
