//! Suggestion pipeline services
//!
//! - [`SuggestionGenerator`] - prompt assembly, model call, output parsing
//! - [`MetadataEnricher`] - catalog lookups that never fail outward
//! - [`SuggestionPipeline`] - concurrent enrichment and ordered merge

pub mod metadata;
pub mod pipeline;
pub mod suggestions;

pub use metadata::MetadataEnricher;
pub use pipeline::SuggestionPipeline;
pub use suggestions::{GenerationError, SuggestionGenerator};
