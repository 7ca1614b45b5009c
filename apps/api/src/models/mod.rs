//! Request, response and pipeline types for the suggestion API

pub mod suggestion;

pub use suggestion::{
    EnrichedSuggestion, HealthResponse, MetadataResult, RawSuggestion, SuggestionRequest,
    SuggestionsResponse,
};
