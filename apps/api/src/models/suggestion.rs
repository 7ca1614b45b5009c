//! Suggestion types
//!
//! Wire names follow the public contract: `imageUrl` and `previewUrl` are
//! camelCase, the generated fields are plain lowercase.

use aurabeats_ollama_client::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound body of `POST /suggestions`
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionRequest {
    /// Free-form mood or situation description
    pub mood: String,
    /// Prior conversation, oldest first
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// One song proposed by the model, before enrichment
///
/// Every field is optional. The model is not trusted to fill them all in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSuggestion {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub reason: Option<String>,
}

impl RawSuggestion {
    /// Build a suggestion from a decoded JSON object
    ///
    /// Missing keys and non-string values become `None`; unknown keys are ignored.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let field = |name: &str| object.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            title: field("title"),
            artist: field("artist"),
            genre: field("genre"),
            mood: field("mood"),
            reason: field("reason"),
        }
    }
}

/// Catalog lookup outcome; either URL may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResult {
    pub image_url: Option<String>,
    pub preview_url: Option<String>,
}

/// A suggestion merged with its catalog metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedSuggestion {
    #[serde(flatten)]
    pub suggestion: RawSuggestion,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "previewUrl")]
    pub preview_url: Option<String>,
}

impl EnrichedSuggestion {
    pub fn new(suggestion: RawSuggestion, metadata: MetadataResult) -> Self {
        Self {
            suggestion,
            image_url: metadata.image_url,
            preview_url: metadata.preview_url,
        }
    }
}

/// Body of a successful `POST /suggestions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<EnrichedSuggestion>,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend_connected: bool,
}
