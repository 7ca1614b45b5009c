//! Song suggestion generation
//!
//! Builds the chat transcript sent to the model, then turns the completion
//! text into [`RawSuggestion`]s. The completion is untrusted: it may arrive
//! wrapped in a Markdown fence, may not be an array, and may omit fields.

use aurabeats_ollama_client::{truncate_for_log, ChatMessage, OllamaClient, OllamaError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::models::RawSuggestion;

/// Persona and output contract for the model
pub const SYSTEM_PROMPT: &str = "\
You are AuraBeats, an emotionally perceptive music assistant.
Suggest 3 to 5 songs that fit the user's mood, vibe or current situation.

Output rules:
1. Reply with a JSON array of objects and nothing else.
2. Every object has exactly these string fields: \"title\", \"artist\", \"genre\", \"mood\", \"reason\".
3. \"reason\" says in at most 15 words why the song fits the user's vibe.
4. No Markdown, no code fences, no text before or after the array.
5. If the request is unclear, suggest general vibe-check songs.";

/// Prefix for the final user turn carrying the mood
const MOOD_PREFIX: &str = "My current vibe: ";

const CODE_FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Suggestion generation errors
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model backend timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    #[error("model backend unreachable at {url}")]
    BackendUnreachable { url: String },

    #[error("model backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("failed to parse model output ({reason}): {raw}")]
    MalformedOutput { reason: String, raw: String },

    #[error("model backend request failed: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Stable code exposed to API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "GENERATION_TIMEOUT",
            Self::BackendUnreachable { .. } => "BACKEND_UNREACHABLE",
            Self::Backend { .. } => "GENERATION_BACKEND_ERROR",
            Self::MalformedOutput { .. } => "GENERATION_PARSE_ERROR",
            Self::Transport(_) => "GENERATION_TRANSPORT_ERROR",
        }
    }

    /// Whether a later attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::BackendUnreachable { .. })
    }

    fn malformed(reason: impl Into<String>, raw: &str) -> Self {
        Self::MalformedOutput {
            reason: reason.into(),
            raw: truncate_for_log(raw),
        }
    }
}

impl From<OllamaError> for GenerationError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Timeout(timeout_secs) => Self::Timeout { timeout_secs },
            OllamaError::ConnectionRefused(url) => Self::BackendUnreachable { url },
            OllamaError::ApiError { status, body } => Self::Backend { status, body },
            OllamaError::ModelNotFound { model, status } => Self::Backend {
                status,
                body: format!("model '{}' is not available on the backend", model),
            },
            OllamaError::InvalidResponse(msg) => Self::Transport(msg),
            OllamaError::HttpError(e) => Self::Transport(e.to_string()),
        }
    }
}

/// Assemble the outbound transcript: system prompt, history verbatim, then the mood
pub fn build_messages(mood: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend(history.iter().cloned());
    messages.push(ChatMessage::user(format!("{}{}", MOOD_PREFIX, mood)));
    messages
}

/// Unwrap the first fenced code block, if any
///
/// The opening fence may carry a `json` tag in any case. Text without a fence
/// is returned unchanged; an opening fence with no closing fence is an error.
pub fn strip_code_fence(text: &str) -> Result<&str, GenerationError> {
    let Some(start) = text.find(CODE_FENCE) else {
        return Ok(text);
    };

    let mut body = &text[start + CODE_FENCE.len()..];
    if body
        .get(..JSON_TAG.len())
        .is_some_and(|tag| tag.eq_ignore_ascii_case(JSON_TAG))
    {
        body = &body[JSON_TAG.len()..];
    }

    match body.find(CODE_FENCE) {
        Some(end) => Ok(body[..end].trim()),
        None => Err(GenerationError::malformed("unterminated code fence", text)),
    }
}

/// Parse a completion into suggestions
///
/// Text that is already valid JSON is taken as is, so fence markers inside
/// string values are left alone. Otherwise the first fenced block is parsed.
/// Either way the value must be a JSON array whose elements are all objects.
pub fn parse_suggestions(text: &str) -> Result<Vec<RawSuggestion>, GenerationError> {
    let trimmed = text.trim();

    let (value, cleaned) = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => (value, trimmed),
        Err(_) => {
            let cleaned = strip_code_fence(trimmed)?;
            let value = serde_json::from_str::<Value>(cleaned).map_err(|e| {
                GenerationError::malformed(format!("invalid JSON: {}", e), cleaned)
            })?;
            (value, cleaned)
        }
    };

    let Value::Array(items) = value else {
        return Err(GenerationError::malformed(
            "top-level value is not an array",
            cleaned,
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(object) => Ok(RawSuggestion::from_object(object)),
            _ => Err(GenerationError::malformed(
                format!("element {} is not an object", i),
                cleaned,
            )),
        })
        .collect()
}

/// Asks the model backend for suggestions
#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    client: OllamaClient,
}

impl SuggestionGenerator {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    /// Generate suggestions for a mood, given the prior conversation
    ///
    /// # Errors
    /// Any [`GenerationError`]; nothing is retried.
    #[instrument(skip(self, history), fields(history_len = history.len()))]
    pub async fn generate(
        &self,
        mood: &str,
        history: &[ChatMessage],
    ) -> Result<Vec<RawSuggestion>, GenerationError> {
        let messages = build_messages(mood, history);
        let completion = self.client.chat_json(messages).await?;

        debug!(completion_len = completion.len(), "Model completion received");

        let suggestions = parse_suggestions(&completion).map_err(|e| {
            warn!(
                error = %e,
                raw = %truncate_for_log(&completion),
                "Model output could not be parsed"
            );
            e
        })?;

        info!(count = suggestions.len(), "Generated suggestions");
        Ok(suggestions)
    }

    /// Reachability probe; failures are logged and reported as `false`
    pub async fn check_connection(&self) -> bool {
        match self.client.health_check().await {
            Ok(connected) => connected,
            Err(e) => {
                debug!(error = %e, "Model backend probe failed");
                false
            }
        }
    }
}
