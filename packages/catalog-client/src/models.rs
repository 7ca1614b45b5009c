//! iTunes Search API response models

use serde::{Deserialize, Serialize};

/// A song match from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTrack {
    /// Track title as listed in the catalog
    pub track_name: Option<String>,
    /// Artist name as listed in the catalog
    pub artist_name: Option<String>,
    /// 100x100 artwork URL
    pub artwork_url: Option<String>,
    /// 30-second preview audio URL
    pub preview_url: Option<String>,
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "resultCount", default)]
    #[allow(dead_code)] // Required for serde deserialization, not used in code
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<RawTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTrack {
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(rename = "artworkUrl100", default)]
    pub artwork_url100: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl From<RawTrack> for CatalogTrack {
    fn from(raw: RawTrack) -> Self {
        Self {
            track_name: raw.track_name,
            artist_name: raw.artist_name,
            artwork_url: raw.artwork_url100.filter(|s| !s.is_empty()),
            preview_url: raw.preview_url.filter(|s| !s.is_empty()),
        }
    }
}
