//! iTunes Search API client implementation

use std::time::Duration;

use aurabeats_shared_config::CatalogConfig;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CatalogTrack, SearchResponse};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Catalog search client
///
/// Issues single-result song searches. Failures are returned to the caller
/// untouched; deciding whether they matter is the caller's job.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new catalog client from configuration
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent("AuraBeats/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Build the search term from title and artist
    fn build_term(title: &str, artist: &str) -> CatalogResult<String> {
        let term = format!("{} {}", title.trim(), artist.trim());
        let term = term.trim();
        if term.is_empty() {
            return Err(CatalogError::InvalidInput(
                "search term cannot be empty".to_string(),
            ));
        }
        Ok(term.to_string())
    }

    /// Make a search request and handle common error cases
    async fn make_request(&self, params: &[(&str, &str)]) -> CatalogResult<String> {
        let response = self
            .http_client
            .get(self.config.search_url())
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else {
                    CatalogError::Http(e)
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Catalog API rate limited");
            return Err(CatalogError::RateLimited);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::Http(e)
            }
        })
    }

    /// Look up the best catalog match for a song
    ///
    /// Returns `Ok(None)` when the catalog has no match.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` - If title and artist are both blank
    /// - `CatalogError::Status` / `CatalogError::RateLimited` - Non-success response
    /// - `CatalogError::Timeout` / `CatalogError::Http` - Transport failure
    /// - `CatalogError::Parse` - Undecodable response body
    #[instrument(skip(self))]
    pub async fn search_song(&self, title: &str, artist: &str) -> CatalogResult<Option<CatalogTrack>> {
        let term = Self::build_term(title, artist)?;

        debug!(term = %term, "Searching catalog");

        let text = self
            .make_request(&[
                ("term", term.as_str()),
                ("media", "music"),
                ("entity", "song"),
                ("limit", "1"),
            ])
            .await?;

        let response: SearchResponse = serde_json::from_str(&text)?;
        let track = response.results.into_iter().next().map(CatalogTrack::from);

        debug!(term = %term, found = track.is_some(), "Catalog search finished");

        Ok(track)
    }
}
