//! Catalog metadata enrichment
//!
//! Lookups never fail outward: every catalog problem degrades to an empty
//! [`MetadataResult`] so one bad song cannot sink the whole response.

use aurabeats_catalog_client::{CatalogClient, CatalogError};
use tracing::{debug, instrument, warn};

use crate::models::MetadataResult;

/// Fetches artwork and preview URLs for suggested songs
#[derive(Debug, Clone)]
pub struct MetadataEnricher {
    client: CatalogClient,
}

impl MetadataEnricher {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Look up artwork and preview URLs for one song
    #[instrument(skip(self))]
    pub async fn lookup(&self, title: &str, artist: &str) -> MetadataResult {
        match self.client.search_song(title, artist).await {
            Ok(Some(track)) => MetadataResult {
                image_url: track.artwork_url,
                preview_url: track.preview_url,
            },
            Ok(None) => {
                debug!("No catalog match");
                MetadataResult::default()
            }
            Err(CatalogError::InvalidInput(reason)) => {
                debug!(reason = %reason, "Skipping catalog lookup");
                MetadataResult::default()
            }
            Err(e) => {
                warn!(error = %e, transient = e.is_transient(), "Catalog lookup failed");
                MetadataResult::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurabeats_shared_config::CatalogConfig;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn enricher(server: &MockServer) -> MetadataEnricher {
        let config = CatalogConfig {
            url: server.uri(),
            timeout_secs: 1,
        };
        MetadataEnricher::new(CatalogClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultCount": 1,
                "results": [{
                    "artworkUrl100": "https://img.example/a.jpg",
                    "previewUrl": "https://audio.example/a.m4a"
                }]
            })))
            .mount(&server)
            .await;

        let result = enricher(&server).lookup("Clair de Lune", "Debussy").await;
        assert_eq!(result.image_url.as_deref(), Some("https://img.example/a.jpg"));
        assert_eq!(result.preview_url.as_deref(), Some("https://audio.example/a.m4a"));
    }

    #[tokio::test]
    async fn test_lookup_partial_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"artworkUrl100": "https://img.example/a.jpg"}]
            })))
            .mount(&server)
            .await;

        let result = enricher(&server).lookup("Song", "Artist").await;
        assert!(result.image_url.is_some());
        assert!(result.preview_url.is_none());
    }

    #[tokio::test]
    async fn test_lookup_failures_degrade_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert_eq!(
            enricher(&server).lookup("Song", "Artist").await,
            MetadataResult::default()
        );
    }

    #[tokio::test]
    async fn test_lookup_timeout_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(3))
                    .set_body_json(json!({"results": []})),
            )
            .mount(&server)
            .await;

        assert_eq!(
            enricher(&server).lookup("Song", "Artist").await,
            MetadataResult::default()
        );
    }

    #[tokio::test]
    async fn test_blank_lookup_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        assert_eq!(enricher(&server).lookup("", "").await, MetadataResult::default());
    }
}
