//! Mock iTunes Search server for testing metadata enrichment

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock catalog search server
pub struct MockCatalogServer {
    server: MockServer,
}

impl MockCatalogServer {
    /// Start a new mock catalog server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    fn single_result(artwork_url: &str, preview_url: &str) -> serde_json::Value {
        json!({
            "resultCount": 1,
            "results": [{
                "wrapperType": "track",
                "kind": "song",
                "trackName": "Mock Track",
                "artistName": "Mock Artist",
                "artworkUrl100": artwork_url,
                "previewUrl": preview_url
            }]
        })
    }

    /// Answer every search with one match
    pub async fn mock_song_found(&self, artwork_url: &str, preview_url: &str) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::single_result(artwork_url, preview_url)),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer searches for exactly `term` with one match
    ///
    /// Mount these before any catch-all mock; wiremock picks the first match.
    pub async fn mock_song_for_term(&self, term: &str, artwork_url: &str, preview_url: &str) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("term", term))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::single_result(artwork_url, preview_url)),
            )
            .mount(&self.server)
            .await;
    }

    /// Fail searches for exactly `term` with the given status
    pub async fn mock_failure_for_term(&self, term: &str, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("term", term))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Answer every search with an empty result set
    pub async fn mock_no_results(&self) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultCount": 0,
                "results": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer every search with one match after `delay`
    pub async fn mock_delay(&self, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(delay)
                    .set_body_json(Self::single_result(
                        "https://img.example/slow.jpg",
                        "https://audio.example/slow.m4a",
                    )),
            )
            .mount(&self.server)
            .await;
    }

    /// Search terms received so far, in arrival order
    pub async fn search_terms(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == "/search")
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "term")
                    .map(|(_, v)| v.into_owned())
            })
            .collect()
    }

    /// Number of search requests received so far
    pub async fn search_calls(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == "/search")
            .count()
    }
}
