//! Music catalog search configuration types

use crate::{get_env_or_default, parse_env, validate_base_url, validate_timeout, ConfigResult};

/// Default catalog backend URL (public iTunes Search API)
const DEFAULT_URL: &str = "https://itunes.apple.com";

/// Catalog search backend configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog server URL
    pub url: String,

    /// Per-lookup timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            url: get_env_or_default("CATALOG_URL", DEFAULT_URL),
            timeout_secs: parse_env("CATALOG_TIMEOUT", 10)?,
        };

        validate_base_url("CATALOG_URL", &config.url)?;
        validate_timeout("CATALOG_TIMEOUT", config.timeout_secs)?;

        Ok(config)
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 10,
        }
    }

    /// Get the full URL for the search endpoint
    pub fn search_url(&self) -> String {
        format!("{}/search", self.url.trim_end_matches('/'))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::with_url(DEFAULT_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.url, "https://itunes.apple.com");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_search_url() {
        assert_eq!(
            CatalogConfig::default().search_url(),
            "https://itunes.apple.com/search"
        );
        assert_eq!(
            CatalogConfig::with_url("http://127.0.0.1:9000/").search_url(),
            "http://127.0.0.1:9000/search"
        );
    }

    #[test]
    fn test_from_env_timeout() {
        temp_env::with_vars(
            [("CATALOG_URL", None), ("CATALOG_TIMEOUT", Some("3"))],
            || {
                let config = CatalogConfig::from_env().unwrap();
                assert_eq!(config.timeout_secs, 3);
                assert_eq!(config.url, "https://itunes.apple.com");
            },
        );
    }
}
