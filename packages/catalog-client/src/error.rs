//! Catalog search error types

use thiserror::Error;

/// Catalog search client errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Invalid input provided to a search method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog returned a non-success status
    #[error("Catalog API returned status {status}")]
    Status { status: u16 },

    /// Rate limited by the catalog
    #[error("Rate limited by catalog API")]
    RateLimited,

    /// Request timeout
    #[error("Request to catalog timed out")]
    Timeout,
}

impl CatalogError {
    /// Check if this error is transient (a later request might succeed)
    ///
    /// Transient:
    /// - Timeouts
    /// - Rate limiting
    /// - Transport errors (connect, timeout)
    /// - Server errors (5xx)
    pub fn is_transient(&self) -> bool {
        match self {
            CatalogError::Timeout | CatalogError::RateLimited => true,
            CatalogError::Http(e) => e.is_timeout() || e.is_connect(),
            CatalogError::Status { status } => (500..600).contains(status),
            _ => false,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
