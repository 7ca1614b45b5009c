//! iTunes Search API client for AuraBeats
//!
//! This crate looks up a single song in the public iTunes catalog and
//! returns its artwork and preview-audio URLs.
//!
//! # Example
//!
//! ```rust,no_run
//! use aurabeats_catalog_client::CatalogClient;
//! use aurabeats_shared_config::CatalogConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new(&CatalogConfig::default())?;
//!
//! if let Some(track) = client.search_song("Clair de Lune", "Debussy").await? {
//!     println!("artwork: {:?}", track.artwork_url);
//!     println!("preview: {:?}", track.preview_url);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::CatalogClient;
pub use error::{CatalogError, CatalogResult};
pub use models::CatalogTrack;
