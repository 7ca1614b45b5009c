//! API server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use aurabeats_shared_config::{
    get_env_or_default, parse_env, CatalogConfig, CommonConfig, Environment, OllamaConfig,
};

/// Default bind port
const DEFAULT_PORT: u16 = 8000;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the client crates
    pub common: CommonConfig,

    /// Bind address (default: 0.0.0.0)
    pub host: IpAddr,

    /// Server port (default: 8000)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Backend URLs and timeouts are validated here, so a bad value stops
    /// start-up instead of failing the first request.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load service configuration")?;

        let host = parse_env("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .context("Invalid HOST value")?;
        let port = parse_env("PORT", DEFAULT_PORT).context("Invalid PORT value")?;

        Ok(Self {
            common,
            host,
            port,
            cors_allowed_origins: parse_origins(&get_env_or_default("CORS_ORIGINS", "")),
        })
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Get Ollama configuration
    pub fn ollama(&self) -> &OllamaConfig {
        &self.common.ollama
    }

    /// Get catalog configuration
    pub fn catalog(&self) -> &CatalogConfig {
        &self.common.catalog
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

/// Split a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}
