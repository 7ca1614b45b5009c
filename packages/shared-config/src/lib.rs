//! Shared configuration types for AuraBeats services
//!
//! Every value is read once from the environment at process start and is
//! never mutated afterwards. The API server and the client crates all consume
//! the same types, so backend URLs and timeouts stay consistent.

mod catalog;
mod error;
mod ollama;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ConfigResult};
pub use ollama::OllamaConfig;

use std::env;

/// Common configuration shared between all services
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Ollama model backend configuration
    pub ollama: OllamaConfig,

    /// Music catalog search configuration
    pub catalog: CatalogConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log level (from RUST_LOG or LOG_LEVEL)
    pub log_level: String,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            ollama: OllamaConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

/// Reject base URLs that are empty or lack an http(s) scheme
pub(crate) fn validate_base_url(name: &str, url: &str) -> ConfigResult<()> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            "URL cannot be empty".to_string(),
        ));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            format!("expected an http:// or https:// URL, got '{}'", trimmed),
        ));
    }
    Ok(())
}

/// Reject zero-second timeouts, which would fail every request immediately
pub(crate) fn validate_timeout(name: &str, secs: u64) -> ConfigResult<()> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue(
            name.to_string(),
            "timeout must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "anything".parse::<Environment>().unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(format!("{}", Environment::Production), "production");
        assert_eq!(format!("{}", Environment::Staging), "staging");
        assert_eq!(format!("{}", Environment::Development), "development");
    }

    #[test]
    fn test_environment_checks() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Production.is_development());
        assert!(Environment::Development.is_development());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        temp_env::with_var_unset("AURABEATS_TEST_PARSE", || {
            assert_eq!(parse_env("AURABEATS_TEST_PARSE", 42u64).unwrap(), 42);
        });
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        temp_env::with_var("AURABEATS_TEST_PARSE", Some("soon"), || {
            let err = parse_env("AURABEATS_TEST_PARSE", 42u64).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "AURABEATS_TEST_PARSE"));
        });
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("X", "http://localhost:11434").is_ok());
        assert!(validate_base_url("X", "https://itunes.apple.com").is_ok());
        assert!(matches!(
            validate_base_url("X", "   "),
            Err(ConfigError::InvalidUrl(_, _))
        ));
        assert!(matches!(
            validate_base_url("X", "localhost:11434"),
            Err(ConfigError::InvalidUrl(_, _))
        ));
    }

    #[test]
    fn test_validate_timeout() {
        assert!(validate_timeout("X", 1).is_ok());
        assert!(validate_timeout("X", 0).is_err());
    }

    #[test]
    fn test_common_config_from_env() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("prod")),
                ("RUST_LOG", Some("debug")),
                ("OLLAMA_URL", None::<&str>),
                ("CATALOG_URL", None),
            ],
            || {
                let config = CommonConfig::from_env().unwrap();
                assert_eq!(config.environment, Environment::Production);
                assert_eq!(config.log_level, "debug");
                assert_eq!(config.ollama.url, "http://localhost:11434");
                assert_eq!(config.catalog.url, "https://itunes.apple.com");
            },
        );
    }
}
