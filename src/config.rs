//! Runtime configuration
//!
//! Read from the environment (a `.env` file is honored); CLI flags in
//! `main.rs` override individual values.

use std::env;

use crate::error::{QuestError, QuestResult};
use crate::{DEFAULT_ANIMATION_URL, DEFAULT_FETCH_TIMEOUT_MS};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP API binds to
    pub addr: String,
    /// Decorative animation descriptor fetched once at startup
    pub animation_url: Option<String>,
    /// Timeout for the animation fetch
    pub fetch_timeout_ms: u64,
    /// Fixed seed for the tube burn selection (None = entropy)
    pub burn_seed: Option<u64>,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            animation_url: Some(DEFAULT_ANIMATION_URL.to_string()),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            burn_seed: None,
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> QuestResult<Self> {
        // .env is optional
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> QuestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let animation_url = match lookup("LIGHTQUEST_ANIMATION_URL") {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url),
            None => defaults.animation_url,
        };

        let fetch_timeout_ms = match lookup("LIGHTQUEST_FETCH_TIMEOUT_MS") {
            Some(raw) => raw.parse().map_err(|_| QuestError::Config {
                message: format!("LIGHTQUEST_FETCH_TIMEOUT_MS must be an integer, got {:?}", raw),
            })?,
            None => defaults.fetch_timeout_ms,
        };

        let burn_seed = match lookup("LIGHTQUEST_BURN_SEED") {
            Some(raw) => Some(raw.parse().map_err(|_| QuestError::Config {
                message: format!("LIGHTQUEST_BURN_SEED must be an integer, got {:?}", raw),
            })?),
            None => None,
        };

        let logging = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or(defaults.logging.level),
            format: match lookup("LOG_FORMAT")
                .unwrap_or_else(|| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(Self {
            addr: lookup("LIGHTQUEST_ADDR").unwrap_or(defaults.addr),
            animation_url,
            fetch_timeout_ms,
            burn_seed,
            logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000");
        assert_eq!(config.animation_url.as_deref(), Some(DEFAULT_ANIMATION_URL));
        assert_eq!(config.fetch_timeout_ms, DEFAULT_FETCH_TIMEOUT_MS);
        assert_eq!(config.burn_seed, None);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LIGHTQUEST_ADDR", "0.0.0.0:8080"),
            ("LIGHTQUEST_BURN_SEED", "42"),
            ("LOG_FORMAT", "JSON"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.burn_seed, Some(42));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_animation_url_disables_fetch() {
        let config =
            Config::from_lookup(lookup_from(&[("LIGHTQUEST_ANIMATION_URL", "")])).unwrap();
        assert!(config.animation_url.is_none());
    }

    #[test]
    fn test_bad_seed_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("LIGHTQUEST_BURN_SEED", "abc")]))
            .unwrap_err();
        assert!(matches!(err, QuestError::Config { .. }));
    }

    #[test]
    fn test_config_error_converts_to_anyhow() {
        fn load() -> anyhow::Result<Config> {
            Ok(Config::from_lookup(lookup_from(&[(
                "LIGHTQUEST_FETCH_TIMEOUT_MS",
                "soon",
            )]))?)
        }
        let err = load().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Configuration error: LIGHTQUEST_FETCH_TIMEOUT_MS must be an integer, got "soon""#
        );
    }
}
