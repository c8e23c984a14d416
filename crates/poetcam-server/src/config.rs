//! Server configuration
//!
//! Built once at startup from Shuttle secrets and injected into the
//! application state. Nothing here is read from global state afterwards.

use thiserror::Error;

use crate::adapters::gemini::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Upload limit used when MAX_UPLOAD_BYTES is not set (5 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required secret: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub gemini: GeminiConfig,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Build from any key lookup (Shuttle `SecretStore::get`, env, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let gemini = GeminiConfig::new(api_key)
            .with_model(get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_base_url(get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "MAX_UPLOAD_BYTES",
                    value: raw,
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            gemini,
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "abc")])).unwrap();
        assert_eq!(config.gemini.api_key(), "abc");
        assert_eq!(config.gemini.model(), DEFAULT_MODEL);
        assert_eq!(config.gemini.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_missing_api_key() {
        let err = ServerConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GEMINI_API_KEY")));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("MAX_UPLOAD_BYTES", "10485760"),
        ]))
        .unwrap();
        assert_eq!(config.gemini.model(), "gemini-1.5-flash");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_invalid_upload_limit() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "abc"),
            ("MAX_UPLOAD_BYTES", "five megs"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "MAX_UPLOAD_BYTES", .. }));
    }
}
