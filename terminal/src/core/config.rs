//! # Client Configuration
//!
//! Configuration loaded from environment variables, validated on startup so a
//! misconfigured client fails fast instead of on the first request.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BANK_API_URL` | compile-time `BANK_API_URL`, else empty | API origin |
//! | `BANK_SESSION_FILE` | `./bank-session.json` | where the session is persisted |
//! | `BANK_HTTP_TIMEOUT` | `10` | per-request timeout in seconds |
//!
//! The API URL may be baked in at build time (`BANK_API_URL=... cargo build`)
//! and overridden at runtime. An empty value means the local development
//! origin [`DEFAULT_API_URL`].

use std::path::PathBuf;

use crate::core::error::{AppError, Result};

/// Origin used when no API URL was configured at build time or runtime.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// API URL baked in at compile time, empty when unset.
const BUILD_API_URL: &str = match option_env!("BANK_API_URL") {
    Some(url) => url,
    None => "",
};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin as configured; may be empty
    pub api_url: String,
    /// Session file location
    pub session_path: PathBuf,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: BUILD_API_URL.to_string(),
            session_path: PathBuf::from("./bank-session.json"),
            request_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("BANK_API_URL").unwrap_or(defaults.api_url);

        let session_path = lookup("BANK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.session_path);

        let request_timeout_secs = match lookup("BANK_HTTP_TIMEOUT") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("BANK_HTTP_TIMEOUT must be a whole number of seconds: {}", e))
            })?,
            None => defaults.request_timeout_secs,
        };

        let config = Self {
            api_url: api_url.trim().to_string(),
            session_path,
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.api_url.is_empty()
            && !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://"))
        {
            return Err(AppError::Config(format!(
                "BANK_API_URL must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config("BANK_HTTP_TIMEOUT must be at least 1 second".to_string()));
        }

        Ok(())
    }

    /// Origin every endpoint path is joined to, without a trailing slash.
    pub fn resolved_api_url(&self) -> String {
        let url = if self.api_url.is_empty() {
            DEFAULT_API_URL
        } else {
            self.api_url.as_str()
        };
        url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_runtime_url_overrides_build_value() {
        let config = ClientConfig::from_lookup(lookup_from(&[("BANK_API_URL", "https://bank.example.com/")])).unwrap();
        assert_eq!(config.api_url, "https://bank.example.com/");
        assert_eq!(config.resolved_api_url(), "https://bank.example.com");
    }

    #[test]
    fn test_empty_url_resolves_to_local_origin() {
        let config = ClientConfig::from_lookup(lookup_from(&[("BANK_API_URL", "")])).unwrap();
        assert_eq!(config.api_url, "");
        assert_eq!(config.resolved_api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[("BANK_API_URL", "")])).unwrap();
        assert_eq!(config.session_path, PathBuf::from("./bank-session.json"));
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[("BANK_HTTP_TIMEOUT", "ten")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = ClientConfig::from_lookup(lookup_from(&[("BANK_HTTP_TIMEOUT", "0")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_non_http_url_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[("BANK_API_URL", "ftp://bank")])).unwrap_err();
        assert!(err.to_string().contains("http(s)"));
    }
}
