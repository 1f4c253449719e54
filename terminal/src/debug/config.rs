//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "bank_terminal=info,warn";

/// Log file name prefix inside the log directory (daily suffix added by the appender)
pub const LOG_FILE_PREFIX: &str = "bank-terminal.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log level filter (e.g., "bank_terminal=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `BANK_LOG_DIR`: log directory (default `logs`)
    /// - `BANK_LOG_STDERR`: `1` to also log to stderr
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DebugConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: lookup("BANK_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_to_stderr: lookup("BANK_LOG_STDERR").map(|v| v == "1").unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_environment() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_level, "bank_terminal=info,warn");
    }

    #[test]
    fn test_environment_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RUST_LOG", "bank_terminal=debug"),
            ("BANK_LOG_DIR", "/tmp/bank-logs"),
            ("BANK_LOG_STDERR", "1"),
        ]
        .into_iter()
        .collect();

        let config = DebugConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_dir, PathBuf::from("/tmp/bank-logs"));
        assert!(config.log_to_stderr);
        assert_eq!(config.log_level, "bank_terminal=debug");
    }
}
