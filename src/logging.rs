//! Logging setup.
//!
//! Installs a `tracing` fmt subscriber writing to stderr. The `RUST_LOG`
//! environment variable, when set, overrides the configured level.

use crate::error::CadreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Log level filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose
    Trace,
    /// Debugging detail
    Debug,
    /// Normal operation
    #[default]
    Info,
    /// Problems worth attention
    Warn,
    /// Failures only
    Error,
}

impl LogLevel {
    /// Returns the level as an env-filter directive.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for subscriber installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to install a subscriber at all.
    pub enabled: bool,
    /// Level filter used when `RUST_LOG` is not set.
    pub level: LogLevel,
}

impl LoggingConfig {
    /// Creates a config with default values (enabled, info level).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a disabled logging configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Sets the level filter.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::default(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns a configuration error when a global subscriber is already
/// installed.
pub fn init(config: &LoggingConfig) -> Result<(), CadreError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CadreError::configuration("logging", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::new().level, LogLevel::Info);
    }

    #[test]
    fn disabled_init_is_a_no_op() {
        assert!(init(&LoggingConfig::disabled()).is_ok());
    }

    #[test]
    fn levels_render_as_directives() {
        assert_eq!(LogLevel::Trace.as_str(), "trace");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn serialization_roundtrip() {
        let config = LoggingConfig::new().with_level(LogLevel::Debug);
        let json = serde_json::to_string(&config).unwrap();
        let back: LoggingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
