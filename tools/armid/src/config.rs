//! armid configuration.

use anyhow::{bail, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Tool configuration (env-driven).
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = lookup("ARMID_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let log_format = match lookup("ARMID_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("ARMID_LOG_FORMAT must be 'text' or 'json', got '{other}'."),
        };

        Ok(Self {
            log_level,
            log_format,
        })
    }
}
