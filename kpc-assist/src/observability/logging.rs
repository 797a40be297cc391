//! Logging initialization on top of `tracing-subscriber`.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::errors::{AssistantError, Result};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default single-line human format.
    #[default]
    Full,
    /// Abbreviated single-line format.
    Compact,
    /// Multi-line format for local debugging.
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Creates a logging config with the given filter directive.
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            format: LogFormat::default(),
        }
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.filter)
            .map_err(|e| AssistantError::InvalidConfig(format!("bad log filter '{}': {e}", self.filter)))
    }
}

/// Installs the global tracing subscriber.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(config.env_filter()?);
    let installed = match config.format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| AssistantError::InvalidConfig(format!("logging already initialized: {e}")))
}
