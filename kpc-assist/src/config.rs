//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{AssistantError, Result};
use crate::observability::LoggingConfig;

/// Top-level configuration for the assistant engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Minimum similarity (exclusive) for "did you mean" suggestions.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Directory holding the catalog JSON files.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// File name of the full component data.
    #[serde(default = "default_full_data_file")]
    pub full_data_file: String,
    /// File name of the summary index.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// How many catalog names a not-found error lists.
    #[serde(default = "default_max_listed_alternatives")]
    pub max_listed_alternatives: usize,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_similarity_threshold() -> f64 {
    crate::utils::DEFAULT_SIMILARITY_THRESHOLD
}

fn default_full_data_file() -> String {
    "kpc-api-full.json".to_string()
}

fn default_index_file() -> String {
    "kpc-api-index.json".to_string()
}

fn default_max_listed_alternatives() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            data_dir: None,
            full_data_file: default_full_data_file(),
            index_file: default_index_file(),
            max_listed_alternatives: default_max_listed_alternatives(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and validates a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Sets the similarity threshold.
    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Sets the logging configuration.
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.similarity_threshold) {
            return Err(AssistantError::InvalidConfig(format!(
                "similarity_threshold must be in [0, 1), got {}",
                self.similarity_threshold
            )));
        }
        if self.full_data_file.trim().is_empty() {
            return Err(AssistantError::InvalidConfig(
                "full_data_file cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!((config.similarity_threshold - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.full_data_file, "kpc-api-full.json");
        assert_eq!(config.index_file, "kpc-api-index.json");
        assert!(config.data_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"similarity_threshold": 0.75}"#).unwrap();
        assert!((config.similarity_threshold - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.max_listed_alternatives, 10);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = EngineConfig::new().with_similarity_threshold(1.5);
        assert!(matches!(
            config.validate(),
            Err(AssistantError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data_dir": "/srv/kpc", "index_file": "index.json"}}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/kpc")));
        assert_eq!(config.index_file, "index.json");
    }

    #[test]
    fn test_from_file_rejects_bad_threshold() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"similarity_threshold": -0.1}}"#).unwrap();
        assert!(EngineConfig::from_file(file.path()).is_err());
    }
}
