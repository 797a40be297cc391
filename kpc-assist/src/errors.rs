//! Error types for the kpc-assist engine.
//!
//! Validation findings are not errors: they travel as data inside
//! [`ValidationResult`](crate::contracts::ValidationResult). The variants here
//! cover the conditions around the engine, such as querying a catalog that
//! has not been loaded yet.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AssistantError>;

/// The main error type for kpc-assist operations.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The catalog was queried before its one-time load completed.
    #[error("Catalog not ready: load the component data before querying")]
    NotReady,

    /// A second load was attempted on an already populated handle.
    #[error("Catalog already loaded; build a new handle to swap snapshots")]
    AlreadyLoaded,

    /// The requested component does not exist in the catalog.
    #[error("{}", not_found_message(.name, .did_you_mean.as_deref()))]
    ComponentNotFound {
        /// The name that was looked up.
        name: String,
        /// Closest catalog name, when one is similar enough.
        did_you_mean: Option<String>,
        /// A few catalog names to point the caller at.
        alternatives: Vec<String>,
    },

    /// The search query was empty or whitespace-only.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Caller-supplied arguments had the wrong shape.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn not_found_message(name: &str, did_you_mean: Option<&str>) -> String {
    match did_you_mean {
        Some(candidate) => format!("Component '{name}' not found (did you mean '{candidate}'?)"),
        None => format!("Component '{name}' not found"),
    }
}

impl AssistantError {
    /// Creates a not-found error without suggestions.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ComponentNotFound {
            name: name.into(),
            did_you_mean: None,
            alternatives: Vec::new(),
        }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotReady => codes::NOT_READY,
            Self::AlreadyLoaded => codes::ALREADY_LOADED,
            Self::ComponentNotFound { .. } => codes::NOT_FOUND,
            Self::InvalidQuery(_) | Self::InvalidArguments(_) => codes::INVALID_PARAMS,
            Self::InvalidConfig(_) => codes::INVALID_CONFIG,
            Self::Serialization(_) | Self::Io(_) => codes::LOAD_FAILED,
        }
    }

    /// Returns true when retrying after loading the catalog may succeed.
    #[must_use]
    pub const fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady)
    }

    /// Converts to an [`ErrorInfo`] for transport layers.
    #[must_use]
    pub fn to_info(&self) -> ErrorInfo {
        let mut info = ErrorInfo::new(self.code(), self.to_string());
        if let Self::ComponentNotFound {
            did_you_mean,
            alternatives,
            ..
        } = self
        {
            if let Some(candidate) = did_you_mean {
                info = info.with_fix_hint(format!("Did you mean '{candidate}'?"));
            }
            if !alternatives.is_empty() {
                info = info.with_context_entry("alternatives", alternatives.join(", "));
            }
        }
        info
    }
}

/// Structured metadata for surfacing an error to callers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Stable error code (e.g., "ASSIST-NOT-READY").
    pub code: String,
    /// Short summary of the error.
    pub summary: String,
    /// Hint for fixing the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_hint: Option<String>,
    /// Additional context key-value pairs.
    #[serde(default)]
    pub context: HashMap<String, String>,
}

impl ErrorInfo {
    /// Creates a new error info.
    #[must_use]
    pub fn new(code: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            summary: summary.into(),
            fix_hint: None,
            context: HashMap::new(),
        }
    }

    /// Sets the fix hint.
    #[must_use]
    pub fn with_fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }

    /// Adds a single context entry.
    #[must_use]
    pub fn with_context_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Stable error codes.
pub mod codes {
    /// Catalog queried before load.
    pub const NOT_READY: &str = "ASSIST-001-NOT_READY";
    /// Catalog loaded twice.
    pub const ALREADY_LOADED: &str = "ASSIST-002-ALREADY_LOADED";
    /// Component missing from the catalog.
    pub const NOT_FOUND: &str = "ASSIST-003-NOT_FOUND";
    /// Bad caller arguments.
    pub const INVALID_PARAMS: &str = "ASSIST-004-INVALID_PARAMS";
    /// Bad configuration.
    pub const INVALID_CONFIG: &str = "ASSIST-005-INVALID_CONFIG";
    /// Catalog data could not be read or parsed.
    pub const LOAD_FAILED: &str = "ASSIST-006-LOAD_FAILED";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_display() {
        let err = AssistantError::NotReady;
        assert!(err.to_string().contains("not ready"));
        assert!(err.is_not_ready());
        assert_eq!(err.code(), codes::NOT_READY);
    }

    #[test]
    fn test_not_found_with_suggestion() {
        let err = AssistantError::ComponentNotFound {
            name: "Buton".to_string(),
            did_you_mean: Some("Button".to_string()),
            alternatives: vec!["Button".to_string(), "Input".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Component 'Buton' not found (did you mean 'Button'?)"
        );

        let info = err.to_info();
        assert_eq!(info.code, codes::NOT_FOUND);
        assert_eq!(info.fix_hint, Some("Did you mean 'Button'?".to_string()));
        assert_eq!(
            info.context.get("alternatives"),
            Some(&"Button, Input".to_string())
        );
    }

    #[test]
    fn test_not_found_plain() {
        let err = AssistantError::not_found("Nope");
        assert_eq!(err.to_string(), "Component 'Nope' not found");
        assert!(err.to_info().fix_hint.is_none());
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: AssistantError = parse.unwrap_err().into();
        assert_eq!(err.code(), codes::LOAD_FAILED);
    }

    #[test]
    fn test_error_info_serialization() {
        let info = ErrorInfo::new("TEST-001", "Test error").with_fix_hint("Fix it");
        let json = serde_json::to_string(&info).unwrap();
        let back: ErrorInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, back);
    }
}
