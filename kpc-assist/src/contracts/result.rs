//! Validation result type.

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationErrorKind};

/// Outcome of validating one component usage.
///
/// `errors` keeps pipeline order and is not deduplicated. `suggestions`
/// is a flat remediation list accumulated alongside, with no positional
/// pairing to `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no errors were found.
    pub is_valid: bool,
    /// Findings, in the order the checks produced them.
    pub errors: Vec<ValidationError>,
    /// Remediation hints.
    pub suggestions: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl ValidationResult {
    /// Builds a result; validity is derived from `errors`.
    #[must_use]
    pub fn new(errors: Vec<ValidationError>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            suggestions,
        }
    }

    /// Findings of one kind.
    pub fn errors_of(&self, kind: ValidationErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Number of findings of one kind.
    #[must_use]
    pub fn count(&self, kind: ValidationErrorKind) -> usize {
        self.errors_of(kind).count()
    }

    /// True if any finding of `kind` exists.
    #[must_use]
    pub fn has(&self, kind: ValidationErrorKind) -> bool {
        self.errors_of(kind).next().is_some()
    }

    /// True if any finding names `property`.
    #[must_use]
    pub fn mentions(&self, property: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.property.as_deref() == Some(property))
    }
}

/// Accumulates findings while the pipeline runs.
#[derive(Debug, Default)]
pub(crate) struct ValidationReport {
    errors: Vec<ValidationError>,
    suggestions: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub(crate) fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.suggestions)
    }
}
