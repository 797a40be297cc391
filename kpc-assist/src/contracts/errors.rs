//! Validation findings.
//!
//! These are expected outcomes of validating a usage, not failures of the
//! engine, so they are plain data rather than `std::error::Error` values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A required attribute was not supplied.
    #[serde(rename = "missing-required-prop")]
    MissingRequiredAttribute,
    /// A supplied attribute is not in the contract, or is deprecated.
    #[serde(rename = "unknown-prop")]
    UnknownAttribute,
    /// A supplied value has the wrong coarse type.
    #[serde(rename = "invalid-prop-type")]
    InvalidAttributeType,
    /// The component may not appear under the given parent.
    #[serde(rename = "invalid-nesting")]
    InvalidNesting,
}

impl ValidationErrorKind {
    /// Stable wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingRequiredAttribute => "missing-required-prop",
            Self::UnknownAttribute => "unknown-prop",
            Self::InvalidAttributeType => "invalid-prop-type",
            Self::InvalidNesting => "invalid-nesting",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One finding produced by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Finding category.
    #[serde(rename = "type")]
    pub kind: ValidationErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Offending attribute, or `nesting` for nesting findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl ValidationError {
    /// Creates a finding.
    #[must_use]
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            property: None,
        }
    }

    /// Attaches the offending attribute name.
    #[must_use]
    pub fn for_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// A required attribute is absent.
    #[must_use]
    pub fn missing_required(attribute: &str) -> Self {
        Self::new(
            ValidationErrorKind::MissingRequiredAttribute,
            format!("Missing required attribute: {attribute}"),
        )
        .for_property(attribute)
    }

    /// A supplied key has no matching attribute contract.
    #[must_use]
    pub fn unknown(attribute: &str) -> Self {
        Self::new(
            ValidationErrorKind::UnknownAttribute,
            format!("Unknown attribute: {attribute}"),
        )
        .for_property(attribute)
    }

    /// A supplied attribute is deprecated.
    #[must_use]
    pub fn deprecated(attribute: &str) -> Self {
        Self::new(
            ValidationErrorKind::UnknownAttribute,
            format!("Attribute {attribute} is deprecated"),
        )
        .for_property(attribute)
    }

    /// A supplied value has the wrong type.
    #[must_use]
    pub fn invalid_type(attribute: &str, expected: &str, actual: &str) -> Self {
        Self::new(
            ValidationErrorKind::InvalidAttributeType,
            format!("Attribute {attribute} has the wrong type: expected {expected}, got {actual}"),
        )
        .for_property(attribute)
    }

    /// A nesting violation.
    #[must_use]
    pub fn invalid_nesting(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidNesting, message).for_property("nesting")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let err = ValidationError::missing_required("value");
        assert_eq!(err.kind, ValidationErrorKind::MissingRequiredAttribute);
        assert_eq!(err.property.as_deref(), Some("value"));

        let err = ValidationError::invalid_nesting("Input cannot be placed directly inside Form");
        assert_eq!(err.property.as_deref(), Some("nesting"));
    }

    #[test]
    fn test_display() {
        let err = ValidationError::unknown("colour");
        assert_eq!(err.to_string(), "[unknown-prop] Unknown attribute: colour");
    }

    #[test]
    fn test_serializes_with_wire_codes() {
        let err = ValidationError::invalid_type("max", "number", "string");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "invalid-prop-type");
        assert_eq!(json["property"], "max");

        let back: ValidationError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_property_omitted_when_absent() {
        let err = ValidationError::new(ValidationErrorKind::InvalidNesting, "bad");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("property").is_none());
    }
}
