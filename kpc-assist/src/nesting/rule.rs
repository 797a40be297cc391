//! Nesting rule value types.

use serde::{Deserialize, Serialize};

/// Child name sets a parent imposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildConstraints {
    /// Children the parent expects; the first entry is the preferred wrapper.
    #[serde(default)]
    pub required: Vec<String>,
    /// Children the parent accepts directly.
    #[serde(default)]
    pub allowed: Vec<String>,
    /// Children that must never appear directly under the parent.
    #[serde(default)]
    pub forbidden: Vec<String>,
}

/// Constraint on the direct children of one parent component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestingRule {
    /// Parent component name.
    #[serde(default)]
    pub parent: String,
    /// Child constraints.
    #[serde(default)]
    pub children: ChildConstraints,
    /// Whether the rule is enforced; non-mandatory rules are informational.
    #[serde(default)]
    pub mandatory: bool,
    /// Human-readable rationale, surfaced as a suggestion.
    #[serde(default)]
    pub description: String,
}

impl NestingRule {
    /// Creates an enforced rule with no constraints.
    #[must_use]
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            children: ChildConstraints::default(),
            mandatory: true,
            description: String::new(),
        }
    }

    /// Sets the required children.
    #[must_use]
    pub fn requires<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.required = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the allowed children.
    #[must_use]
    pub fn allows<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.allowed = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the forbidden children.
    #[must_use]
    pub fn forbids<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.forbidden = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether the rule is enforced.
    #[must_use]
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True if `child` is in the allowed set.
    #[must_use]
    pub fn is_allowed(&self, child: &str) -> bool {
        self.children.allowed.iter().any(|c| c == child)
    }

    /// True if `child` is in the forbidden set.
    #[must_use]
    pub fn is_forbidden(&self, child: &str) -> bool {
        self.children.forbidden.iter().any(|c| c == child)
    }

    /// The preferred wrapper for disallowed children.
    #[must_use]
    pub fn preferred_wrapper(&self) -> Option<&str> {
        self.children.required.first().map(String::as_str)
    }
}
