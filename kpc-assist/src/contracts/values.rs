//! Supplied attribute keys and values.

use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::AttributeType;
use crate::errors::{AssistantError, Result};

/// A supplied attribute key, classified by its binding marker.
///
/// Template syntax marks dynamically bound attributes (`:value`,
/// `v-bind:value`), event handlers (`@change`, `v-on:change`) and other
/// directives (`v-if`). Only [`AttributeKey::Static`] keys are checked
/// against the attribute contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    /// Plain attribute with a literal value.
    Static(String),
    /// Dynamically bound attribute.
    Bound(String),
    /// Event handler binding.
    Event(String),
    /// Any other directive.
    Directive(String),
}

impl AttributeKey {
    /// Classifies a raw key.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(name) = raw.strip_prefix("v-bind:") {
            Self::Bound(name.to_string())
        } else if let Some(name) = raw.strip_prefix(':') {
            Self::Bound(name.to_string())
        } else if let Some(name) = raw.strip_prefix("v-on:") {
            Self::Event(name.to_string())
        } else if let Some(name) = raw.strip_prefix('@') {
            Self::Event(name.to_string())
        } else if let Some(name) = raw.strip_prefix("v-") {
            Self::Directive(name.to_string())
        } else {
            Self::Static(raw.to_string())
        }
    }

    /// The key without its marker.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Static(name) | Self::Bound(name) | Self::Event(name) | Self::Directive(name) => {
                name
            }
        }
    }

    /// True for plain attributes.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Name of the attribute this key sets, for static and bound keys.
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            Self::Static(name) | Self::Bound(name) => Some(name),
            Self::Event(_) | Self::Directive(_) => None,
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(name) => write!(f, "{name}"),
            Self::Bound(name) => write!(f, ":{name}"),
            Self::Event(name) => write!(f, "@{name}"),
            Self::Directive(name) => write!(f, "v-{name}"),
        }
    }
}

impl From<&str> for AttributeKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for AttributeKey {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

/// A supplied attribute value, tagged by its runtime category.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Text.
    String(String),
    /// Number.
    Number(f64),
    /// Boolean.
    Bool(bool),
    /// Ordered list.
    Array(Vec<AttributeValue>),
    /// Key/value structure.
    Object(BTreeMap<String, AttributeValue>),
    /// Reference to a callable, by name.
    FunctionRef(String),
    /// Anything without a category, kept verbatim.
    Unparsed(String),
}

impl AttributeValue {
    /// Creates a function reference.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::FunctionRef(name.into())
    }

    /// Category name used in messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::FunctionRef(_) => "function",
            Self::Unparsed(_) => "unknown",
        }
    }

    /// Coarse category match against a declared type.
    ///
    /// Declarations outside the six checked categories always match.
    #[must_use]
    pub const fn matches_type(&self, expected: &AttributeType) -> bool {
        match expected {
            AttributeType::Boolean => matches!(self, Self::Bool(_)),
            AttributeType::String => matches!(self, Self::String(_)),
            AttributeType::Number => matches!(self, Self::Number(_)),
            AttributeType::Array => matches!(self, Self::Array(_)),
            AttributeType::Object => matches!(self, Self::Object(_)),
            AttributeType::Function => matches!(self, Self::FunctionRef(_)),
            AttributeType::Other(_) => true,
        }
    }

    /// Scripting-style truthiness: empty text, zero, NaN, `false` and
    /// null-like values are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::Array(_) | Self::Object(_) | Self::FunctionRef(_) => true,
            Self::Unparsed(raw) => !matches!(raw.as_str(), "" | "null" | "undefined"),
        }
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Unparsed("null".to_string()),
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Unparsed(n.to_string()),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttributeValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Attributes supplied for one component usage.
///
/// Keeps insertion order so findings are reported in the order the caller
/// wrote them; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuppliedAttributes {
    entries: Vec<(AttributeKey, AttributeValue)>,
}

impl SuppliedAttributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from a JSON object.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            AssistantError::InvalidArguments(format!(
                "attributes must be a JSON object, got {}",
                json_kind(value)
            ))
        })?;
        Ok(map
            .iter()
            .map(|(k, v)| (k.as_str(), AttributeValue::from(v.clone())))
            .collect())
    }

    /// Inserts or replaces an attribute from its raw key.
    pub fn insert(&mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Looks up a value by classified key.
    #[must_use]
    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// True if the attribute is supplied as a plain, unprefixed key.
    ///
    /// A bound `:name` does not count; only the literal key does.
    #[must_use]
    pub fn provides(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, _)| matches!(k, AttributeKey::Static(n) if n == name))
    }

    /// True if a static or bound value for the attribute is truthy.
    #[must_use]
    pub fn provides_truthy(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, v)| k.attribute_name() == Some(name) && v.is_truthy())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SuppliedAttributes
where
    K: Into<AttributeKey>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
