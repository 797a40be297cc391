//! Component contract data model.
//!
//! These types mirror the JSON the component catalog ships with: camelCase
//! keys, `props` for attributes and `options` for enumerated values. Unknown
//! keys are ignored so richer catalog files still load.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::nesting::NestingRule;

/// Coarse category of an attribute's declared type.
///
/// Anything that is not one of the six primitive categories is kept verbatim
/// in [`AttributeType::Other`] and accepted without checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeType {
    /// Text.
    String,
    /// Any numeric value.
    Number,
    /// `true` / `false`.
    Boolean,
    /// Ordered list.
    Array,
    /// Key/value structure.
    Object,
    /// Callable reference.
    Function,
    /// Union, generic or otherwise unrecognized declaration.
    Other(String),
}

impl AttributeType {
    /// Parses a declared type, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            "function" => Self::Function,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Returns the declared type as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
            Self::Other(raw) => raw,
        }
    }

    /// Placeholder literal used when suggesting a missing attribute.
    #[must_use]
    pub const fn zero_value(&self) -> &'static str {
        match self {
            Self::String => "\"\"",
            Self::Number => "0",
            Self::Boolean => "false",
            Self::Array => "[]",
            Self::Object => "{}",
            Self::Function | Self::Other(_) => "undefined",
        }
    }

    /// True for declarations the validator actually checks.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for AttributeType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for AttributeType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<AttributeType> for String {
    fn from(ty: AttributeType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of one attribute a component accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeContract {
    /// Attribute name, unique within its component.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Whether callers must supply it.
    #[serde(default)]
    pub required: bool,
    /// Default value, if the catalog documents one.
    ///
    /// An explicit `null` is kept as `Some(Value::Null)`; only an absent
    /// key is `None`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<serde_json::Value>,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
    /// Enumerated options; empty when unconstrained.
    #[serde(default, alias = "options")]
    pub allowed_values: Vec<String>,
    /// Marked for removal.
    #[serde(default)]
    pub deprecated: bool,
    /// Version the attribute was introduced in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl AttributeContract {
    /// Creates an optional attribute of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, attr_type: impl Into<AttributeType>) -> Self {
        Self {
            name: name.into(),
            attr_type: attr_type.into(),
            required: false,
            default_value: None,
            description: String::new(),
            allowed_values: Vec::new(),
            deprecated: false,
            version: None,
        }
    }

    /// Marks the attribute as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the attribute as deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the enumerated options.
    #[must_use]
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Literal suggested for this attribute when it is missing.
    ///
    /// Prefers the documented default, `null` included, falling back to the
    /// type's zero value when none is documented.
    #[must_use]
    pub fn placeholder(&self) -> String {
        match &self.default_value {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => self.attr_type.zero_value().to_string(),
        }
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// A typed parameter of an event, method or slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterContract {
    /// Parameter name.
    pub name: String,
    /// Declared type, verbatim.
    #[serde(rename = "type", default)]
    pub param_type: String,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
    /// Whether the parameter may be omitted.
    #[serde(default)]
    pub optional: bool,
}

/// An event a component emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContract {
    /// Event name.
    pub name: String,
    /// Payload parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterContract>,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
    /// Marked for removal.
    #[serde(default)]
    pub deprecated: bool,
}

impl EventContract {
    /// Creates an event with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            description: String::new(),
            deprecated: false,
        }
    }
}

/// A public method exposed on a component instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodContract {
    /// Method name.
    pub name: String,
    /// Parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterContract>,
    /// Declared return type.
    #[serde(default)]
    pub return_type: String,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
}

/// A named content slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotContract {
    /// Slot name.
    pub name: String,
    /// Scoped parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterContract>,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
}

/// Framework a usage example is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleFramework {
    /// Vue 2.
    Vue2,
    /// Vue 3.
    #[default]
    Vue3,
    /// React.
    React,
    /// Angular.
    Angular,
}

/// How involved a usage example is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleComplexity {
    /// Minimal usage.
    #[default]
    Basic,
    /// Combines several features.
    Intermediate,
    /// Full scenario.
    Advanced,
}

/// A documented usage snippet for a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageExample {
    /// Short heading.
    #[serde(default)]
    pub title: String,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
    /// Situation the example illustrates.
    #[serde(default)]
    pub scenario: String,
    /// Template source.
    pub code: String,
    /// Target framework.
    #[serde(default)]
    pub framework: ExampleFramework,
    /// Difficulty level.
    #[serde(default)]
    pub complexity: ExampleComplexity,
}

impl UsageExample {
    /// Creates a basic Vue 3 example.
    #[must_use]
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            scenario: String::new(),
            code: code.into(),
            framework: ExampleFramework::default(),
            complexity: ExampleComplexity::default(),
        }
    }

    /// Wraps a bare code snippet found at `index` in the catalog list.
    fn from_code(index: usize, code: String) -> Self {
        let mut example = Self::new(format!("Example {}", index + 1), code);
        example.scenario = "basic".to_string();
        example
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExampleEntry {
    Code(String),
    Full(UsageExample),
}

// Catalog files mix bare code strings with full example objects.
fn deserialize_examples<'de, D>(deserializer: D) -> Result<Vec<UsageExample>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<ExampleEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            ExampleEntry::Code(code) => UsageExample::from_code(i, code),
            ExampleEntry::Full(example) => example,
        })
        .collect())
}

/// Full declarative contract for a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentContract {
    /// Unique component name.
    #[serde(default)]
    pub name: String,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
    /// Catalog category.
    #[serde(default)]
    pub category: String,
    /// Search tags, in catalog order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Accepted attributes.
    #[serde(default, alias = "props")]
    pub attributes: Vec<AttributeContract>,
    /// Emitted events.
    #[serde(default)]
    pub events: Vec<EventContract>,
    /// Instance methods.
    #[serde(default)]
    pub methods: Vec<MethodContract>,
    /// Content slots.
    #[serde(default)]
    pub slots: Vec<SlotContract>,
    /// Usage examples, in catalog order.
    #[serde(default, deserialize_with = "deserialize_examples")]
    pub examples: Vec<UsageExample>,
    /// Nesting constraints the catalog documents for this component's
    /// children. Informational only; validation uses the built-in table.
    #[serde(default)]
    pub nesting_rules: Vec<NestingRule>,
    /// Other components this one is built from.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ComponentContract {
    /// Creates an empty contract.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            attributes: Vec::new(),
            events: Vec::new(),
            methods: Vec::new(),
            slots: Vec::new(),
            examples: Vec::new(),
            nesting_rules: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeContract) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds an event.
    #[must_use]
    pub fn with_event(mut self, event: EventContract) -> Self {
        self.events.push(event);
        self
    }

    /// Adds a usage example.
    #[must_use]
    pub fn with_example(mut self, example: UsageExample) -> Self {
        self.examples.push(example);
        self
    }

    /// Adds a nesting rule.
    #[must_use]
    pub fn with_nesting_rule(mut self, rule: NestingRule) -> Self {
        self.nesting_rules.push(rule);
        self
    }

    /// Looks up an attribute by exact name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeContract> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Attribute names in declaration order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    /// Attributes with `required = true`.
    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeContract> {
        self.attributes.iter().filter(|a| a.required)
    }

    /// Looks up an event by exact name.
    #[must_use]
    pub fn event(&self, name: &str) -> Option<&EventContract> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Projects the contract onto its searchable summary.
    #[must_use]
    pub fn summary(&self) -> ComponentSummary {
        ComponentSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Lightweight projection used for enumeration and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Component name.
    pub name: String,
    /// Documentation text.
    #[serde(default)]
    pub description: String,
    /// Catalog category.
    #[serde(default)]
    pub category: String,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ComponentSummary {
    /// Creates a summary.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            tags,
        }
    }
}
