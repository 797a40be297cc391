//! Structural filtering of full contracts.

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentContract;

/// Selects contracts by category and by the members they declare.
///
/// Every non-empty criterion must hold; an empty filter selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFilter {
    /// Exact category.
    #[serde(default)]
    pub category: Option<String>,
    /// Attribute names the contract must declare.
    #[serde(default, alias = "hasProps")]
    pub has_attributes: Vec<String>,
    /// Event names the contract must declare.
    #[serde(default, alias = "hasEvents")]
    pub has_events: Vec<String>,
    /// Method names the contract must declare.
    #[serde(default, alias = "hasMethods")]
    pub has_methods: Vec<String>,
}

impl ComponentFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a category.
    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Requires an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.has_attributes.push(name.into());
        self
    }

    /// Requires an event.
    #[must_use]
    pub fn with_event(mut self, name: impl Into<String>) -> Self {
        self.has_events.push(name.into());
        self
    }

    /// Requires a method.
    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.has_methods.push(name.into());
        self
    }

    /// True if `contract` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, contract: &ComponentContract) -> bool {
        if self
            .category
            .as_ref()
            .is_some_and(|category| contract.category != *category)
        {
            return false;
        }
        self.has_attributes
            .iter()
            .all(|name| contract.attribute(name).is_some())
            && self
                .has_events
                .iter()
                .all(|name| contract.event(name).is_some())
            && self
                .has_methods
                .iter()
                .all(|name| contract.methods.iter().any(|m| m.name == *name))
    }
}

/// Contracts matching `filter`, in input order.
pub fn filter_contracts<'a, I>(contracts: I, filter: &ComponentFilter) -> Vec<&'a ComponentContract>
where
    I: IntoIterator<Item = &'a ComponentContract>,
{
    contracts
        .into_iter()
        .filter(|contract| filter.matches(contract))
        .collect()
}
