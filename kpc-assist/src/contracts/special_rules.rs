//! Component-specific rules that the attribute contract cannot express.

use serde::{Deserialize, Serialize};

use super::result::ValidationReport;
use super::{SuppliedAttributes, ValidationError, ValidationErrorKind};
use crate::catalog::ComponentContract;

/// Requires a truthy attribute (static or bound) on one component,
/// optionally only when nested under a given parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredBinding {
    /// Component the rule targets.
    pub component: String,
    /// Parent the rule is limited to; `None` applies everywhere.
    #[serde(default)]
    pub parent: Option<String>,
    /// Attribute that must be set.
    pub attribute: String,
    /// Error message.
    pub message: String,
    /// Remediation hint.
    pub hint: String,
}

impl RequiredBinding {
    /// Creates a rule that applies under any parent.
    #[must_use]
    pub fn new(
        component: impl Into<String>,
        attribute: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            parent: None,
            attribute: attribute.into(),
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Limits the rule to one parent.
    #[must_use]
    pub fn under(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    fn applies(&self, component: &str, parent: Option<&str>) -> bool {
        self.component == component
            && self
                .parent
                .as_deref()
                .map_or(true, |required| parent == Some(required))
    }
}

/// The last pipeline stage: binding rules, then deprecation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialRules {
    bindings: Vec<RequiredBinding>,
}

impl Default for SpecialRules {
    fn default() -> Self {
        Self::new(default_bindings())
    }
}

impl SpecialRules {
    /// Creates the stage with the given binding rules.
    #[must_use]
    pub fn new(bindings: Vec<RequiredBinding>) -> Self {
        Self { bindings }
    }

    /// The configured binding rules.
    #[must_use]
    pub fn bindings(&self) -> &[RequiredBinding] {
        &self.bindings
    }

    pub(crate) fn check(
        &self,
        contract: &ComponentContract,
        attrs: &SuppliedAttributes,
        parent: Option<&str>,
        report: &mut ValidationReport,
    ) {
        for rule in self.bindings.iter().filter(|r| r.applies(&contract.name, parent)) {
            if !attrs.provides_truthy(&rule.attribute) {
                report.error(
                    ValidationError::new(ValidationErrorKind::MissingRequiredAttribute, &rule.message)
                        .for_property(&rule.attribute),
                );
                report.suggest(&rule.hint);
            }
        }

        for (key, _) in attrs.iter().filter(|(k, _)| k.is_static()) {
            let name = key.name();
            if contract.attribute(name).is_some_and(|a| a.deprecated) {
                report.error(ValidationError::deprecated(name));
                report.suggest(format!(
                    "Attribute {name} is deprecated; check the component documentation for its replacement"
                ));
            }
        }
    }
}

/// Built-in binding rules.
#[must_use]
pub fn default_bindings() -> Vec<RequiredBinding> {
    vec![
        RequiredBinding::new(
            "FormItem",
            "value",
            "FormItem needs a :value binding to enable validation",
            "Bind :value to the matching form data field",
        )
        .under("Form"),
        RequiredBinding::new(
            "Table",
            "data",
            "Table needs a data attribute",
            "Bind :data to the table rows",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttributeContract;

    fn run(contract: &ComponentContract, attrs: &SuppliedAttributes, parent: Option<&str>) -> crate::contracts::ValidationResult {
        let mut report = ValidationReport::default();
        SpecialRules::default().check(contract, attrs, parent, &mut report);
        report.finish()
    }

    #[test]
    fn test_form_item_needs_value_only_under_form() {
        let form_item = ComponentContract::new("FormItem");
        let empty = SuppliedAttributes::new();

        let under_form = run(&form_item, &empty, Some("Form"));
        assert_eq!(under_form.count(ValidationErrorKind::MissingRequiredAttribute), 1);
        assert!(under_form.mentions("value"));

        assert!(run(&form_item, &empty, Some("div")).is_valid);
        assert!(run(&form_item, &empty, None).is_valid);
    }

    #[test]
    fn test_bound_value_satisfies_form_item() {
        let form_item = ComponentContract::new("FormItem");
        let attrs = SuppliedAttributes::new().with(":value", "form.name");
        assert!(run(&form_item, &attrs, Some("Form")).is_valid);
    }

    #[test]
    fn test_falsy_value_does_not_satisfy() {
        let form_item = ComponentContract::new("FormItem");
        let attrs = SuppliedAttributes::new().with("value", "");
        assert!(!run(&form_item, &attrs, Some("Form")).is_valid);
    }

    #[test]
    fn test_table_needs_data_anywhere() {
        let table = ComponentContract::new("Table");
        assert!(!run(&table, &SuppliedAttributes::new(), None).is_valid);
        assert!(run(&table, &SuppliedAttributes::new().with(":data", "rows"), None).is_valid);
    }

    #[test]
    fn test_deprecated_attribute_reported_as_unknown() {
        let contract = ComponentContract::new("Select")
            .with_attribute(AttributeContract::new("keywords", "array").deprecated())
            .with_attribute(AttributeContract::new("value", "string"));
        let attrs = SuppliedAttributes::new()
            .with("keywords", serde_json::json!([]))
            .with("value", "a")
            .with("@keywords", "handler");

        let result = run(&contract, &attrs, None);
        assert_eq!(result.count(ValidationErrorKind::UnknownAttribute), 1);
        assert!(result.errors[0].message.contains("deprecated"));
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_bound_deprecated_attribute_not_reported() {
        let contract = ComponentContract::new("Select")
            .with_attribute(AttributeContract::new("keywords", "array").deprecated());

        let bound = SuppliedAttributes::new().with(":keywords", "list");
        assert!(run(&contract, &bound, None).is_valid);

        let both = SuppliedAttributes::new()
            .with("keywords", serde_json::json!([]))
            .with(":keywords", "list");
        let result = run(&contract, &both, None);
        assert_eq!(result.count(ValidationErrorKind::UnknownAttribute), 1);
        assert_eq!(result.errors[0].property.as_deref(), Some("keywords"));
    }
}
