//! Immutable registry of nesting rules keyed by parent name.

use std::collections::HashMap;

use super::NestingRule;

/// Lookup table from parent component name to its [`NestingRule`].
///
/// Built once; there is no way to mutate a registry after construction.
#[derive(Debug, Clone, Default)]
pub struct NestingRuleRegistry {
    rules: HashMap<String, NestingRule>,
}

impl NestingRuleRegistry {
    /// Creates a registry holding only the built-in rules.
    #[must_use]
    pub fn builtin() -> Self {
        Self::builder().with_builtin_rules().build()
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts a builder.
    #[must_use]
    pub fn builder() -> NestingRuleRegistryBuilder {
        NestingRuleRegistryBuilder::default()
    }

    /// Looks up the rule for an exact parent name.
    #[must_use]
    pub fn get(&self, parent: &str) -> Option<&NestingRule> {
        self.rules.get(parent)
    }

    /// Parent names with a rule, sorted.
    #[must_use]
    pub fn parents(&self) -> Vec<&str> {
        let mut parents: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        parents.sort_unstable();
        parents
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Collects rules in order; later rules for the same parent win.
#[derive(Debug, Default)]
pub struct NestingRuleRegistryBuilder {
    rules: Vec<NestingRule>,
}

impl NestingRuleRegistryBuilder {
    /// Adds the built-in rule table.
    #[must_use]
    pub fn with_builtin_rules(self) -> Self {
        self.with_rules(builtin_rules())
    }

    /// Adds one rule.
    #[must_use]
    pub fn with_rule(mut self, rule: NestingRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several rules.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = NestingRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Freezes the collected rules into a registry.
    #[must_use]
    pub fn build(self) -> NestingRuleRegistry {
        let mut rules = HashMap::with_capacity(self.rules.len());
        for rule in self.rules {
            rules.insert(rule.parent.clone(), rule);
        }
        tracing::debug!(rule_count = rules.len(), "Nesting rule registry built");
        NestingRuleRegistry { rules }
    }
}

/// The built-in rule table for container components.
#[must_use]
pub fn builtin_rules() -> Vec<NestingRule> {
    vec![
        NestingRule::new("Form")
            .requires(["FormItem"])
            .allows(["FormItem", "div", "Button"])
            .forbids([
                "Input",
                "Select",
                "Checkbox",
                "Radio",
                "Spinner",
                "Upload",
                "DatePicker",
            ])
            .with_description("Form controls inside a Form must be wrapped in a FormItem"),
        NestingRule::new("Table")
            .requires(["TableColumn"])
            .allows(["TableColumn"])
            .with_description("A Table must declare its columns with TableColumn"),
        NestingRule::new("Menu")
            .requires(["MenuItem"])
            .allows(["MenuItem", "MenuTitle", "Divider"])
            .with_description("A Menu must contain MenuItem or MenuTitle entries"),
        NestingRule::new("Tabs")
            .requires(["Tab"])
            .allows(["Tab"])
            .with_description("Tabs must declare each tab page with Tab"),
        NestingRule::new("Collapse")
            .requires(["CollapseItem"])
            .allows(["CollapseItem"])
            .with_description("A Collapse must contain CollapseItem panels"),
        NestingRule::new("Steps")
            .requires(["Step"])
            .allows(["Step"])
            .with_description("Steps must declare each step with Step"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = NestingRuleRegistry::builtin();
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.parents(),
            vec!["Collapse", "Form", "Menu", "Steps", "Table", "Tabs"]
        );

        let form = registry.get("Form").unwrap();
        assert!(form.is_forbidden("Input"));
        assert!(form.is_allowed("FormItem"));
        assert_eq!(form.preferred_wrapper(), Some("FormItem"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = NestingRuleRegistry::builtin();
        assert!(registry.get("form").is_none());
        assert!(registry.get("Row").is_none());
    }

    #[test]
    fn test_later_rule_overwrites() {
        let registry = NestingRuleRegistry::builder()
            .with_builtin_rules()
            .with_rule(NestingRule::new("Tabs").allows(["Tab", "TabPanel"]).mandatory(false))
            .build();

        assert_eq!(registry.len(), 6);
        let tabs = registry.get("Tabs").unwrap();
        assert!(!tabs.mandatory);
        assert!(tabs.is_allowed("TabPanel"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = NestingRuleRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get("Form").is_none());
    }
}
