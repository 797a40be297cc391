//! The contract validation pipeline.

use std::sync::Arc;

use super::result::ValidationReport;
use super::{SpecialRules, SuppliedAttributes, ValidationError, ValidationResult};
use crate::catalog::ComponentContract;
use crate::nesting::NestingRuleRegistry;
use crate::utils::{find_closest_with_threshold, DEFAULT_SIMILARITY_THRESHOLD};

/// Validates a component usage against its contract.
///
/// Every stage runs regardless of earlier findings:
///
/// 1. required attributes
/// 2. unknown attributes (with "did you mean" hints)
/// 3. coarse value types
/// 4. nesting under the parent, when one is given
/// 5. component-specific rules and deprecation
///
/// Validation never fails; all findings are returned as data.
#[derive(Debug, Clone)]
pub struct ContractValidator {
    nesting: Arc<NestingRuleRegistry>,
    special_rules: SpecialRules,
    similarity_threshold: f64,
}

impl Default for ContractValidator {
    fn default() -> Self {
        Self::new(Arc::new(NestingRuleRegistry::builtin()))
    }
}

impl ContractValidator {
    /// Creates a validator over a nesting registry.
    #[must_use]
    pub fn new(nesting: Arc<NestingRuleRegistry>) -> Self {
        Self {
            nesting,
            special_rules: SpecialRules::default(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Replaces the component-specific rules.
    #[must_use]
    pub fn with_special_rules(mut self, rules: SpecialRules) -> Self {
        self.special_rules = rules;
        self
    }

    /// Sets the similarity threshold for attribute suggestions.
    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// The nesting registry in use.
    #[must_use]
    pub fn nesting(&self) -> &NestingRuleRegistry {
        &self.nesting
    }

    /// Runs the full pipeline.
    #[must_use]
    pub fn validate(
        &self,
        contract: &ComponentContract,
        attrs: &SuppliedAttributes,
        parent: Option<&str>,
    ) -> ValidationResult {
        let mut report = ValidationReport::default();

        Self::check_required(contract, attrs, &mut report);
        self.check_unknown(contract, attrs, &mut report);
        Self::check_types(contract, attrs, &mut report);
        if let Some(parent) = parent {
            self.check_nesting(contract, parent, &mut report);
        }
        self.check_special(contract, attrs, parent, &mut report);

        let result = report.finish();
        tracing::debug!(
            component = %contract.name,
            parent = parent.unwrap_or("-"),
            supplied = attrs.len(),
            errors = result.errors.len(),
            is_valid = result.is_valid,
            "Validated component usage"
        );
        result
    }

    fn check_required(
        contract: &ComponentContract,
        attrs: &SuppliedAttributes,
        report: &mut ValidationReport,
    ) {
        let before = report.error_count();
        for attribute in contract.required_attributes() {
            if attrs.provides(&attribute.name) {
                continue;
            }
            report.error(ValidationError::missing_required(&attribute.name));
            report.suggest(format!(
                "Add attribute: :{}=\"{}\"",
                attribute.name,
                attribute.placeholder()
            ));
        }
        log_stage("required", before, report);
    }

    fn check_unknown(
        &self,
        contract: &ComponentContract,
        attrs: &SuppliedAttributes,
        report: &mut ValidationReport,
    ) {
        let before = report.error_count();
        for (key, _) in attrs.iter().filter(|(k, _)| k.is_static()) {
            let name = key.name();
            if contract.attribute(name).is_some() {
                continue;
            }
            report.error(ValidationError::unknown(name));
            let closest = find_closest_with_threshold(
                name,
                contract.attributes.iter().map(|a| &a.name),
                self.similarity_threshold,
            );
            match closest {
                Some(candidate) => report.suggest(format!("Did you mean: {candidate}?")),
                None => report.suggest(format!("Remove unknown attribute: {name}")),
            }
        }
        log_stage("unknown", before, report);
    }

    fn check_types(
        contract: &ComponentContract,
        attrs: &SuppliedAttributes,
        report: &mut ValidationReport,
    ) {
        let before = report.error_count();
        for (key, value) in attrs.iter().filter(|(k, _)| k.is_static()) {
            let Some(attribute) = contract.attribute(key.name()) else {
                continue;
            };
            if value.matches_type(&attribute.attr_type) {
                continue;
            }
            report.error(ValidationError::invalid_type(
                &attribute.name,
                attribute.attr_type.as_str(),
                value.type_name(),
            ));
            report.suggest(format!(
                "Fix attribute type: {} should be {}",
                attribute.name, attribute.attr_type
            ));
        }
        log_stage("types", before, report);
    }

    fn check_nesting(
        &self,
        contract: &ComponentContract,
        parent: &str,
        report: &mut ValidationReport,
    ) {
        let Some(rule) = self.nesting.get(parent) else {
            return;
        };
        if !rule.mandatory {
            return;
        }

        let before = report.error_count();
        let child = contract.name.as_str();

        // Both checks run: a child that is forbidden and not allowed is
        // reported twice.
        if !rule.is_allowed(child) {
            report.error(ValidationError::invalid_nesting(format!(
                "{child} cannot be placed directly inside {parent}"
            )));
            if let Some(wrapper) = rule.preferred_wrapper() {
                report.suggest(format!("Wrap {child} in {wrapper}"));
            }
        }
        if rule.is_forbidden(child) {
            report.error(ValidationError::invalid_nesting(format!(
                "{child} is not allowed inside {parent}"
            )));
            report.suggest(rule.description.clone());
        }
        log_stage("nesting", before, report);
    }

    fn check_special(
        &self,
        contract: &ComponentContract,
        attrs: &SuppliedAttributes,
        parent: Option<&str>,
        report: &mut ValidationReport,
    ) {
        let before = report.error_count();
        self.special_rules.check(contract, attrs, parent, report);
        log_stage("special", before, report);
    }
}

fn log_stage(stage: &'static str, before: usize, report: &ValidationReport) {
    let found = report.error_count() - before;
    if found > 0 {
        tracing::debug!(stage, found, "Validation stage reported findings");
    }
}
