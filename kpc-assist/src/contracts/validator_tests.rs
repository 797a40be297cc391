//! Tests for the contract validation pipeline.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    use crate::catalog::{AttributeContract, CatalogSource, ComponentContract};
    use crate::contracts::{
        ContractValidator, SpecialRules, SuppliedAttributes, ValidationErrorKind,
    };
    use crate::nesting::{NestingRule, NestingRuleRegistry};
    use crate::testing::{
        button_contract, form_item_contract, input_contract, sample_catalog, spinner_contract,
        table_contract,
    };

    fn attrs(value: serde_json::Value) -> SuppliedAttributes {
        SuppliedAttributes::from_json(&value).unwrap()
    }

    fn kinds(result: &crate::contracts::ValidationResult) -> Vec<ValidationErrorKind> {
        result.errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_spinner_valid_usage() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &spinner_contract(),
            &attrs(json!({"value": 10, "min": 0, "max": 100})),
            None,
        );

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_spinner_missing_and_unknown() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &spinner_contract(),
            &attrs(json!({"nonExistentProp": "x"})),
            None,
        );

        assert!(!result.is_valid);
        assert_eq!(
            kinds(&result),
            vec![
                ValidationErrorKind::MissingRequiredAttribute,
                ValidationErrorKind::UnknownAttribute,
            ]
        );
        assert_eq!(result.errors[0].property.as_deref(), Some("value"));
        assert_eq!(result.errors[1].property.as_deref(), Some("nonExistentProp"));
        assert_eq!(
            result.suggestions,
            vec![
                "Add attribute: :value=\"0\"".to_string(),
                "Remove unknown attribute: nonExistentProp".to_string(),
            ]
        );
    }

    #[test]
    fn test_input_inside_form_is_invalid_nesting() {
        let validator = ContractValidator::default();
        let result = validator.validate(&input_contract(), &SuppliedAttributes::new(), Some("Form"));

        assert!(!result.is_valid);
        assert!(result.has(ValidationErrorKind::InvalidNesting));
        // Input is both outside `allowed` and inside `forbidden`.
        assert_eq!(result.count(ValidationErrorKind::InvalidNesting), 2);
        assert!(result
            .suggestions
            .contains(&"Wrap Input in FormItem".to_string()));
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("wrapped in a FormItem")));
    }

    #[test]
    fn test_forbidden_child_flagged_even_with_valid_attributes() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &spinner_contract(),
            &attrs(json!({"value": 1, "min": 0})),
            Some("Form"),
        );

        assert!(!result.is_valid);
        assert_eq!(
            kinds(&result),
            vec![ValidationErrorKind::InvalidNesting, ValidationErrorKind::InvalidNesting]
        );
    }

    #[test]
    fn test_allowed_child_passes_nesting() {
        let validator = ContractValidator::default();
        let result = validator.validate(&button_contract(), &SuppliedAttributes::new(), Some("Form"));
        assert!(result.is_valid);

        let result = validator.validate(
            &form_item_contract(),
            &attrs(json!({":value": "form.name", "label": "Name"})),
            Some("Form"),
        );
        assert!(result.is_valid);
    }

    #[test]
    fn test_not_allowed_without_forbidden_reports_once() {
        let validator = ContractValidator::default();
        let result = validator.validate(&button_contract(), &SuppliedAttributes::new(), Some("Tabs"));

        assert_eq!(result.count(ValidationErrorKind::InvalidNesting), 1);
        assert_eq!(result.suggestions, vec!["Wrap Button in Tab".to_string()]);
    }

    #[test]
    fn test_parent_without_rule_is_unconstrained() {
        let validator = ContractValidator::default();
        let result = validator.validate(&input_contract(), &SuppliedAttributes::new(), Some("Card"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_non_mandatory_rule_is_informational() {
        let registry = NestingRuleRegistry::builder()
            .with_rule(
                NestingRule::new("Form")
                    .allows(["FormItem"])
                    .forbids(["Input"])
                    .mandatory(false),
            )
            .build();
        let validator = ContractValidator::new(Arc::new(registry));

        let result = validator.validate(&input_contract(), &SuppliedAttributes::new(), Some("Form"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_required_present_never_reports_missing() {
        let validator = ContractValidator::default().with_special_rules(SpecialRules::new(vec![]));
        let catalog = sample_catalog();

        for summary in catalog.list_summaries() {
            let contract = catalog.get_contract(&summary.name).unwrap();
            let supplied: SuppliedAttributes = contract
                .required_attributes()
                .map(|a| (a.name.as_str(), json!("x")))
                .collect();

            let result = validator.validate(contract, &supplied, None);
            assert!(
                !result.has(ValidationErrorKind::MissingRequiredAttribute),
                "{} reported a missing attribute: {:?}",
                contract.name,
                result.errors
            );
        }
    }

    #[test]
    fn test_one_unknown_error_per_unknown_key() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &input_contract(),
            &attrs(json!({"colour": "red", "value": "a", "shape": 1, "tooltip": true})),
            None,
        );

        assert_eq!(result.count(ValidationErrorKind::UnknownAttribute), 3);
        for key in ["colour", "shape", "tooltip"] {
            assert_eq!(
                result
                    .errors_of(ValidationErrorKind::UnknownAttribute)
                    .filter(|e| e.property.as_deref() == Some(key))
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_unknown_attribute_suggests_closest() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &input_contract(),
            &attrs(json!({"placeholdr": "name", "disabeld": true})),
            None,
        );

        assert_eq!(result.count(ValidationErrorKind::UnknownAttribute), 2);
        assert!(result.suggestions.contains(&"Did you mean: placeholder?".to_string()));
        assert!(result.suggestions.contains(&"Did you mean: disabled?".to_string()));
    }

    #[test]
    fn test_binding_markers_skip_unknown_check() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &input_contract(),
            &attrs(json!({
                ":whatever": "expr",
                "@focus": "onFocus",
                "v-if": "visible",
                "v-on:blur": "onBlur",
                "v-bind:value": "name"
            })),
            None,
        );
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn test_bound_key_does_not_satisfy_required_attribute() {
        let validator = ContractValidator::default();
        let result = validator.validate(&spinner_contract(), &attrs(json!({":value": "count"})), None);

        assert_eq!(kinds(&result), vec![ValidationErrorKind::MissingRequiredAttribute]);
        assert_eq!(result.errors[0].property.as_deref(), Some("value"));
        assert_eq!(result.suggestions, vec!["Add attribute: :value=\"0\"".to_string()]);

        let result = validator.validate(
            &spinner_contract(),
            &attrs(json!({":value": "count", "value": 0})),
            None,
        );
        assert!(result.is_valid);
    }

    #[test]
    fn test_type_mismatch() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &spinner_contract(),
            &attrs(json!({"value": "10", "disabled": "yes"})),
            None,
        );

        assert_eq!(result.count(ValidationErrorKind::InvalidAttributeType), 2);
        assert_eq!(
            result.errors[0].message,
            "Attribute value has the wrong type: expected number, got string"
        );
        assert_eq!(
            result.suggestions,
            vec![
                "Fix attribute type: value should be number".to_string(),
                "Fix attribute type: disabled should be boolean".to_string(),
            ]
        );
    }

    #[test]
    fn test_other_declared_types_accept_anything() {
        let validator = ContractValidator::default();
        let catalog = sample_catalog();
        let select = catalog.get_contract("Select").unwrap();

        for value in [json!(1), json!("a"), json!(null), json!({"k": 1})] {
            let result = validator.validate(select, &attrs(json!({ "value": value })), None);
            assert!(result.is_valid);
        }
    }

    #[test]
    fn test_stage_order_is_preserved() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &spinner_contract(),
            &attrs(json!({"max": "100", "foo": 1})),
            Some("Form"),
        );

        assert_eq!(
            kinds(&result),
            vec![
                ValidationErrorKind::MissingRequiredAttribute,
                ValidationErrorKind::UnknownAttribute,
                ValidationErrorKind::InvalidAttributeType,
                ValidationErrorKind::InvalidNesting,
                ValidationErrorKind::InvalidNesting,
            ]
        );
    }

    #[test]
    fn test_table_requires_data_binding() {
        let validator = ContractValidator::default();
        let result = validator.validate(&table_contract(), &SuppliedAttributes::new(), None);

        assert_eq!(
            kinds(&result),
            vec![ValidationErrorKind::MissingRequiredAttribute]
        );
        assert_eq!(result.errors[0].property.as_deref(), Some("data"));
        assert_eq!(result.suggestions, vec!["Bind :data to the table rows".to_string()]);

        let result = validator.validate(&table_contract(), &attrs(json!({":data": "rows"})), None);
        assert!(result.is_valid);
    }

    #[test]
    fn test_form_item_inside_form_requires_value() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &form_item_contract(),
            &attrs(json!({"label": "Age"})),
            Some("Form"),
        );

        assert!(!result.is_valid);
        assert!(result.mentions("value"));
    }

    #[test]
    fn test_deprecated_attribute_is_unknown() {
        let validator = ContractValidator::default();
        let result = validator.validate(
            &table_contract(),
            &attrs(json!({":data": "rows", "scheme": {}})),
            None,
        );

        assert_eq!(kinds(&result), vec![ValidationErrorKind::UnknownAttribute]);
        assert_eq!(result.errors[0].message, "Attribute scheme is deprecated");
    }

    #[test]
    fn test_without_special_rules() {
        let validator = ContractValidator::default().with_special_rules(SpecialRules::new(vec![]));
        let result = validator.validate(&table_contract(), &SuppliedAttributes::new(), None);
        assert!(result.is_valid);
    }

    #[test]
    fn test_missing_suggestion_uses_documented_default() {
        let contract = ComponentContract::new("Pagination")
            .with_attribute(AttributeContract::new("total", "number").required().with_default(json!(100)))
            .with_attribute(AttributeContract::new("label", "string").required());
        let result = ContractValidator::default().validate(&contract, &SuppliedAttributes::new(), None);

        assert_eq!(
            result.suggestions,
            vec![
                "Add attribute: :total=\"100\"".to_string(),
                "Add attribute: :label=\"\"\"\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_similarity_threshold_is_configurable() {
        let strict = ContractValidator::default().with_similarity_threshold(0.95);
        let result = strict.validate(&input_contract(), &attrs(json!({"placeholdr": "x"})), None);
        assert_eq!(
            result.suggestions,
            vec!["Remove unknown attribute: placeholdr".to_string()]
        );
    }
}
