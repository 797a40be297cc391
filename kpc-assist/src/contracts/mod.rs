//! Contract validation for component usages.
//!
//! This module provides:
//! - Classified attribute keys and tagged attribute values
//! - The [`ContractValidator`] pipeline
//! - Component-specific rules layered on top of the attribute contract
//! - [`ValidationResult`] and its findings

mod errors;
mod result;
mod special_rules;
mod validator;
mod values;

#[cfg(test)]
mod validator_tests;

pub use errors::{ValidationError, ValidationErrorKind};
pub use result::ValidationResult;
pub use special_rules::{default_bindings, RequiredBinding, SpecialRules};
pub use validator::ContractValidator;
pub use values::{AttributeKey, AttributeValue, SuppliedAttributes};
