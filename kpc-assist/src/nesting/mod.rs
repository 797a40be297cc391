//! Parent/child nesting constraints.
//!
//! A [`NestingRule`] describes what a parent component accepts as direct
//! children. Rules live in an immutable [`NestingRuleRegistry`] keyed by
//! parent name and built once through [`NestingRuleRegistryBuilder`].

mod registry;
mod rule;

pub use registry::{builtin_rules, NestingRuleRegistry, NestingRuleRegistryBuilder};
pub use rule::{ChildConstraints, NestingRule};
