//! # kpc-assist
//!
//! Contract validation and relevance ranking for the KPC UI component
//! catalog.
//!
//! Given a catalog of component contracts, the engine answers two questions:
//!
//! - **Is this usage valid?** Supplied attributes and the parent context are
//!   checked against the component's declared contract and the nesting
//!   rules of its parent, producing structured findings with remediation
//!   hints.
//! - **Which components match this query?** Catalog summaries are filtered
//!   and ordered by a relevance heuristic over names, descriptions and tags.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kpc_assist::prelude::*;
//!
//! let assistant = ComponentAssistant::new(EngineConfig::new().with_data_dir("data"));
//! assistant.load_dir()?;
//!
//! let result = assistant.validate_json("Spinner", &json!({"value": 10}), Some("Form"))?;
//! for error in &result.errors {
//!     println!("{error}");
//! }
//!
//! let hits = assistant.search("数字", &SearchOptions::new())?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod contracts;
pub mod errors;
pub mod nesting;
pub mod observability;
pub mod search;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assistant::ComponentAssistant;
    pub use crate::catalog::{
        AttributeContract, AttributeType, Catalog, CatalogHandle, CatalogSource, CatalogStats,
        ComponentContract, ComponentSummary, UsageExample,
    };
    pub use crate::config::EngineConfig;
    pub use crate::contracts::{
        AttributeKey, AttributeValue, ContractValidator, SuppliedAttributes, ValidationError,
        ValidationErrorKind, ValidationResult,
    };
    pub use crate::errors::{AssistantError, Result};
    pub use crate::nesting::{NestingRule, NestingRuleRegistry};
    pub use crate::observability::{init_logging, LogFormat, LoggingConfig};
    pub use crate::search::{relevance_score, search, ComponentFilter, SearchOptions};
    pub use crate::utils::{find_closest, similarity};
}
