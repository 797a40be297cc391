//! The component catalog.
//!
//! This module provides:
//! - The contract data model loaded from the catalog JSON
//! - An immutable [`Catalog`] snapshot with O(1) lookup by name
//! - The [`CatalogSource`] read interface the engine consumes
//! - A once-initialized [`CatalogHandle`] that reports "not ready"
//!   until the catalog has been loaded
//! - Aggregate [`CatalogStats`]

mod handle;
mod model;
mod snapshot;
mod stats;

pub use handle::CatalogHandle;
pub use model::{
    AttributeContract, AttributeType, ComponentContract, ComponentSummary, EventContract,
    ExampleComplexity, ExampleFramework, MethodContract, ParameterContract, SlotContract,
    UsageExample,
};
pub use snapshot::{Catalog, CatalogMetadata, CatalogSource};
pub use stats::CatalogStats;
