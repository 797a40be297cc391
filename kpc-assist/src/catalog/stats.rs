//! Aggregate catalog statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Catalog;

/// Counts across every contract in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of components.
    pub total_components: usize,
    /// Number of declared attributes.
    pub total_attributes: usize,
    /// Number of declared events.
    pub total_events: usize,
    /// Number of declared methods.
    pub total_methods: usize,
    /// Number of declared slots.
    pub total_slots: usize,
    /// Number of usage examples.
    pub total_examples: usize,
    /// Components per category.
    pub categories: BTreeMap<String, usize>,
}

impl CatalogStats {
    /// Computes statistics for a catalog.
    #[must_use]
    pub fn compute(catalog: &Catalog) -> Self {
        let mut stats = Self::default();
        for contract in catalog.contracts() {
            stats.total_components += 1;
            stats.total_attributes += contract.attributes.len();
            stats.total_events += contract.events.len();
            stats.total_methods += contract.methods.len();
            stats.total_slots += contract.slots.len();
            stats.total_examples += contract.examples.len();
            *stats.categories.entry(contract.category.clone()).or_default() += 1;
        }
        stats
    }
}
