//! Immutable catalog snapshot and JSON loading.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::{ComponentContract, ComponentSummary};
use crate::config::EngineConfig;
use crate::errors::Result;

/// Read interface the engine needs from a catalog.
pub trait CatalogSource {
    /// Looks up a contract by exact name.
    fn get_contract(&self, name: &str) -> Option<&ComponentContract>;

    /// All summaries, in stable enumeration order.
    fn list_summaries(&self) -> &[ComponentSummary];

    /// Summaries whose category equals `category` exactly.
    fn list_by_category(&self, category: &str) -> Vec<&ComponentSummary> {
        self.list_summaries()
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Distinct categories in first-seen order.
    fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for summary in self.list_summaries() {
            let category = summary.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

/// Version information carried by the catalog files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogMetadata {
    /// Data version string.
    pub version: String,
    /// When the data was generated, if parseable.
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApiData {
    #[serde(default)]
    version: String,
    #[serde(default)]
    generated_at: Option<String>,
    #[serde(default)]
    components: BTreeMap<String, ComponentContract>,
}

#[derive(Debug, Deserialize)]
struct RawIndex {
    #[serde(default)]
    components: Vec<ComponentSummary>,
}

/// An immutable snapshot of the component catalog.
///
/// Updating the catalog means building a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    metadata: CatalogMetadata,
    contracts: HashMap<String, ComponentContract>,
    order: Vec<String>,
    summaries: Vec<ComponentSummary>,
}

impl Catalog {
    /// Builds a catalog from contracts; summaries follow the given order.
    ///
    /// A later contract with the same name replaces the earlier one in place.
    #[must_use]
    pub fn new(contracts: impl IntoIterator<Item = ComponentContract>) -> Self {
        let mut catalog = Self::default();
        for contract in contracts {
            catalog.insert(contract);
        }
        catalog.summaries = catalog.derive_summaries();
        catalog
    }

    /// Parses the full data file and, optionally, the summary index.
    ///
    /// Without an index the summaries are derived from the contracts,
    /// sorted by name.
    pub fn from_json(full: &str, index: Option<&str>) -> Result<Self> {
        let raw: RawApiData = serde_json::from_str(full)?;

        let mut catalog = Self {
            metadata: CatalogMetadata {
                version: raw.version,
                generated_at: raw.generated_at.as_deref().and_then(parse_generated_at),
            },
            ..Self::default()
        };
        for (key, mut contract) in raw.components {
            if contract.name.is_empty() {
                contract.name = key;
            }
            catalog.insert(contract);
        }

        catalog.summaries = match index {
            Some(index) => serde_json::from_str::<RawIndex>(index)?.components,
            None => catalog.derive_summaries(),
        };
        Ok(catalog)
    }

    /// Loads the catalog files from the configured data directory.
    ///
    /// A missing index is tolerated; a missing full-data file is an error.
    pub fn load_dir(dir: impl AsRef<Path>, config: &EngineConfig) -> Result<Self> {
        let dir = dir.as_ref();
        let full = std::fs::read_to_string(dir.join(&config.full_data_file))?;

        let index = match std::fs::read_to_string(dir.join(&config.index_file)) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    index_file = %config.index_file,
                    "Index file missing, deriving summaries from contracts"
                );
                None
            }
            Err(e) => return Err(e.into()),
        };

        let catalog = Self::from_json(&full, index.as_deref())?;
        tracing::info!(
            components = catalog.len(),
            summaries = catalog.summaries.len(),
            version = %catalog.metadata.version,
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Replaces the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: CatalogMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Version information.
    #[must_use]
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Contracts in load order.
    pub fn contracts(&self) -> impl Iterator<Item = &ComponentContract> {
        self.order.iter().filter_map(|name| self.contracts.get(name))
    }

    /// Contract names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the number of contracts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Returns true if the catalog has no contracts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    fn insert(&mut self, contract: ComponentContract) {
        if !self.contracts.contains_key(&contract.name) {
            self.order.push(contract.name.clone());
        }
        self.contracts.insert(contract.name.clone(), contract);
    }

    fn derive_summaries(&self) -> Vec<ComponentSummary> {
        self.contracts().map(ComponentContract::summary).collect()
    }
}

impl CatalogSource for Catalog {
    fn get_contract(&self, name: &str) -> Option<&ComponentContract> {
        self.contracts.get(name)
    }

    fn list_summaries(&self) -> &[ComponentSummary] {
        &self.summaries
    }
}

fn parse_generated_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
