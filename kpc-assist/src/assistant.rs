//! The engine facade.
//!
//! [`ComponentAssistant`] ties the catalog, the nesting registry, the
//! validator and search together behind one read-only object. It is built
//! empty and loaded exactly once; every query before that fails with
//! [`AssistantError::NotReady`].

use std::sync::{Arc, OnceLock};

use crate::catalog::{
    Catalog, CatalogHandle, CatalogSource, CatalogStats, ComponentContract, ComponentSummary,
    UsageExample,
};
use crate::config::EngineConfig;
use crate::contracts::{ContractValidator, SuppliedAttributes, ValidationResult};
use crate::errors::{AssistantError, Result};
use crate::nesting::NestingRuleRegistry;
use crate::observability::OperationSpan;
use crate::search::{filter_contracts, search, ComponentFilter, SearchOptions};
use crate::utils::find_closest_with_threshold;

/// Validation and search over a once-loaded component catalog.
#[derive(Debug)]
pub struct ComponentAssistant {
    config: EngineConfig,
    catalog: CatalogHandle,
    validator: OnceLock<ContractValidator>,
}

impl Default for ComponentAssistant {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ComponentAssistant {
    /// Creates an assistant with no catalog loaded.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: CatalogHandle::new(),
            validator: OnceLock::new(),
        }
    }

    /// Creates an assistant and loads `catalog` into it.
    pub fn with_catalog(config: EngineConfig, catalog: Catalog) -> Result<Self> {
        let assistant = Self::new(config);
        assistant.load(catalog)?;
        Ok(assistant)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True once a catalog is loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.catalog.is_ready() && self.validator.get().is_some()
    }

    /// Installs the catalog and builds the validator.
    ///
    /// Nesting is checked against the built-in rule table only; rules the
    /// catalog data declares are kept as documentation. Fails with
    /// [`AssistantError::InvalidConfig`] if the configuration is out of
    /// range and with [`AssistantError::AlreadyLoaded`] on a second call.
    pub fn load(&self, catalog: Catalog) -> Result<()> {
        self.config.validate()?;
        let validator = ContractValidator::new(Arc::new(NestingRuleRegistry::builtin()))
            .with_similarity_threshold(self.config.similarity_threshold);

        let catalog = self.catalog.install(catalog)?;
        self.validator
            .set(validator)
            .map_err(|_| AssistantError::AlreadyLoaded)?;

        tracing::info!(
            components = catalog.len(),
            nesting_rules = self.nesting()?.len(),
            "Component assistant ready"
        );
        Ok(())
    }

    /// Loads the catalog from the configured data directory.
    pub fn load_dir(&self) -> Result<()> {
        self.config.validate()?;
        let dir = self.config.data_dir.as_ref().ok_or_else(|| {
            AssistantError::InvalidConfig("data_dir is not set".to_string())
        })?;
        let catalog = Catalog::load_dir(dir, &self.config)?;
        self.load(catalog)
    }

    /// The loaded catalog snapshot.
    pub fn catalog(&self) -> Result<&Arc<Catalog>> {
        self.catalog.get()
    }

    /// The nesting registry in use.
    pub fn nesting(&self) -> Result<&NestingRuleRegistry> {
        Ok(self.validator()?.nesting())
    }

    fn validator(&self) -> Result<&ContractValidator> {
        self.validator.get().ok_or(AssistantError::NotReady)
    }

    /// Looks up a contract by exact name.
    ///
    /// A miss carries the closest catalog name, if any is similar enough,
    /// and a short sorted list of names to choose from.
    pub fn component(&self, name: &str) -> Result<&ComponentContract> {
        let catalog = self.catalog()?;
        if let Some(contract) = catalog.get_contract(name) {
            return Ok(contract);
        }

        let did_you_mean =
            find_closest_with_threshold(name, catalog.names(), self.config.similarity_threshold)
                .map(str::to_string);
        let mut alternatives: Vec<String> = catalog.names().map(str::to_string).collect();
        alternatives.sort_unstable();
        alternatives.truncate(self.config.max_listed_alternatives);

        tracing::debug!(
            component = name,
            did_you_mean = did_you_mean.as_deref().unwrap_or("-"),
            "Component not found"
        );
        Err(AssistantError::ComponentNotFound {
            name: name.to_string(),
            did_you_mean,
            alternatives,
        })
    }

    /// Usage examples documented for the named component.
    pub fn examples(&self, name: &str) -> Result<&[UsageExample]> {
        Ok(&self.component(name)?.examples)
    }

    /// Validates a usage of the named component.
    pub fn validate_usage(
        &self,
        name: &str,
        attrs: &SuppliedAttributes,
        parent: Option<&str>,
    ) -> Result<ValidationResult> {
        let validator = self.validator()?;
        let contract = self.component(name)?;

        let span = OperationSpan::start("validate", name);
        let result = validator.validate(contract, attrs, parent);
        span.finish(result.errors.len());
        Ok(result)
    }

    /// Validates a usage whose attributes arrive as a JSON object.
    pub fn validate_json(
        &self,
        name: &str,
        attrs: &serde_json::Value,
        parent: Option<&str>,
    ) -> Result<ValidationResult> {
        self.catalog()?;
        let attrs = SuppliedAttributes::from_json(attrs)?;
        self.validate_usage(name, &attrs, parent)
    }

    /// Ranks catalog summaries against a free-text query.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<ComponentSummary>> {
        let catalog = self.catalog()?;
        if query.trim().is_empty() {
            return Err(AssistantError::InvalidQuery(
                "query cannot be empty".to_string(),
            ));
        }

        let span = OperationSpan::start("search", query);
        let results = search(query, catalog.list_summaries(), options);
        span.finish(results.len());
        Ok(results)
    }

    /// Summaries in index order, optionally limited to one category.
    pub fn list(&self, category: Option<&str>) -> Result<Vec<ComponentSummary>> {
        let catalog = self.catalog()?;
        Ok(match category {
            Some(category) => catalog
                .list_by_category(category)
                .into_iter()
                .cloned()
                .collect(),
            None => catalog.list_summaries().to_vec(),
        })
    }

    /// Full contracts matching a structural filter, in load order.
    pub fn filter(&self, filter: &ComponentFilter) -> Result<Vec<&ComponentContract>> {
        let catalog = self.catalog()?;
        Ok(filter_contracts(catalog.contracts(), filter))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Result<Vec<String>> {
        let catalog = self.catalog()?;
        Ok(catalog.categories().into_iter().map(str::to_string).collect())
    }

    /// Aggregate counts over the catalog.
    pub fn stats(&self) -> Result<CatalogStats> {
        Ok(CatalogStats::compute(self.catalog()?))
    }
}
