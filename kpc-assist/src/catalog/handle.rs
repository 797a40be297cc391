//! Once-initialized access to the catalog snapshot.

use std::sync::{Arc, OnceLock};

use super::Catalog;
use crate::errors::{AssistantError, Result};

/// Holds the catalog snapshot once it has been loaded.
///
/// Reads before [`install`](Self::install) fail with
/// [`AssistantError::NotReady`]. After install the snapshot is shared
/// read-only and needs no locking.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    cell: OnceLock<Arc<Catalog>>,
}

impl CatalogHandle {
    /// Creates an empty handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle that is already loaded.
    #[must_use]
    pub fn loaded(catalog: Catalog) -> Self {
        Self {
            cell: OnceLock::from(Arc::new(catalog)),
        }
    }

    /// Installs the snapshot; fails if one is already installed.
    pub fn install(&self, catalog: Catalog) -> Result<Arc<Catalog>> {
        let catalog = Arc::new(catalog);
        self.cell
            .set(Arc::clone(&catalog))
            .map_err(|_| AssistantError::AlreadyLoaded)?;
        Ok(catalog)
    }

    /// Returns the snapshot or [`AssistantError::NotReady`].
    pub fn get(&self) -> Result<&Arc<Catalog>> {
        self.cell.get().ok_or(AssistantError::NotReady)
    }

    /// True once a snapshot is installed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}
