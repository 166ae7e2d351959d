use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::{CatalogSource, Service};
use crate::error::CatalogError;

/// Lazily loaded, read-only view over a [`CatalogSource`].
///
/// The snapshot is published once under the write lock and then shared as an
/// `Arc<[Service]>`; readers only hold the read lock long enough to clone it.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    snapshot: RwLock<Option<Arc<[Service]>>>,
}

impl CatalogStore {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            snapshot: RwLock::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Full catalog in source order. Loads on first call.
    pub fn load_all(&self) -> Result<Arc<[Service]>, CatalogError> {
        // The guarded value is only ever replaced whole, so a poisoned lock is still consistent.
        if let Some(snapshot) = self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(snapshot));
        }

        let mut slot = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let services = self.source.load().inspect_err(|e| {
            tracing::error!(source = %self.source.describe(), error = %e, "services dataset load failed");
        })?;
        warn_duplicate_ids(&services);
        tracing::info!(count = services.len(), "services dataset cached");

        let snapshot: Arc<[Service]> = services.into();
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// First record with the given id, if any.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Service>, CatalogError> {
        let services = self.load_all()?;
        Ok(services.iter().find(|s| s.id == id).cloned())
    }

    /// All records whose owner equals `owner` exactly.
    pub fn get_by_owner(&self, owner: &str) -> Result<Vec<Service>, CatalogError> {
        let services = self.load_all()?;
        Ok(services.iter().filter(|s| s.owner == owner).cloned().collect())
    }
}

fn warn_duplicate_ids(services: &[Service]) {
    let mut seen = HashSet::with_capacity(services.len());
    for s in services {
        if !seen.insert(s.id) {
            tracing::warn!(id = s.id, "duplicate service id in dataset, lookups return the first match");
        }
    }
}
