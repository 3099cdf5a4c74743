//! Refreshable holder for the current parameter store.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::CovariateKeys;
use crate::error::LoadError;

use super::store::ParameterStore;

/// Owns the active [`ParameterStore`] and lets it be swapped atomically.
///
/// Constructed once at startup and handed to whoever needs it. Readers take
/// an `Arc` snapshot via [`current`](Self::current) and keep evaluating
/// against it even if a refresh happens meanwhile.
///
/// # Examples
///
/// ```
/// use u_survival::params::{ComponentModel, ParameterRegistry, ParameterStore, StandardizationStats};
///
/// let registry = ParameterRegistry::new(ParameterStore::default());
/// let before = registry.current();
///
/// let next = ParameterStore::new(StandardizationStats::new(10.0, 2.0))
///     .with_component("Door Motor", ComponentModel::new(0.0, 6.9));
/// registry.replace(next);
///
/// assert!(before.is_empty());
/// assert_eq!(registry.current().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ParameterRegistry {
    current: RwLock<Arc<ParameterStore>>,
}

impl ParameterRegistry {
    pub fn new(store: ParameterStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    /// The store in effect right now.
    pub fn current(&self) -> Arc<ParameterStore> {
        Arc::clone(&self.current.read())
    }

    /// Installs `store`, returning the one it replaced.
    pub fn replace(&self, store: ParameterStore) -> Arc<ParameterStore> {
        let next = Arc::new(store);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        tracing::info!(
            previous = previous.len(),
            current = self.current.read().len(),
            "parameter store replaced"
        );
        previous
    }

    /// Reloads from a JSON snapshot file. On failure the current store stays.
    pub fn reload_json_file(
        &self,
        path: impl AsRef<Path>,
        keys: &CovariateKeys,
    ) -> Result<Arc<ParameterStore>, LoadError> {
        let store = ParameterStore::from_json_file(path, keys)?;
        Ok(self.replace(store))
    }
}
