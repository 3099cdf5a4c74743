//! Read-only parameter store.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::CovariateKeys;
use crate::error::{LoadError, SurvivalError};

use super::model::{ComponentModel, StandardizationStats};
use super::snapshot::ParameterSnapshot;

/// Fitted models for every known component plus global usage statistics.
///
/// Immutable once built; share it by reference or behind an `Arc`.
///
/// # Examples
///
/// ```
/// use u_survival::params::{ComponentModel, ParameterStore, StandardizationStats};
/// use u_survival::SurvivalError;
///
/// let store = ParameterStore::new(StandardizationStats::new(180.0, 45.0))
///     .with_component("Door Motor", ComponentModel::new(0.2, 7.4));
///
/// assert!(store.get("Door Motor").is_ok());
/// assert!(matches!(store.get("Lintel"), Err(SurvivalError::NotFound { .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    models: BTreeMap<String, ComponentModel>,
    standardization: StandardizationStats,
}

impl ParameterStore {
    /// Empty store with the given usage statistics.
    pub fn new(standardization: StandardizationStats) -> Self {
        Self {
            models: BTreeMap::new(),
            standardization,
        }
    }

    /// Adds (or replaces) a component model while building the store.
    pub fn with_component(mut self, key: impl Into<String>, model: ComponentModel) -> Self {
        self.models.insert(key.into(), model);
        self
    }

    /// Builds a store from a parsed snapshot, resolving covariate keys.
    pub fn from_snapshot(snapshot: &ParameterSnapshot, keys: &CovariateKeys) -> Self {
        let models = snapshot
            .component_models
            .iter()
            .map(|(name, raw)| (name.clone(), raw.resolve(name, keys)))
            .collect();
        Self {
            models,
            standardization: snapshot.usage_stats(keys),
        }
    }

    /// Parses a JSON snapshot.
    ///
    /// Fails only when the document is not JSON or lacks
    /// `component_models` / `standardization_stats`.
    pub fn from_json_str(json: &str, keys: &CovariateKeys) -> Result<Self, LoadError> {
        let snapshot: ParameterSnapshot = serde_json::from_str(json)?;
        let store = Self::from_snapshot(&snapshot, keys);
        tracing::info!(
            components = store.len(),
            usage_stats = store.standardization.available,
            "loaded parameter snapshot"
        );
        Ok(store)
    }

    /// Reads and parses a JSON snapshot file.
    pub fn from_json_file(path: impl AsRef<Path>, keys: &CovariateKeys) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text, keys)
    }

    /// Looks up a component model.
    pub fn get(&self, component: &str) -> Result<&ComponentModel, SurvivalError> {
        self.models
            .get(component)
            .ok_or_else(|| SurvivalError::not_found(component))
    }

    /// Usage standardization statistics.
    pub fn standardization(&self) -> StandardizationStats {
        self.standardization
    }

    /// Component keys in sorted order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "component_models": {
            "Door Motor": { "log_rho": 0.1, "log_lambda": 7.0, "coef": {} },
            "Controller": { "log_rho": -0.2, "log_lambda": 8.0 }
        },
        "standardization_stats": {
            "Station_Daily_Runs": { "mean": 200.0, "std": 50.0 }
        }
    }"#;

    #[test]
    fn loads_snapshot() {
        let store = ParameterStore::from_json_str(SNAPSHOT, &CovariateKeys::default())
            .expect("valid snapshot");
        assert_eq!(store.len(), 2);
        assert_eq!(store.components().collect::<Vec<_>>(), vec!["Controller", "Door Motor"]);
        assert_eq!(store.standardization(), StandardizationStats::new(200.0, 50.0));
        let model = store.get("Controller").expect("present");
        assert_eq!(model.log_shape, Some(-0.2));
    }

    #[test]
    fn unknown_component_is_not_found() {
        let store = ParameterStore::from_json_str(SNAPSHOT, &CovariateKeys::default())
            .expect("valid snapshot");
        let err = store.get("Glass Panel").expect_err("absent");
        assert_eq!(
            err,
            SurvivalError::NotFound {
                component: "Glass Panel".to_string()
            }
        );
    }

    #[test]
    fn missing_sections_fail_load() {
        let err = ParameterStore::from_json_str(r#"{"standardization_stats": {}}"#, &CovariateKeys::default())
            .expect_err("no component_models");
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn not_json_fails_load() {
        let err = ParameterStore::from_json_str("component_models", &CovariateKeys::default())
            .expect_err("not json");
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ParameterStore::from_json_file("/nonexistent/params.json", &CovariateKeys::default())
            .expect_err("no file");
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParameterStore>();
    }
}
