//! Serde model of the fitted-parameter JSON snapshot.
//!
//! Only the top-level structure is strict. Numeric leaves are read
//! leniently so a single bad field degrades one component instead of
//! failing the whole load.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::config::CovariateKeys;

use super::model::{ComponentModel, StandardizationStats};

/// Parsed snapshot, before key resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSnapshot {
    pub component_models: HashMap<String, RawComponentModel>,
    pub standardization_stats: HashMap<String, RawStats>,
}

/// One component entry as written by the fitter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComponentModel {
    #[serde(default)]
    pub log_rho: Value,
    #[serde(default)]
    pub log_lambda: Value,
    #[serde(default)]
    pub coef: HashMap<String, Value>,
}

/// Mean and standard deviation of one raw covariate column.
///
/// `None` means the field was absent; an explicit `null` is kept as
/// `Some(Value::Null)` so it can be told apart from a missing field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    #[serde(default, deserialize_with = "present")]
    pub mean: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub std: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Absent field: `default`. Present but not a number: `None`.
fn numeric_or_default(value: Option<&Value>, default: f64) -> Option<f64> {
    match value {
        None => Some(default),
        Some(v) => v.as_f64(),
    }
}

impl RawComponentModel {
    /// Resolves this entry against the configured covariate keys.
    ///
    /// A recognized coefficient with a non-numeric value becomes NaN so the
    /// defect surfaces when the term is applied.
    pub fn resolve(&self, component: &str, keys: &CovariateKeys) -> ComponentModel {
        let mut coefficients = HashMap::with_capacity(3);
        for (name, value) in &self.coef {
            let recognized = name == &keys.usage
                || name == &keys.underground
                || name == &keys.unknown_location;
            if !recognized {
                tracing::debug!(component, coefficient = %name, "ignoring unrecognized coefficient");
                continue;
            }
            let v = value.as_f64().unwrap_or(f64::NAN);
            coefficients.insert(name.clone(), v);
        }
        ComponentModel::from_coefficients(
            self.log_rho.as_f64(),
            self.log_lambda.as_f64(),
            &coefficients,
            keys,
        )
    }
}

impl ParameterSnapshot {
    /// Usage standardization for `keys.usage_stats`.
    ///
    /// Absent entry: unavailable. Missing `mean` defaults to 0, missing
    /// `std` to 1. A `mean` or `std` that is present but not a number makes
    /// the statistics unavailable, so the usage term is skipped.
    pub fn usage_stats(&self, keys: &CovariateKeys) -> StandardizationStats {
        let Some(raw) = self.standardization_stats.get(&keys.usage_stats) else {
            return StandardizationStats::unavailable();
        };
        let mean = numeric_or_default(raw.mean.as_ref(), 0.0);
        let std = numeric_or_default(raw.std.as_ref(), 1.0);
        match (mean, std) {
            (Some(mean), Some(std)) => StandardizationStats::new(mean, std),
            _ => {
                tracing::warn!(
                    column = %keys.usage_stats,
                    mean = ?raw.mean,
                    std = ?raw.std,
                    "usage statistics are not numeric; usage term disabled"
                );
                StandardizationStats::unavailable()
            }
        }
    }
}
