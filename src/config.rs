//! Calculator configuration.
//!
//! Covariate key names are whatever the upstream fitting step emitted, so
//! they are configuration rather than constants baked into the calculator.
//! Every field has a default, so an empty TOML file is a valid config.
//!
//! ```toml
//! [covariates]
//! usage = "Q('Station_Daily_Runs_std')"
//! underground = "Q('Location_Type_EN_Underground')"
//! unknown_location = "Q('Location_Type_EN_Unknown')"
//! usage_stats = "Station_Daily_Runs"
//!
//! [horizons]
//! days = [365, 730, 1095, 1825, 2555, 3650]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::survival::DEFAULT_HORIZONS_DAYS;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurvivalConfig {
    #[serde(default)]
    pub covariates: CovariateKeys,

    #[serde(default)]
    pub horizons: HorizonConfig,
}

/// Coefficient key strings as produced by the model-fitting step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CovariateKeys {
    /// Coefficient of the standardized usage rate.
    #[serde(default = "default_usage_key")]
    pub usage: String,

    /// Coefficient of the underground location indicator.
    #[serde(default = "default_underground_key")]
    pub underground: String,

    /// Coefficient of the unknown location indicator.
    #[serde(default = "default_unknown_location_key")]
    pub unknown_location: String,

    /// Entry in `standardization_stats` holding the usage mean and std.
    #[serde(default = "default_usage_stats_key")]
    pub usage_stats: String,
}

impl Default for CovariateKeys {
    fn default() -> Self {
        Self {
            usage: default_usage_key(),
            underground: default_underground_key(),
            unknown_location: default_unknown_location_key(),
            usage_stats: default_usage_stats_key(),
        }
    }
}

fn default_usage_key() -> String {
    "Q('Station_Daily_Runs_std')".to_string()
}

fn default_underground_key() -> String {
    "Q('Location_Type_EN_Underground')".to_string()
}

fn default_unknown_location_key() -> String {
    "Q('Location_Type_EN_Unknown')".to_string()
}

fn default_usage_stats_key() -> String {
    "Station_Daily_Runs".to_string()
}

/// Horizons evaluated when the caller does not supply its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonConfig {
    #[serde(default = "default_horizon_days")]
    pub days: Vec<f64>,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            days: default_horizon_days(),
        }
    }
}

fn default_horizon_days() -> Vec<f64> {
    DEFAULT_HORIZONS_DAYS.to_vec()
}

impl SurvivalConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, LoadError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded survival config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), LoadError> {
        if let Some(bad) = self
            .horizons
            .days
            .iter()
            .find(|d| !d.is_finite() || **d < 0.0)
        {
            return Err(LoadError::Invalid(format!(
                "horizon {bad} must be a finite non-negative number of days"
            )));
        }
        let keys = [
            &self.covariates.usage,
            &self.covariates.underground,
            &self.covariates.unknown_location,
            &self.covariates.usage_stats,
        ];
        if keys.iter().any(|k| k.trim().is_empty()) {
            return Err(LoadError::Invalid(
                "covariate key names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
