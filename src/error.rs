//! Error kinds.
//!
//! [`SurvivalError`] is what callers of the calculator see. It keeps a
//! missing model ([`SurvivalError::NotFound`]) apart from a model that exists
//! but cannot produce a distribution ([`SurvivalError::InvalidModel`]), and
//! both apart from caller contract violations
//! ([`SurvivalError::InvalidArgument`]).
//!
//! [`LoadError`] covers the load boundary (parameter snapshot and config
//! files) and is fatal for whoever performs the load.

use thiserror::Error;

/// Why a stored component model cannot produce a distribution.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelDefect {
    /// `log_rho` absent or non-numeric in the snapshot.
    #[error("log-shape parameter is missing")]
    MissingLogShape,

    /// `log_lambda` absent or non-numeric in the snapshot.
    #[error("log-scale parameter is missing")]
    MissingLogScale,

    /// `exp(log_shape)` is not a positive finite number, or is too small
    /// for its median to be representable.
    #[error("decoded shape {0} is not usable")]
    InvalidShape(f64),

    /// The covariate-adjusted scale is not a positive finite number.
    #[error("adjusted scale {0} is not positive and finite")]
    InvalidScale(f64),
}

/// Errors surfaced by [`crate::survival::SurvivalCalculator`] and
/// [`crate::params::ParameterStore`] lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurvivalError {
    #[error("no fitted model for component `{component}`")]
    NotFound { component: String },

    #[error("model for component `{component}` is unusable: {reason}")]
    InvalidModel {
        component: String,
        reason: ModelDefect,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SurvivalError {
    pub(crate) fn not_found(component: &str) -> Self {
        Self::NotFound {
            component: component.to_string(),
        }
    }

    pub(crate) fn invalid_model(component: &str, reason: ModelDefect) -> Self {
        Self::InvalidModel {
            component: component.to_string(),
            reason,
        }
    }
}

/// Load-time failures for parameter snapshots and configuration files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed parameter snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
