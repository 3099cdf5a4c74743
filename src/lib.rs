//! # u-survival
//!
//! Failure probability and median time-to-failure from pre-fit Weibull
//! accelerated-failure-time (AFT) models, adjusted for a scenario's
//! covariates (usage rate and installation location).
//!
//! The crate does no fitting: parameters arrive as an already-fit snapshot
//! and are evaluated as pure functions of the scenario.
//!
//! ## Modules
//!
//! - [`params`] — Typed parameter store, JSON snapshot loader, refreshable registry
//! - [`survival`] — Covariate adjustment, `evaluate`, `median_only`, median tables
//! - [`weibull`] — Weibull distribution metrics (survival, CDF, hazard, median, B-life)
//! - [`config`] — Covariate key names and default horizons (TOML)
//!
//! ## Example
//!
//! ```
//! use u_survival::config::CovariateKeys;
//! use u_survival::params::ParameterStore;
//! use u_survival::survival::{LocationType, Scenario, SurvivalCalculator, DEFAULT_HORIZONS_DAYS};
//!
//! let json = r#"{
//!     "component_models": {
//!         "Door Motor": {
//!             "log_rho": 0.0,
//!             "log_lambda": 6.907755278982137,
//!             "coef": { "Q('Location_Type_EN_Underground')": 0.5 }
//!         }
//!     },
//!     "standardization_stats": { "Station_Daily_Runs": { "mean": 180.0, "std": 40.0 } }
//! }"#;
//! let store = ParameterStore::from_json_str(json, &CovariateKeys::default()).unwrap();
//! let calc = SurvivalCalculator::new(&store);
//!
//! let scenario = Scenario::new(180.0, LocationType::Underground);
//! let result = calc.evaluate("Door Motor", &scenario, &DEFAULT_HORIZONS_DAYS).unwrap();
//! assert!((result.scale - 1648.72).abs() < 0.01);
//! assert_eq!(result.failure_probability.len(), 6);
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod survival;
pub mod weibull;

pub use error::{LoadError, ModelDefect, SurvivalError};
