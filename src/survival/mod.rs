//! Covariate-adjusted Weibull survival evaluation.
//!
//! A component's fitted AFT model is shifted on the log-scale by its
//! covariate effects for a [`Scenario`], then exponentiated into a
//! [`WeibullDistribution`](crate::weibull::WeibullDistribution) from which
//! the median time-to-failure and per-horizon failure probabilities follow.
//!
//! - [`SurvivalCalculator::evaluate`] — median plus probabilities at caller horizons
//! - [`SurvivalCalculator::median_only`] — median alone
//! - [`SurvivalCalculator::median_comparison`] — median table across components
//!
//! # References
//!
//! - Kalbfleisch & Prentice (2002), *The Statistical Analysis of Failure
//!   Time Data*, 2nd ed., Ch. 2 (accelerated failure time models).

mod calculator;
mod result;
mod scenario;

pub use calculator::{adjusted_distribution, adjusted_log_scale, decode_shape, SurvivalCalculator};
pub use result::{
    horizon_label, EvaluationResult, HorizonProbability, MedianComparisonRow, DAYS_PER_YEAR,
    DEFAULT_HORIZONS_DAYS,
};
pub use scenario::{LocationType, Scenario};
