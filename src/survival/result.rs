//! Evaluation outputs.

use serde::Serialize;

use crate::weibull::WeibullDistribution;

use super::scenario::LocationType;

/// Days per year used for year conversions and labels.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// 1, 2, 3, 5, 7 and 10 years, in days.
pub const DEFAULT_HORIZONS_DAYS: [f64; 6] = [365.0, 730.0, 1095.0, 1825.0, 2555.0, 3650.0];

/// Human label for a horizon: "1 Year", "5 Years", otherwise "<n> days".
///
/// ```
/// use u_survival::survival::horizon_label;
/// assert_eq!(horizon_label(365.0), "1 Year");
/// assert_eq!(horizon_label(3650.0), "10 Years");
/// assert_eq!(horizon_label(100.0), "100 days");
/// ```
pub fn horizon_label(days: f64) -> String {
    let years = days / DAYS_PER_YEAR;
    if days > 0.0 && years.fract() == 0.0 {
        if years == 1.0 {
            "1 Year".to_string()
        } else {
            format!("{years:.0} Years")
        }
    } else {
        format!("{days} days")
    }
}

/// Failure and survival probability at one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonProbability {
    pub horizon: f64,
    pub failure_probability: f64,
    pub survival_probability: f64,
}

/// Result of one (component, scenario) evaluation.
///
/// Owned by the caller; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub component: String,
    /// Decoded Weibull shape.
    pub shape: f64,
    /// Covariate-adjusted Weibull scale.
    pub scale: f64,
    pub median_time_to_failure: f64,
    /// One entry per requested horizon, in request order.
    pub failure_probability: Vec<HorizonProbability>,
}

impl EvaluationResult {
    pub(crate) fn from_distribution(
        component: &str,
        dist: &WeibullDistribution,
        horizons: &[f64],
    ) -> Self {
        let failure_probability = horizons
            .iter()
            .map(|&t| HorizonProbability {
                horizon: t,
                failure_probability: dist.failure_probability(t),
                survival_probability: dist.survival(t),
            })
            .collect();
        Self {
            component: component.to_string(),
            shape: dist.shape(),
            scale: dist.scale(),
            median_time_to_failure: dist.median(),
            failure_probability,
        }
    }

    pub fn median_years(&self) -> f64 {
        self.median_time_to_failure / DAYS_PER_YEAR
    }

    /// Failure probability at `horizon`, if it was requested.
    pub fn failure_at(&self, horizon: f64) -> Option<f64> {
        self.failure_probability
            .iter()
            .find(|h| h.horizon == horizon)
            .map(|h| h.failure_probability)
    }
}

/// One row of a median time-to-failure comparison.
///
/// `median_time_to_failure` is `None` when the stored model is unusable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedianComparisonRow {
    pub component: String,
    pub location: LocationType,
    pub median_time_to_failure: Option<f64>,
}
