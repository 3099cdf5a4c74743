//! Covariate adjustment and evaluation.

use std::f64::consts::LN_2;

use crate::error::{ModelDefect, SurvivalError};
use crate::params::{ComponentModel, ParameterStore, StandardizationStats};
use crate::weibull::WeibullDistribution;

use super::result::{EvaluationResult, MedianComparisonRow};
use super::scenario::{LocationType, Scenario};

/// Decodes the Weibull shape, exp(log_shape).
///
/// A shape so small that (ln 2)^(1/shape) underflows to zero is rejected:
/// its median is not representable as an `f64`.
pub fn decode_shape(model: &ComponentModel) -> Result<f64, ModelDefect> {
    let log_shape = model.log_shape.ok_or(ModelDefect::MissingLogShape)?;
    let shape = log_shape.exp();
    if !shape.is_finite() || shape <= 0.0 || LN_2.powf(1.0 / shape) == 0.0 {
        return Err(ModelDefect::InvalidShape(shape));
    }
    Ok(shape)
}

/// ln(scale) after applying the scenario's covariate terms.
///
/// ```text
/// ln(lambda) = base
///            + b_usage * (usage - mean) / std     if b_usage present and std > 0
///            + b_underground                      if location == Underground
///            + b_unknown                          if location == Unknown
/// ```
///
/// The two location terms are mutually exclusive (one-hot with a single
/// reference level). A scenario without a usage rate sits at the mean.
pub fn adjusted_log_scale(
    model: &ComponentModel,
    stats: &StandardizationStats,
    scenario: &Scenario,
) -> Result<f64, ModelDefect> {
    let mut log_scale = model.base_log_scale.ok_or(ModelDefect::MissingLogScale)?;

    if let (Some(coef), Some(usage)) = (model.usage_coefficient, scenario.usage_rate) {
        if let Some(z) = stats.standardize(usage) {
            log_scale += coef * z;
        }
    }

    match scenario.location {
        LocationType::Underground => {
            if let Some(coef) = model.underground_coefficient {
                log_scale += coef;
            }
        }
        LocationType::Unknown => {
            if let Some(coef) = model.unknown_location_coefficient {
                log_scale += coef;
            }
        }
        LocationType::AboveGround | LocationType::Overall => {}
    }

    Ok(log_scale)
}

/// Distribution a component follows under `scenario`.
pub fn adjusted_distribution(
    model: &ComponentModel,
    stats: &StandardizationStats,
    scenario: &Scenario,
) -> Result<WeibullDistribution, ModelDefect> {
    let shape = decode_shape(model)?;
    let scale = adjusted_log_scale(model, stats, scenario)?.exp();
    WeibullDistribution::new(shape, scale).ok_or(ModelDefect::InvalidScale(scale))
}

fn validate_horizons(horizons: &[f64]) -> Result<(), SurvivalError> {
    match horizons.iter().find(|t| t.is_nan() || **t < 0.0) {
        Some(t) => Err(SurvivalError::InvalidArgument(format!(
            "time horizon must be non-negative, got {t}"
        ))),
        None => Ok(()),
    }
}

/// Evaluates stored component models under caller scenarios.
///
/// Stateless apart from the borrowed store, so one calculator (or many)
/// can serve concurrent callers.
///
/// # Examples
///
/// ```
/// use u_survival::params::{ComponentModel, ParameterStore, StandardizationStats};
/// use u_survival::survival::{LocationType, Scenario, SurvivalCalculator};
///
/// let store = ParameterStore::new(StandardizationStats::new(200.0, 50.0))
///     .with_component("Door Motor", ComponentModel::new(0.0, 1000.0_f64.ln()));
/// let calc = SurvivalCalculator::new(&store);
///
/// let scenario = Scenario::new(200.0, LocationType::Overall);
/// let result = calc.evaluate("Door Motor", &scenario, &[1000.0]).unwrap();
/// assert!((result.median_time_to_failure - 693.147).abs() < 1e-3);
/// assert!((result.failure_probability[0].failure_probability - 0.6321).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SurvivalCalculator<'a> {
    store: &'a ParameterStore,
}

impl<'a> SurvivalCalculator<'a> {
    pub fn new(store: &'a ParameterStore) -> Self {
        Self { store }
    }

    /// Adjusted distribution for `component` under `scenario`.
    pub fn distribution(
        &self,
        component: &str,
        scenario: &Scenario,
    ) -> Result<WeibullDistribution, SurvivalError> {
        scenario.validate()?;
        let model = self.store.get(component)?;
        adjusted_distribution(model, &self.store.standardization(), scenario).map_err(|reason| {
            tracing::warn!(component, %reason, "stored model cannot be evaluated");
            SurvivalError::invalid_model(component, reason)
        })
    }

    /// Median time-to-failure and failure probability at each horizon.
    ///
    /// Horizons are returned in the order given. Any negative horizon fails
    /// the whole call with `InvalidArgument`.
    pub fn evaluate(
        &self,
        component: &str,
        scenario: &Scenario,
        horizons: &[f64],
    ) -> Result<EvaluationResult, SurvivalError> {
        validate_horizons(horizons)?;
        let dist = self.distribution(component, scenario)?;
        tracing::debug!(
            component,
            location = %scenario.location,
            usage = ?scenario.usage_rate,
            shape = dist.shape(),
            scale = dist.scale(),
            "evaluated survival model"
        );
        Ok(EvaluationResult::from_distribution(component, &dist, horizons))
    }

    /// Median time-to-failure only.
    pub fn median_only(&self, component: &str, scenario: &Scenario) -> Result<f64, SurvivalError> {
        Ok(self.distribution(component, scenario)?.median())
    }

    /// Median time-to-failure for every stored component at each location.
    ///
    /// Rows are ordered by component, then by `locations`. Unusable models
    /// yield a row with no median rather than an error.
    pub fn median_comparison(
        &self,
        locations: &[LocationType],
        usage_rate: Option<f64>,
    ) -> Result<Vec<MedianComparisonRow>, SurvivalError> {
        Scenario {
            usage_rate,
            location: LocationType::Overall,
        }
        .validate()?;
        let mut rows = Vec::with_capacity(self.store.len() * locations.len());
        for component in self.store.components() {
            for &location in locations {
                let scenario = Scenario {
                    usage_rate,
                    location,
                };
                let median = match self.median_only(component, &scenario) {
                    Ok(m) => Some(m),
                    Err(SurvivalError::InvalidModel { .. }) => None,
                    Err(e) => return Err(e),
                };
                rows.push(MedianComparisonRow {
                    component: component.to_string(),
                    location,
                    median_time_to_failure: median,
                });
            }
        }
        Ok(rows)
    }
}
