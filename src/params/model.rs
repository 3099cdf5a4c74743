//! Typed per-component model parameters and usage standardization.

use std::collections::HashMap;

use u_numflow::stats;

use crate::config::CovariateKeys;

/// One fitted Weibull AFT model for a component type.
///
/// Parameters are on the log scale as emitted by the fitter. The three
/// recognized covariate coefficients are resolved from the raw string-keyed
/// mapping at load time; an absent coefficient means zero effect.
///
/// # Examples
///
/// ```
/// use u_survival::params::ComponentModel;
///
/// let model = ComponentModel::new(0.0, 1000.0_f64.ln()).with_underground_coefficient(0.5);
/// assert_eq!(model.underground_coefficient, Some(0.5));
/// assert!(model.usage_coefficient.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentModel {
    /// ln(shape). `None` when the snapshot had no usable value.
    pub log_shape: Option<f64>,
    /// ln(scale) at the reference scenario.
    pub base_log_scale: Option<f64>,
    /// Effect of one standard deviation of usage on ln(scale).
    pub usage_coefficient: Option<f64>,
    /// Effect of the underground indicator on ln(scale).
    pub underground_coefficient: Option<f64>,
    /// Effect of the unknown-location indicator on ln(scale).
    pub unknown_location_coefficient: Option<f64>,
}

impl ComponentModel {
    /// Model with both base parameters set and no covariate effects.
    pub fn new(log_shape: f64, base_log_scale: f64) -> Self {
        Self {
            log_shape: Some(log_shape),
            base_log_scale: Some(base_log_scale),
            ..Self::default()
        }
    }

    pub fn with_usage_coefficient(mut self, coef: f64) -> Self {
        self.usage_coefficient = Some(coef);
        self
    }

    pub fn with_underground_coefficient(mut self, coef: f64) -> Self {
        self.underground_coefficient = Some(coef);
        self
    }

    pub fn with_unknown_location_coefficient(mut self, coef: f64) -> Self {
        self.unknown_location_coefficient = Some(coef);
        self
    }

    /// Resolves the recognized coefficients out of a raw coefficient map.
    ///
    /// Keys that match none of `keys` are ignored.
    pub fn from_coefficients(
        log_shape: Option<f64>,
        base_log_scale: Option<f64>,
        coefficients: &HashMap<String, f64>,
        keys: &CovariateKeys,
    ) -> Self {
        Self {
            log_shape,
            base_log_scale,
            usage_coefficient: coefficients.get(&keys.usage).copied(),
            underground_coefficient: coefficients.get(&keys.underground).copied(),
            unknown_location_coefficient: coefficients.get(&keys.unknown_location).copied(),
        }
    }
}

/// Population statistics used to standardize raw usage rates.
///
/// When the snapshot carries no usage statistics the store reports
/// `mean = 0`, `std = 1` with `available = false`, and the usage term is
/// never applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardizationStats {
    pub mean: f64,
    pub std: f64,
    /// Whether the statistics came from the snapshot.
    pub available: bool,
}

impl Default for StandardizationStats {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl StandardizationStats {
    pub fn new(mean: f64, std: f64) -> Self {
        Self {
            mean,
            std,
            available: true,
        }
    }

    /// Placeholder used when no usage statistics exist.
    pub fn unavailable() -> Self {
        Self {
            mean: 0.0,
            std: 1.0,
            available: false,
        }
    }

    /// Computes mean and sample standard deviation of raw usage observations.
    ///
    /// Returns `None` for fewer than two observations or any non-finite value.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_survival::params::StandardizationStats;
    ///
    /// let s = StandardizationStats::from_observations(&[100.0, 200.0, 300.0]).unwrap();
    /// assert!((s.mean - 200.0).abs() < 1e-12);
    /// assert!((s.std - 100.0).abs() < 1e-12);
    /// ```
    pub fn from_observations(usage: &[f64]) -> Option<Self> {
        if usage.len() < 2 || usage.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let mean = stats::mean(usage)?;
        let std = stats::std_dev(usage)?;
        Some(Self::new(mean, std))
    }

    /// Standardized value of `usage_rate`, or `None` when the usage term
    /// must be skipped (no statistics, or a std that is not positive).
    pub fn standardize(&self, usage_rate: f64) -> Option<f64> {
        if !self.available || !self.std.is_finite() || self.std <= 0.0 {
            return None;
        }
        Some((usage_rate - self.mean) / self.std)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_coefficient_keys_ignored() {
        let keys = CovariateKeys::default();
        let mut coef = HashMap::new();
        coef.insert(keys.underground.clone(), 0.3);
        coef.insert("Q('Door_Age_std')".to_string(), 9.0);
        let model = ComponentModel::from_coefficients(Some(0.1), Some(6.0), &coef, &keys);
        assert_eq!(model.underground_coefficient, Some(0.3));
        assert_eq!(model.usage_coefficient, None);
        assert_eq!(model.unknown_location_coefficient, None);
    }

    #[test]
    fn standardize_skips_zero_std() {
        let s = StandardizationStats::new(150.0, 0.0);
        assert_eq!(s.standardize(1e6), None);
    }

    #[test]
    fn standardize_skips_negative_or_non_finite_std() {
        for std in [-5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s = StandardizationStats::new(150.0, std);
            assert_eq!(s.standardize(190.0), None, "std = {}", std);
        }
    }

    #[test]
    fn standardize_skips_unavailable() {
        assert_eq!(StandardizationStats::unavailable().standardize(10.0), None);
    }

    #[test]
    fn standardize_at_mean_is_zero() {
        let s = StandardizationStats::new(150.0, 40.0);
        assert_eq!(s.standardize(150.0), Some(0.0));
        assert_eq!(s.standardize(190.0), Some(1.0));
    }

    #[test]
    fn from_observations_rejects_degenerate_input() {
        assert!(StandardizationStats::from_observations(&[]).is_none());
        assert!(StandardizationStats::from_observations(&[5.0]).is_none());
        assert!(StandardizationStats::from_observations(&[5.0, f64::NAN]).is_none());
    }
}
