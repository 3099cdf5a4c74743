//! Weibull lifetime distribution for an already-adjusted (shape, scale) pair.
//!
//! Provides survival, failure probability, hazard rate, median, mean life
//! and B-life for the distribution a component follows in one scenario.

use std::f64::consts::LN_2;

use u_numflow::special;

/// Weibull distribution with shape k > 0 and scale lambda > 0.
///
/// # Mathematical Background
///
/// - Survival: S(t) = exp(-(t/lambda)^k)
/// - Failure probability (CDF): F(t) = 1 - S(t)
/// - Hazard rate: h(t) = (k/lambda) * (t/lambda)^(k-1)
/// - Median: lambda * (ln 2)^(1/k)
/// - Mean life: lambda * Gamma(1 + 1/k)
///
/// # Examples
///
/// ```
/// use u_survival::weibull::WeibullDistribution;
///
/// let d = WeibullDistribution::new(1.0, 1000.0).unwrap();
/// assert!((d.median() - 1000.0 * 2.0_f64.ln()).abs() < 1e-9);
/// assert!((d.failure_probability(1000.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
/// assert_eq!(d.failure_probability(0.0), 0.0);
/// ```
///
/// # Reference
/// Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Wiley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullDistribution {
    shape: f64,
    scale: f64,
}

impl WeibullDistribution {
    /// Creates a distribution from shape and scale.
    ///
    /// # Returns
    /// `None` if either parameter is non-positive or non-finite.
    ///
    /// ```
    /// use u_survival::weibull::WeibullDistribution;
    /// assert!(WeibullDistribution::new(1.5, 800.0).is_some());
    /// assert!(WeibullDistribution::new(0.0, 800.0).is_none());
    /// assert!(WeibullDistribution::new(1.5, f64::INFINITY).is_none());
    /// ```
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if !shape.is_finite() || !scale.is_finite() || shape <= 0.0 || scale <= 0.0 {
            return None;
        }
        Some(Self { shape, scale })
    }

    /// Shape parameter k.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter lambda (characteristic life).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// (t/lambda)^k, the cumulative hazard. Infinite on overflow.
    fn cumulative_hazard(&self, t: f64) -> f64 {
        (t / self.scale).powf(self.shape)
    }

    /// Survival probability S(t). Returns 1.0 for t <= 0.
    pub fn survival(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 1.0;
        }
        let h = self.cumulative_hazard(t);
        if !h.is_finite() {
            return 0.0;
        }
        (-h).exp()
    }

    /// Failure probability F(t) = 1 - S(t).
    ///
    /// Returns 0.0 for t <= 0 and saturates to 1.0 when (t/lambda)^k
    /// overflows, so the result is always in [0, 1].
    ///
    /// ```
    /// use u_survival::weibull::WeibullDistribution;
    /// let d = WeibullDistribution::new(50.0, 1.0).unwrap();
    /// assert_eq!(d.failure_probability(1e300), 1.0);
    /// ```
    pub fn failure_probability(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        let h = self.cumulative_hazard(t);
        if !h.is_finite() {
            return 1.0;
        }
        // 1 - exp(-h) without cancellation for small h
        (-(-h).exp_m1()).clamp(0.0, 1.0)
    }

    /// Hazard rate h(t). Returns 0.0 for t <= 0.
    ///
    /// - k < 1: decreasing (infant mortality)
    /// - k = 1: constant (random failures)
    /// - k > 1: increasing (wear-out)
    pub fn hazard_rate(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        (self.shape / self.scale) * (t / self.scale).powf(self.shape - 1.0)
    }

    /// Median time-to-failure: lambda * (ln 2)^(1/k).
    ///
    /// Underflows to 0.0 when k is below about 5e-4.
    pub fn median(&self) -> f64 {
        self.scale * LN_2.powf(1.0 / self.shape)
    }

    /// Mean time-to-failure: lambda * Gamma(1 + 1/k).
    pub fn mean_life(&self) -> f64 {
        self.scale * special::ln_gamma(1.0 + 1.0 / self.shape).exp()
    }

    /// Time at which survival drops to `p`: lambda * (-ln p)^(1/k).
    ///
    /// # Returns
    /// `None` if `p` is outside (0, 1).
    pub fn time_to_survival(&self, p: f64) -> Option<f64> {
        if !(p > 0.0 && p < 1.0) {
            return None;
        }
        Some(self.scale * (-p.ln()).powf(1.0 / self.shape))
    }

    /// B-life: time by which `fraction_failed` of the population has failed.
    ///
    /// # Returns
    /// `None` if `fraction_failed` is outside (0, 1).
    ///
    /// ```
    /// use u_survival::weibull::WeibullDistribution;
    /// let d = WeibullDistribution::new(2.0, 100.0).unwrap();
    /// let b10 = d.b_life(0.10).unwrap();
    /// let b50 = d.b_life(0.50).unwrap();
    /// assert!(b10 < b50);
    /// assert!((b50 - d.median()).abs() < 1e-9);
    /// ```
    ///
    /// # Reference
    /// Abernethy (2006), *The New Weibull Handbook*, 5th ed., Chapter 2.
    pub fn b_life(&self, fraction_failed: f64) -> Option<f64> {
        if !(fraction_failed > 0.0 && fraction_failed < 1.0) {
            return None;
        }
        self.time_to_survival(1.0 - fraction_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_invalid() {
        assert!(WeibullDistribution::new(0.0, 50.0).is_none());
        assert!(WeibullDistribution::new(-1.0, 50.0).is_none());
        assert!(WeibullDistribution::new(2.0, 0.0).is_none());
        assert!(WeibullDistribution::new(2.0, -1.0).is_none());
        assert!(WeibullDistribution::new(f64::NAN, 50.0).is_none());
        assert!(WeibullDistribution::new(2.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_failure_probability_at_zero() {
        let d = WeibullDistribution::new(2.0, 50.0).expect("valid parameters");
        assert_eq!(d.failure_probability(0.0), 0.0);
        assert_eq!(d.survival(0.0), 1.0);
    }

    #[test]
    fn test_failure_probability_at_scale() {
        // F(lambda) = 1 - exp(-1) for any shape
        for shape in [0.5, 1.0, 2.0, 3.5] {
            let d = WeibullDistribution::new(shape, 50.0).expect("valid parameters");
            let expected = 1.0 - (-1.0_f64).exp();
            assert!(
                (d.failure_probability(50.0) - expected).abs() < 1e-12,
                "shape {}: F(lambda) = {}",
                shape,
                d.failure_probability(50.0)
            );
        }
    }

    #[test]
    fn test_failure_probability_non_decreasing() {
        let d = WeibullDistribution::new(1.7, 900.0).expect("valid parameters");
        let mut prev = 0.0;
        for i in 0..=400 {
            let t = i as f64 * 25.0;
            let p = d.failure_probability(t);
            assert!(p >= prev, "F({}) = {} < {}", t, p, prev);
            prev = p;
        }
    }

    #[test]
    fn test_overflow_saturates() {
        let d = WeibullDistribution::new(40.0, 1e-3).expect("valid parameters");
        let p = d.failure_probability(f64::MAX);
        assert_eq!(p, 1.0);
        assert_eq!(d.survival(f64::MAX), 0.0);
        assert_eq!(d.failure_probability(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_survival_complements_failure() {
        let d = WeibullDistribution::new(1.3, 400.0).expect("valid parameters");
        for t in [1.0, 100.0, 400.0, 2000.0] {
            assert!((d.survival(t) + d.failure_probability(t) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_median_half_failed() {
        for (shape, scale) in [(0.4, 10.0), (1.0, 1000.0), (3.0, 2500.0), (12.0, 7.0)] {
            let d = WeibullDistribution::new(shape, scale).expect("valid parameters");
            let p = d.failure_probability(d.median());
            assert!((p - 0.5).abs() < 1e-12, "F(median) = {} for k={}", p, shape);
        }
    }

    #[test]
    fn test_hazard_rate_exponential() {
        let d = WeibullDistribution::new(1.0, 20.0).expect("valid parameters");
        for t in [5.0, 10.0, 20.0, 50.0] {
            assert!((d.hazard_rate(t) - 0.05).abs() < 1e-12);
        }
        assert_eq!(d.hazard_rate(0.0), 0.0);
    }

    #[test]
    fn test_hazard_rate_wear_out() {
        let d = WeibullDistribution::new(3.0, 50.0).expect("valid parameters");
        assert!(d.hazard_rate(10.0) < d.hazard_rate(20.0));
        assert!(d.hazard_rate(20.0) < d.hazard_rate(30.0));
    }

    #[test]
    fn test_mean_life_exponential() {
        let d = WeibullDistribution::new(1.0, 100.0).expect("valid parameters");
        assert!((d.mean_life() - 100.0).abs() < 1e-8, "mean = {}", d.mean_life());
    }

    #[test]
    fn test_mean_life_rayleigh() {
        let d = WeibullDistribution::new(2.0, 1.0).expect("valid parameters");
        let expected = std::f64::consts::PI.sqrt() / 2.0;
        assert!((d.mean_life() - expected).abs() < 1e-8);
    }

    #[test]
    fn test_time_to_survival_roundtrip() {
        let d = WeibullDistribution::new(2.5, 100.0).expect("valid parameters");
        for p in [0.1, 0.5, 0.9] {
            let t = d.time_to_survival(p).expect("valid p");
            assert!((d.survival(t) - p).abs() < 1e-10);
        }
        assert!(d.time_to_survival(0.0).is_none());
        assert!(d.time_to_survival(1.0).is_none());
        assert!(d.time_to_survival(f64::NAN).is_none());
    }

    #[test]
    fn test_b_life_invalid() {
        let d = WeibullDistribution::new(2.0, 50.0).expect("valid parameters");
        assert!(d.b_life(0.0).is_none());
        assert!(d.b_life(1.0).is_none());
        assert!(d.b_life(-0.1).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn failure_probability_in_unit_interval(
            shape in 0.05_f64..50.0,
            scale in 1e-3_f64..1e6,
            t in 0.0_f64..1e12,
        ) {
            let d = WeibullDistribution::new(shape, scale).expect("valid parameters");
            let p = d.failure_probability(t);
            prop_assert!(p.is_finite());
            prop_assert!((0.0..=1.0).contains(&p), "F({t}) = {p}");
        }

        #[test]
        fn failure_probability_monotonic(
            shape in 0.05_f64..20.0,
            scale in 1.0_f64..1e5,
            a in 0.0_f64..1e6,
            b in 0.0_f64..1e6,
        ) {
            let d = WeibullDistribution::new(shape, scale).expect("valid parameters");
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(d.failure_probability(lo) <= d.failure_probability(hi));
        }

        #[test]
        fn median_is_half(
            shape in 0.1_f64..20.0,
            scale in 1e-2_f64..1e6,
        ) {
            let d = WeibullDistribution::new(shape, scale).expect("valid parameters");
            let p = d.failure_probability(d.median());
            prop_assert!((p - 0.5).abs() < 1e-9, "F(median) = {p}");
        }
    }
}
