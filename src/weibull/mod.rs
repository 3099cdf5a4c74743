//! Weibull lifetime distribution.
//!
//! [`WeibullDistribution`] evaluates survival, failure probability, hazard
//! rate, median, mean life and B-life from a (shape, scale) pair that has
//! already been adjusted for a scenario's covariates.
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Meeker & Escobar (1998). *Statistical Methods for Reliability Data*.

mod distribution;

pub use distribution::WeibullDistribution;
