//! Hyperparameters for gradient-descent fitting.

use crate::error::{RegressionError, Result};
use serde::{Deserialize, Serialize};

/// Fixed configuration of a [`GradientDescentLinearRegressor`](crate::regressor::GradientDescentLinearRegressor).
///
/// Defaults:
/// - `learning_rate`: 0.01
/// - `max_iterations`: 1000
/// - `tolerance`: 1e-6
/// - `log_every`: 100
///
/// Missing fields take their default when deserialized, so a config file only
/// needs to list what it overrides:
///
/// ```rust
/// use gd_regression::config::GradientDescentConfig;
///
/// let config = GradientDescentConfig::from_json(r#"{ "learning_rate": 0.05 }"#).unwrap();
/// assert_eq!(config.learning_rate, 0.05);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientDescentConfig {
    /// Step size applied to every gradient.
    pub learning_rate: f64,
    /// Hard cap on the number of iterations.
    pub max_iterations: usize,
    /// Early-stop threshold on `|train_loss[i] - train_loss[i-1]|`.
    pub tolerance: f64,
    /// Progress is logged every `log_every` iterations; 0 disables it.
    pub log_every: usize,
}

impl Default for GradientDescentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iterations: 1000,
            tolerance: 1e-6,
            log_every: 100,
        }
    }
}

impl GradientDescentConfig {
    pub fn new(learning_rate: f64, max_iterations: usize, tolerance: f64) -> Self {
        Self {
            learning_rate,
            max_iterations,
            tolerance,
            ..Self::default()
        }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Checks every hyperparameter against its admissible range.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(RegressionError::InvalidParameter(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.max_iterations == 0 {
            return Err(RegressionError::InvalidParameter(
                "max_iterations must be at least 1".into(),
            ));
        }
        // NaN fails this comparison too.
        if !(self.tolerance >= 0.0) {
            return Err(RegressionError::InvalidParameter(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Parses a JSON document and validates the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GradientDescentConfig::default();
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.log_every, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_keeps_default_log_every() {
        let config = GradientDescentConfig::new(0.1, 50, 0.0);
        assert_eq!(config.log_every, 100);
        assert_eq!(config.with_log_every(0).log_every, 0);
    }

    #[test]
    fn test_rejects_non_positive_learning_rate() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = GradientDescentConfig::new(lr, 10, 0.0).validate().unwrap_err();
            assert!(matches!(err, RegressionError::InvalidParameter(_)), "lr = {lr}");
        }
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err = GradientDescentConfig::new(0.01, 0, 0.0).validate().unwrap_err();
        assert!(matches!(err, RegressionError::InvalidParameter(_)));
    }

    #[test]
    fn test_rejects_negative_or_nan_tolerance() {
        assert!(GradientDescentConfig::new(0.01, 10, -1e-3).validate().is_err());
        assert!(GradientDescentConfig::new(0.01, 10, f64::NAN).validate().is_err());
        assert!(GradientDescentConfig::new(0.01, 10, 0.0).validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_document() {
        let config =
            GradientDescentConfig::from_json(r#"{ "max_iterations": 250, "tolerance": 0.0 }"#)
                .unwrap();
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.tolerance, 0.0);
        assert_eq!(config.learning_rate, 0.01);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = GradientDescentConfig::from_json(r#"{ "learning_rate": -1.0 }"#).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidParameter(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = GradientDescentConfig::from_json("{ learning_rate: ").unwrap_err();
        assert!(matches!(err, RegressionError::Serialization(_)));
    }
}
