//! Regression quality metrics.

use crate::error::{RegressionError, Result};
use ndarray::ArrayView1;
use serde::Serialize;

/// Summary of how well predictions match ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionMetrics {
    /// Mean squared error (lower is better).
    pub mse: f64,
    /// Root mean squared error, in target units.
    pub rmse: f64,
    /// Mean absolute error.
    pub mae: f64,
    /// Coefficient of determination (1 is perfect, may be negative).
    pub r2: f64,
}

impl RegressionMetrics {
    /// Computes all metrics for aligned `y_true` / `y_pred`.
    pub fn compute(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(RegressionError::ShapeMismatch {
                context: "metric targets",
                expected: y_true.len(),
                got: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(RegressionError::EmptyData(
                "cannot compute metrics on zero samples".into(),
            ));
        }

        let n = y_true.len() as f64;
        let residuals = &y_true - &y_pred;
        let mse = residuals.dot(&residuals) / n;
        let mae = residuals.mapv(f64::abs).sum() / n;

        Ok(Self {
            mse,
            rmse: mse.sqrt(),
            mae,
            r2: r_squared(y_true, y_pred),
        })
    }
}

/// R² = 1 - SS_res / SS_tot.
///
/// Constant targets give 1.0 when predicted exactly and 0.0 otherwise. Callers
/// guarantee equal, non-zero lengths.
pub(crate) fn r_squared(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    let mean = y_true.sum() / y_true.len() as f64;
    let residuals = &y_true - &y_pred;
    let ss_res = residuals.dot(&residuals);
    let ss_tot: f64 = y_true.iter().map(|&t| (t - mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_metrics_known_values() {
        let y_true = array![3.0, -0.5, 2.0, 7.0];
        let y_pred = array![2.5, 0.0, 2.0, 8.0];

        let m = RegressionMetrics::compute(y_true.view(), y_pred.view()).unwrap();

        assert_abs_diff_eq!(m.mse, 0.375, epsilon = 1e-12);
        assert_abs_diff_eq!(m.rmse, 0.375f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.mae, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(m.r2, 0.948_608_137_044_967_9, epsilon = 1e-12);
    }

    #[test]
    fn test_metrics_perfect_prediction() {
        let y = array![1.0, 2.0, 3.0];

        let m = RegressionMetrics::compute(y.view(), y.view()).unwrap();

        assert_eq!(m.mse, 0.0);
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.r2, 1.0);
    }

    #[test]
    fn test_r_squared_constant_targets() {
        let y_true = array![2.0, 2.0, 2.0];

        assert_eq!(r_squared(y_true.view(), array![2.0, 2.0, 2.0].view()), 1.0);
        assert_eq!(r_squared(y_true.view(), array![1.0, 2.0, 3.0].view()), 0.0);
    }

    #[test]
    fn test_r_squared_mean_predictor_is_zero() {
        let y_true = array![1.0, 2.0, 3.0];

        let r2 = r_squared(y_true.view(), array![2.0, 2.0, 2.0].view());

        assert_abs_diff_eq!(r2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metrics_length_mismatch() {
        let err = RegressionMetrics::compute(array![1.0, 2.0].view(), array![1.0].view())
            .unwrap_err();
        assert!(matches!(err, RegressionError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_metrics_empty() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        let err = RegressionMetrics::compute(empty.view(), empty.view()).unwrap_err();
        assert!(matches!(err, RegressionError::EmptyData(_)));
    }
}
