use ndarray::{Array1, ArrayView1};

/// A trait for differentiable loss functions used during model training.
///
/// Implementors define:
/// - how to compute the scalar loss value (recorded in the loss history),
/// - how to compute the gradient of the loss w.r.t. the model's predictions.
///
/// The gradient is passed to the model's `backward()` to obtain parameter gradients.
pub trait Loss {
    /// Computes the scalar loss value.
    fn loss(&self, prediction: ArrayView1<'_, f64>, target: ArrayView1<'_, f64>) -> f64;

    /// Computes `∂L/∂prediction`.
    fn grad_wrt_prediction(
        &self,
        prediction: ArrayView1<'_, f64>,
        target: ArrayView1<'_, f64>,
    ) -> Array1<f64>;
}

/// Mean Squared Error: `L = (1/n) * Σ(pred_i - target_i)²`
///
/// Gradient w.r.t. prediction: `∂L/∂pred = (2/n) * (pred - target)`.
/// The factor of 2 is kept so that the step size matches the textbook update
/// `w ← w - η·(2/n)·Xᵀ(Xw + b - y)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MSELoss;

impl Loss for MSELoss {
    fn loss(&self, pred: ArrayView1<'_, f64>, target: ArrayView1<'_, f64>) -> f64 {
        let diff = &pred - &target;
        diff.dot(&diff) / diff.len() as f64
    }

    fn grad_wrt_prediction(&self, pred: ArrayView1<'_, f64>, target: ArrayView1<'_, f64>) -> Array1<f64> {
        let scale = 2.0 / pred.len() as f64;
        (&pred - &target) * scale
    }
}
