use crate::model::ParamOps;

/// Trait for gradient-based optimizers.
///
/// Optimizers only update parameters from gradients; the iteration loop, loss
/// bookkeeping and stopping rule live in the [`Trainer`](crate::trainer::Trainer).
///
/// # Example
/// ```rust
/// use gd_regression::model::linear::LinearParams;
/// use gd_regression::optimizer::{GradientDescent, Optimizer};
/// use ndarray::array;
///
/// let params = LinearParams { weights: array![1.0, 2.0], bias: 0.5 };
/// let grads = LinearParams { weights: array![2.0, -2.0], bias: 1.0 };
///
/// let updated = GradientDescent::new(0.5).step(&params, &grads);
/// assert_eq!(updated.weights, array![0.0, 3.0]);
/// assert_eq!(updated.bias, 0.0);
/// ```
pub trait Optimizer<P> {
    /// Returns `params - learning_rate * gradients` (or a variant thereof).
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Fixed-step gradient descent: `θ ← θ - η·∇L(θ)`.
///
/// Stateless (no momentum, no schedule).
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    lr: f64,
}

impl GradientDescent {
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr
    }
}

impl<P: ParamOps> Optimizer<P> for GradientDescent {
    fn step(&self, params: &P, grads: &P) -> P {
        params.add(&grads.scale(-self.lr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::linear::LinearParams;
    use ndarray::array;

    #[test]
    fn test_gradient_descent_new() {
        assert_eq!(GradientDescent::new(0.01).learning_rate(), 0.01);
    }

    #[test]
    fn test_gradient_descent_step() {
        let params = LinearParams {
            weights: array![1.0, 2.0, 3.0],
            bias: 0.5,
        };
        let grads = LinearParams {
            weights: array![1.0, -2.0, 0.0],
            bias: -1.0,
        };

        let updated = GradientDescent::new(0.5).step(&params, &grads);

        assert_eq!(updated.weights, array![0.5, 3.0, 3.0]);
        assert_eq!(updated.bias, 1.0);
    }

    #[test]
    fn test_gradient_descent_zero_gradient_is_fixed_point() {
        let params = LinearParams {
            weights: array![0.3, -0.7],
            bias: 2.0,
        };
        let grads = LinearParams::zeros(2);

        let updated = GradientDescent::new(0.1).step(&params, &grads);

        assert_eq!(updated, params);
    }

    #[test]
    fn test_gradient_descent_does_not_mutate_inputs() {
        let params = LinearParams {
            weights: array![1.0],
            bias: 1.0,
        };
        let grads = LinearParams {
            weights: array![1.0],
            bias: 1.0,
        };
        let original = params.clone();

        let _ = GradientDescent::new(0.1).step(&params, &grads);

        assert_eq!(params, original);
    }
}
