//! Affine regression model `y = X·w + b`.
//!
//! This module implements the linear model with compile-time state tracking:
//! - [`LinearRegression`] = `LinearModel<Unfitted>`: used during training.
//! - [`LinearModel<Fitted>`]: inference-only, serializable predictor.
//!
//! A fitted model is free from training hyperparameters; learning rate, iteration
//! cap and tolerance live in the trainer.
pub use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use crate::error::{RegressionError, Result};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Trainable parameters of a linear model: weights and bias.
///
/// Used by both [`TrainableModel`] and [`InferenceModel`] implementations.
/// Implements [`ParamOps`] so the optimizer can combine parameters with gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearParams {
    pub weights: Array1<f64>,
    pub bias: f64,
}

impl LinearParams {
    /// Zero weights of length `n_features` and zero bias.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features),
            bias: 0.0,
        }
    }
}

/// Serializable representation of linear model parameters.
///
/// Plain `Vec<f64>` so that the stored values are exactly the trained ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl From<&LinearParams> for SerializableLinearParams {
    fn from(params: &LinearParams) -> Self {
        Self {
            weights: params.weights.to_vec(),
            bias: params.bias,
        }
    }
}

impl From<SerializableLinearParams> for LinearParams {
    fn from(value: SerializableLinearParams) -> Self {
        Self {
            weights: Array1::from(value.weights),
            bias: value.bias,
        }
    }
}

impl ParamOps for LinearParams {
    fn add(&self, other: &Self) -> Self {
        Self {
            weights: &self.weights + &other.weights,
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, factor: f64) -> Self {
        Self {
            weights: &self.weights * factor,
            bias: self.bias * factor,
        }
    }
}

/// A linear model with state encoded at the type level.
///
/// - When `S = Unfitted`: implements [`TrainableModel`].
/// - When `S = Fitted`: implements [`InferenceModel`].
///
/// Calling `predict()` on an untrained model is therefore a compile error.
#[derive(Debug, Clone)]
pub struct LinearModel<S> {
    params: LinearParams,
    _state: PhantomData<S>,
}

impl LinearModel<Fitted> {
    /// Creates a fitted linear model from trained parameters.
    pub fn new(params: LinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.params.weights.view()
    }

    pub fn bias(&self) -> f64 {
        self.params.bias
    }

    fn check_features(&self, got: usize) -> Result<()> {
        let expected = self.params.weights.len();
        if got != expected {
            return Err(RegressionError::ShapeMismatch {
                context: "prediction features",
                expected,
                got,
            });
        }
        Ok(())
    }
}

/// Inference for a trained linear model: `y = wᵀx + b`.
impl InferenceModel for LinearModel<Fitted> {
    type ParamsRepr = SerializableLinearParams;

    fn predict(&self, input: ArrayView1<'_, f64>) -> Result<f64> {
        self.check_features(input.len())?;
        Ok(self.params.weights.dot(&input) + self.params.bias)
    }

    fn predict_batch(&self, input: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        self.check_features(input.ncols())?;
        Ok(input.dot(&self.params.weights) + self.params.bias)
    }

    fn n_features(&self) -> usize {
        self.params.weights.len()
    }

    fn extract_params(&self) -> Self::ParamsRepr {
        (&self.params).into()
    }

    fn from_params(params: Self::ParamsRepr) -> Result<Self> {
        Ok(Self::new(params.into()))
    }
}

/// Training interface for linear regression.
///
/// Forward pass: `X·w + b`
/// Backward pass: `∇w = Xᵀ·g`, `∇b = Σg` for upstream gradient `g`.
impl TrainableModel for LinearModel<Unfitted> {
    type Params = LinearParams;
    type Gradients = LinearParams;
    type Prediction = Array1<f64>;
    type Output = LinearModel<Fitted>;

    fn forward(&self, x: ArrayView2<'_, f64>) -> Self::Prediction {
        x.dot(&self.params.weights) + self.params.bias
    }

    fn backward(&self, x: ArrayView2<'_, f64>, grad_output: &Self::Prediction) -> Self::Gradients {
        LinearParams {
            weights: x.t().dot(grad_output),
            bias: grad_output.sum(),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = params.clone();
    }

    fn n_features(&self) -> usize {
        self.params.weights.len()
    }

    fn into_fitted(self) -> LinearModel<Fitted> {
        LinearModel::<Fitted>::new(self.params)
    }
}

/// Alias for an **unfitted** linear regression model.
pub type LinearRegression = LinearModel<Unfitted>;

impl LinearRegression {
    /// Creates a model with zero-initialized weights and bias.
    pub fn new(n_features: usize) -> Self {
        Self {
            params: LinearParams::zeros(n_features),
            _state: PhantomData,
        }
    }

    /// Constructs a model from explicit parameters (e.g. for testing).
    pub fn from_params(params: LinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}
