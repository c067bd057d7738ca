//! Model abstractions with compile-time training state.
//!
//! A model is either [`Unfitted`] (exposes forward/backward passes and mutable
//! parameters through [`TrainableModel`]) or [`Fitted`] (exposes prediction and
//! parameter export through [`InferenceModel`]). The trainer is the only place that
//! moves a model from one state to the other.

pub mod state;
pub use state::{Fitted, Unfitted};

pub mod linear;

use crate::error::Result;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Training-time view of a model.
pub trait TrainableModel {
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    fn forward(&self, input: ArrayView2<'_, f64>) -> Self::Prediction;
    /// Gradients of the loss w.r.t. parameters, given `∂L/∂prediction`.
    fn backward(&self, input: ArrayView2<'_, f64>, grad_output: &Self::Prediction) -> Self::Gradients;
    fn params(&self) -> &Self::Params;
    fn update_params(&mut self, new_params: &Self::Params);
    fn n_features(&self) -> usize;

    fn into_fitted(self) -> Self::Output;
}

/// Arithmetic the optimizer needs on a parameter set.
pub trait ParamOps: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, factor: f64) -> Self;
}

/// Inference-time view of a fitted model.
pub trait InferenceModel {
    /// Plain-data form of the parameters, suitable for serialization.
    type ParamsRepr;

    fn predict(&self, input: ArrayView1<'_, f64>) -> Result<f64>;
    fn predict_batch(&self, input: ArrayView2<'_, f64>) -> Result<Array1<f64>>;
    fn n_features(&self) -> usize;

    fn extract_params(&self) -> Self::ParamsRepr;
    fn from_params(params: Self::ParamsRepr) -> Result<Self>
    where
        Self: Sized;
}
