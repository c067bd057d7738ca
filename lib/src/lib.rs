//! # gd-regression
//!
//! Linear regression trained by fixed-step, full-batch gradient descent on mean
//! squared error, with per-iteration training and validation loss tracking.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: models carry their training state in the type system
//!   (`Unfitted` vs `Fitted`); the [`GradientDescentLinearRegressor`] facade turns the
//!   same distinction into a runtime [`RegressionError::NotFitted`].
//! - **Training/Inference Separation**: a fitted model holds only weights and bias;
//!   learning rate, iteration cap and tolerance live in the trainer.
//! - **No hidden state**: every regressor owns its parameters and loss history; there
//!   are no globals.
//!
//! ## Quick Start
//!
//! ```rust
//! use gd_regression::{GradientDescentConfig, GradientDescentLinearRegressor};
//! use ndarray::array;
//!
//! let train_x = array![[0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [2.0, 1.0]];
//! let train_y = array![2.0, 1.0, 3.0, 4.0];
//! let val_x = array![[0.0, 0.0], [3.0, 2.0]];
//! let val_y = array![0.0, 7.0];
//!
//! let mut regressor =
//!     GradientDescentLinearRegressor::new(GradientDescentConfig::default()).unwrap();
//! let summary = regressor
//!     .fit(train_x.view(), train_y.view(), val_x.view(), val_y.view())
//!     .unwrap();
//!
//! assert_eq!(summary.iterations, regressor.loss_history().len());
//! let predictions = regressor.predict(val_x.view()).unwrap();
//! assert_eq!(predictions.len(), 2);
//! ```
//!
//! ## Module Structure
//!
//! - `regressor`: the [`GradientDescentLinearRegressor`] facade
//! - `trainer`: the iteration loop and early-stopping rule
//! - `model`: linear model with stateful type parameters
//! - `loss`, `optimizer`: MSE objective and fixed-step update
//! - `history`, `metrics`: loss curves and regression scores for reporting
//! - `serialization`: plain-data snapshots for persistence layers

/// Error type shared by every fallible operation.
pub mod error;

/// Hyperparameters and their validation.
pub mod config;

/// Validated in-memory `(X, y)` pairs.
pub mod dataset;

/// Differentiable loss functions for model training.
pub mod loss;

/// Models with compile-time state safety.
pub mod model;

/// Parameter update rules.
pub mod optimizer;

pub mod history;

pub mod metrics;

/// High-level training loop orchestration.
pub mod trainer;

pub mod regressor;

/// Model persistence formats.
pub mod serialization;

pub use config::GradientDescentConfig;
pub use error::{RegressionError, Result};
pub use history::LossHistory;
pub use metrics::RegressionMetrics;
pub use regressor::{FitSummary, GradientDescentLinearRegressor};
pub use serialization::{ModelSnapshot, SerializableParams};
