//! The user-facing regressor: configuration in, fitted affine map and loss curves out.

use crate::{
    config::GradientDescentConfig,
    dataset::{DatasetView, InMemoryDataset},
    error::{RegressionError, Result},
    history::LossHistory,
    loss::MSELoss,
    metrics::RegressionMetrics,
    model::linear::{LinearModel, LinearParams, LinearRegression},
    model::{Fitted, InferenceModel},
    optimizer::GradientDescent,
    serialization::ModelSnapshot,
    trainer::Trainer,
};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::Serialize;

/// Linear regression trained by full-batch gradient descent on mean squared error.
///
/// Owns its configuration, the learned weights/bias (once fitted) and the loss
/// history of the most recent `fit`.
///
/// # Example
///
/// ```rust
/// use gd_regression::{GradientDescentConfig, GradientDescentLinearRegressor};
/// use ndarray::array;
///
/// // y = 3x - 1
/// let x = array![[-1.0], [0.0], [1.0], [2.0]];
/// let y = array![-4.0, -1.0, 2.0, 5.0];
///
/// let config = GradientDescentConfig::new(0.1, 2000, 0.0);
/// let mut regressor = GradientDescentLinearRegressor::new(config).unwrap();
/// regressor.fit(x.view(), y.view(), x.view(), y.view()).unwrap();
///
/// let pred = regressor.predict(array![[3.0]].view()).unwrap();
/// assert!((pred[0] - 8.0).abs() < 1e-2);
/// ```
#[derive(Debug, Clone)]
pub struct GradientDescentLinearRegressor {
    config: GradientDescentConfig,
    model: Option<LinearModel<Fitted>>,
    history: LossHistory,
}

/// Outcome of one `fit` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitSummary {
    /// Completed iterations (equals the loss history length).
    pub iterations: usize,
    /// `true` if the tolerance rule stopped the run early.
    pub converged: bool,
    pub final_train_loss: f64,
    pub final_validation_loss: f64,
}

impl GradientDescentLinearRegressor {
    /// Creates an unfitted regressor after validating `config`.
    pub fn new(config: GradientDescentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            model: None,
            history: LossHistory::new(),
        })
    }

    /// Fits weights and bias on the training set, recording training and
    /// validation loss for every iteration.
    ///
    /// Each call starts from zero weights and a fresh loss history. On error the
    /// previous state is left untouched.
    ///
    /// # Errors
    /// - [`RegressionError::ShapeMismatch`] if feature counts differ between the two
    ///   sets, or a target vector's length differs from its matrix's row count.
    /// - [`RegressionError::EmptyData`] if either set has no rows.
    pub fn fit<'a, 'b>(
        &mut self,
        train_x: ArrayView2<'a, f64>,
        train_y: ArrayView1<'a, f64>,
        val_x: ArrayView2<'b, f64>,
        val_y: ArrayView1<'b, f64>,
    ) -> Result<FitSummary> {
        if val_x.ncols() != train_x.ncols() {
            return Err(RegressionError::ShapeMismatch {
                context: "validation features",
                expected: train_x.ncols(),
                got: val_x.ncols(),
            });
        }
        let train = DatasetView::new(train_x, train_y)?;
        let validation = DatasetView::new(val_x, val_y)?;
        self.fit_view(train, validation)
    }

    /// Same as [`fit`](Self::fit) for already-validated owned datasets.
    pub fn fit_dataset(
        &mut self,
        train: &InMemoryDataset,
        validation: &InMemoryDataset,
    ) -> Result<FitSummary> {
        self.fit_view(train.view(), validation.view())
    }

    /// Same as [`fit`](Self::fit) for already-validated borrowed datasets.
    pub fn fit_view(
        &mut self,
        train: DatasetView<'_>,
        validation: DatasetView<'_>,
    ) -> Result<FitSummary> {
        let trainer: Trainer<_, _, LinearRegression> =
            Trainer::builder(MSELoss, GradientDescent::new(self.config.learning_rate))
                .max_iterations(self.config.max_iterations)
                .tolerance(self.config.tolerance)
                .log_every(self.config.log_every)
                .build();

        log::info!(
            "fitting with learning rate {}, tolerance {:e}",
            self.config.learning_rate,
            self.config.tolerance
        );
        let outcome = trainer.fit(
            LinearRegression::new(train.n_features()),
            train,
            validation,
        )?;

        // max_iterations >= 1 is enforced by the config, so at least one entry exists.
        let (final_train_loss, final_validation_loss) =
            outcome.history.last().unwrap_or((f64::NAN, f64::NAN));
        let summary = FitSummary {
            iterations: outcome.history.len(),
            converged: outcome.converged,
            final_train_loss,
            final_validation_loss,
        };

        self.model = Some(outcome.model);
        self.history = outcome.history;
        Ok(summary)
    }

    fn fitted(&self) -> Result<&LinearModel<Fitted>> {
        self.model.as_ref().ok_or(RegressionError::NotFitted)
    }

    /// Applies `X·w + b` row-wise.
    ///
    /// # Errors
    /// [`RegressionError::NotFitted`] before the first successful `fit`;
    /// [`RegressionError::ShapeMismatch`] if `x` has the wrong column count.
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        self.fitted()?.predict_batch(x)
    }

    /// Prediction for a single feature row.
    pub fn predict_one(&self, row: ArrayView1<'_, f64>) -> Result<f64> {
        self.fitted()?.predict(row)
    }

    /// Predicts on `x` and scores the result against `y`.
    pub fn evaluate(
        &self,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
    ) -> Result<RegressionMetrics> {
        let predictions = self.predict(x)?;
        RegressionMetrics::compute(y, predictions.view())
    }

    pub fn config(&self) -> &GradientDescentConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Learned weights, `None` until fitted.
    pub fn weights(&self) -> Option<ArrayView1<'_, f64>> {
        self.model.as_ref().map(|m| m.weights())
    }

    /// Learned bias, `None` until fitted.
    pub fn bias(&self) -> Option<f64> {
        self.model.as_ref().map(|m| m.bias())
    }

    /// Feature count seen at fit time.
    pub fn n_features(&self) -> Option<usize> {
        self.model.as_ref().map(|m| m.n_features())
    }

    /// Loss curves of the most recent successful `fit` (empty before that).
    pub fn loss_history(&self) -> &LossHistory {
        &self.history
    }

    /// Plain-data copy of configuration and learned parameters.
    pub fn snapshot(&self) -> Result<ModelSnapshot> {
        let params = self.fitted()?.extract_params();
        Ok(ModelSnapshot {
            config: self.config,
            weights: params.weights,
            bias: params.bias,
        })
    }

    /// Rebuilds a fitted regressor from a snapshot. The loss history starts empty.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self> {
        let mut regressor = Self::new(snapshot.config)?;
        regressor.model = Some(LinearModel::<Fitted>::new(LinearParams {
            weights: Array1::from(snapshot.weights),
            bias: snapshot.bias,
        }));
        Ok(regressor)
    }
}
