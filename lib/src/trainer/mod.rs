use crate::{
    dataset::DatasetView,
    error::{RegressionError, Result},
    history::LossHistory,
    loss::Loss,
    metrics::r_squared,
    model::{ParamOps, TrainableModel},
    optimizer::Optimizer,
};
use log::Level;
use ndarray::Array1;
use std::marker::PhantomData;

/// Orchestrates full-batch training of a `TrainableModel`.
///
/// Each iteration evaluates the model on the whole training and validation sets,
/// records both losses, and applies one optimizer step computed from the training
/// gradient. Iteration stops at `max_iterations`, or earlier once two consecutive
/// training losses differ by less than `tolerance`. Validation loss is recorded but
/// never consulted by the stopping rule.
///
/// Once built via [`TrainerBuilder`] it is immutable and can be reused across models.
pub struct Trainer<L, O, M> {
    pub(crate) max_iterations: usize,
    pub(crate) tolerance: f64,
    pub(crate) log_every: usize,
    pub(crate) verbose: bool,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    _phantom_model: PhantomData<M>,
}

/// Fluent builder for constructing a [`Trainer`].
///
/// Defaults:
/// - `max_iterations`: 1000
/// - `tolerance`: 1e-6
/// - `log_every`: 100
/// - `verbose`: true
pub struct TrainerBuilder<L, O, M> {
    max_iterations: usize,
    tolerance: f64,
    log_every: usize,
    verbose: bool,
    loss_fn: L,
    optimizer: O,
    _phantom_model: PhantomData<M>,
}

impl<L, O, M> TrainerBuilder<L, O, M> {
    /// Creates a new `TrainerBuilder` with the given components.
    ///
    /// # Arguments
    /// * `loss_fn`: differentiable loss (e.g. `MSELoss`)
    /// * `optimizer`: parameter updater (e.g. `GradientDescent`)
    pub fn new(loss_fn: L, optimizer: O) -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
            log_every: 100,
            verbose: true,
            loss_fn,
            optimizer,
            _phantom_model: PhantomData,
        }
    }

    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Emit a progress record every `every` iterations (0 disables progress records).
    pub fn log_every(mut self, every: usize) -> Self {
        self.log_every = every;
        self
    }

    /// Progress records go out at `info` level when `true`, `debug` otherwise.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Trainer<L, O, M> {
        Trainer {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            log_every: self.log_every,
            verbose: self.verbose,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            _phantom_model: PhantomData,
        }
    }
}

/// Result of a training run.
#[derive(Debug)]
pub struct TrainingOutcome<F> {
    /// Model holding the parameters after the last completed iteration.
    pub model: F,
    /// One train/validation loss pair per completed iteration.
    pub history: LossHistory,
    /// `true` when the tolerance rule ended the run before `max_iterations`.
    pub converged: bool,
}

impl<L, O, M, P> Trainer<L, O, M>
where
    L: Loss,
    M: TrainableModel<Prediction = Array1<f64>, Params = P, Gradients = P>,
    O: Optimizer<P>,
    P: ParamOps,
{
    /// Trains `model` on `train`, tracking loss on `validation` as it goes.
    ///
    /// # Errors
    /// [`RegressionError::ShapeMismatch`] when the validation set or the model
    /// disagree with the training set's feature count.
    pub fn fit(
        &self,
        mut model: M,
        train: DatasetView<'_>,
        validation: DatasetView<'_>,
    ) -> Result<TrainingOutcome<M::Output>> {
        let n_features = train.n_features();
        if validation.n_features() != n_features {
            return Err(RegressionError::ShapeMismatch {
                context: "validation features",
                expected: n_features,
                got: validation.n_features(),
            });
        }
        if model.n_features() != n_features {
            return Err(RegressionError::ShapeMismatch {
                context: "model features",
                expected: n_features,
                got: model.n_features(),
            });
        }

        let (x_train, y_train) = (train.features(), train.targets());
        let (x_val, y_val) = (validation.features(), validation.targets());
        let progress_level = if self.verbose { Level::Info } else { Level::Debug };

        log::info!(
            "starting gradient descent: {} training samples, {} validation samples, {} features, max {} iterations",
            train.n_samples(),
            validation.n_samples(),
            n_features,
            self.max_iterations
        );

        let mut history = LossHistory::with_capacity(self.max_iterations.min(4096));
        let mut converged = false;
        let mut warned_non_finite = false;

        for iteration in 0..self.max_iterations {
            let pred_train = model.forward(x_train);
            let pred_val = model.forward(x_val);

            let train_loss = self.loss_fn.loss(pred_train.view(), y_train);
            let val_loss = self.loss_fn.loss(pred_val.view(), y_val);
            history.record(train_loss, val_loss);

            if !train_loss.is_finite() && !warned_non_finite {
                log::warn!(
                    "training loss became non-finite at iteration {iteration}; the learning rate is likely too large"
                );
                warned_non_finite = true;
            }

            let grad_preds = self.loss_fn.grad_wrt_prediction(pred_train.view(), y_train);
            let grads = model.backward(x_train, &grad_preds);
            let new_params = self.optimizer.step(model.params(), &grads);
            model.update_params(&new_params);

            if self.log_every > 0
                && iteration % self.log_every == 0
                && log::log_enabled!(progress_level)
            {
                log::log!(
                    progress_level,
                    "iteration {}: train loss = {:.6}, validation loss = {:.6}, train R² = {:.4}, validation R² = {:.4}",
                    iteration,
                    train_loss,
                    val_loss,
                    r_squared(y_train, pred_train.view()),
                    r_squared(y_val, pred_val.view())
                );
            }

            if iteration > 0 {
                if let Some(delta) = history.last_train_delta() {
                    if delta < self.tolerance {
                        log::info!("early stopping at iteration {iteration} (|Δ train loss| = {delta:e})");
                        converged = true;
                        break;
                    }
                }
            }
        }

        log::info!("training finished after {} iterations", history.len());

        Ok(TrainingOutcome {
            model: model.into_fitted(),
            history,
            converged,
        })
    }
}

impl<L, O, M> Trainer<L, O, M> {
    /// Convenience constructor that starts the builder pattern.
    pub fn builder(loss_fn: L, optimizer: O) -> TrainerBuilder<L, O, M> {
        TrainerBuilder::new(loss_fn, optimizer)
    }
}
