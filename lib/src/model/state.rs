/// A marker type indicating that a model is **not yet trained**.
///
/// Training methods (like [`Trainer::fit`](crate::trainer::Trainer::fit)) consume an
/// `Unfitted` model; inference methods are not available on it.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// A marker type indicating that a model has been **fully trained**.
///
/// A `Fitted` model carries only inference parameters: no optimizer state,
/// loss function or training hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
