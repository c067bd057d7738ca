//! Error types for fitting and inference.

/// Errors surfaced by the regressor, trainer and dataset constructors.
#[derive(Debug, thiserror::Error)]
pub enum RegressionError {
    /// A dimension disagrees between two inputs, or between fit-time and predict-time data.
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// `predict` (or anything reading the learned state) was called before `fit`.
    #[error("model is not fitted; call fit() first")]
    NotFitted,

    /// Empty data provided where non-empty was required.
    #[error("empty data: {0}")]
    EmptyData(String),

    /// Invalid hyperparameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for RegressionError {
    fn from(err: bincode::Error) -> Self {
        RegressionError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for RegressionError {
    fn from(err: serde_json::Error) -> Self {
        RegressionError::Serialization(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RegressionError>;
