use super::view::{check_aligned, DatasetView};
use crate::error::{RegressionError, Result};
use ndarray::{Array1, Array2};

/// Feature matrix and target vector held in memory, aligned by row.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl InMemoryDataset {
    /// Pairs a feature matrix with its targets.
    ///
    /// Fails with [`RegressionError::ShapeMismatch`] when the row count of `x`
    /// differs from the length of `y`, and with [`RegressionError::EmptyData`]
    /// when there are no rows.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        check_aligned(x.nrows(), y.len())?;
        Ok(Self { x, y })
    }

    /// Builds a dataset from row vectors, rejecting ragged rows.
    pub fn from_rows(rows: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self> {
        let n_samples = rows.len();
        let n_features = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some(bad) = rows.iter().find(|row| row.len() != n_features) {
            return Err(RegressionError::ShapeMismatch {
                context: "row length",
                expected: n_features,
                got: bad.len(),
            });
        }

        let data: Vec<f64> = rows.into_iter().flatten().collect();
        let x = Array2::from_shape_vec((n_samples, n_features), data).map_err(|e| {
            RegressionError::InvalidParameter(format!("cannot shape feature matrix: {e}"))
        })?;
        Self::new(x, Array1::from(y))
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.x
    }

    pub fn targets(&self) -> &Array1<f64> {
        &self.y
    }

    /// Borrows the dataset without copying.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            x: self.x.view(),
            y: self.y.view(),
        }
    }
}
