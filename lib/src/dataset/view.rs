use crate::error::{RegressionError, Result};
use ndarray::{ArrayView1, ArrayView2};

/// Borrowed feature matrix and target vector, aligned by row.
///
/// Same guarantees as [`InMemoryDataset`](super::InMemoryDataset) without owning
/// the data, so training can run directly on caller arrays.
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    pub(super) x: ArrayView2<'a, f64>,
    pub(super) y: ArrayView1<'a, f64>,
}

impl<'a> DatasetView<'a> {
    /// Fails with [`RegressionError::ShapeMismatch`] on a row/target count
    /// mismatch and with [`RegressionError::EmptyData`] when there are no rows.
    pub fn new(x: ArrayView2<'a, f64>, y: ArrayView1<'a, f64>) -> Result<Self> {
        check_aligned(x.nrows(), y.len())?;
        Ok(Self { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn features(&self) -> ArrayView2<'a, f64> {
        self.x
    }

    pub fn targets(&self) -> ArrayView1<'a, f64> {
        self.y
    }
}

pub(crate) fn check_aligned(n_rows: usize, n_targets: usize) -> Result<()> {
    if n_rows != n_targets {
        return Err(RegressionError::ShapeMismatch {
            context: "target length",
            expected: n_rows,
            got: n_targets,
        });
    }
    if n_rows == 0 {
        return Err(RegressionError::EmptyData("dataset has no rows".into()));
    }
    Ok(())
}
