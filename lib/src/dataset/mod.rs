//! In-memory training data.
//!
//! A dataset is a feature matrix `X` of shape `(n_samples, n_features)` paired with a
//! target vector `y` of shape `(n_samples,)`. Construction validates the pairing, so
//! everything downstream (trainer, loss, model) can rely on aligned shapes.
//!
//! # Example
//!
//! ```rust
//! use gd_regression::dataset::InMemoryDataset;
//!
//! let x = vec![vec![1.0, 0.5], vec![2.0, 1.5]];
//! let y = vec![0.0, 1.0];
//! let dataset = InMemoryDataset::from_rows(x, y).unwrap();
//!
//! assert_eq!(dataset.n_samples(), 2);
//! assert_eq!(dataset.n_features(), 2);
//! ```

pub mod memory;
pub mod view;
pub use self::memory::InMemoryDataset;
pub use self::view::DatasetView;
