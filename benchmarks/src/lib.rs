//! Benchmark utilities for gd-regression.
//!
//! - Synthetic, standardized regression data shaped like the employment dataset
//! - Timing helpers

pub mod data;
pub mod utils;

pub use data::{standardize, SyntheticRegression};
pub use utils::{benchmark_fn, time_fn};
