use ndarray::{Array1, Array2, Axis};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Noisy samples of a fixed affine function, generated from a seed.
///
/// Stands in for the employment dataset: seven indicators on very different
/// scales (GDP per capita in dollars, percentages, population counts), so the
/// features need standardizing before gradient descent behaves.
#[derive(Debug, Clone)]
pub struct SyntheticRegression {
    pub features: Array2<f64>,
    pub targets: Array1<f64>,
}

impl SyntheticRegression {
    /// Per-feature `(mean, spread)` of the raw indicators.
    const SCALES: [(f64, f64); 7] = [
        (2_500.0, 2_000.0),
        (62.0, 8.0),
        (25_000_000.0, 20_000_000.0),
        (45.0, 15.0),
        (95.0, 10.0),
        (45.0, 20.0),
        (65.0, 15.0),
    ];
    const WEIGHTS: [f64; 7] = [2.1, 1.4, -0.3, 0.9, 0.6, 1.8, 1.1];
    const INTERCEPT: f64 = 61.5;

    pub fn generate(n_samples: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut features = Array2::zeros((n_samples, Self::SCALES.len()));
        let mut targets = Array1::zeros(n_samples);

        for (i, mut row) in features.axis_iter_mut(Axis(0)).enumerate() {
            let mut y = Self::INTERCEPT + rng.gen_range(-1.0..1.0);
            for (j, &(mean, spread)) in Self::SCALES.iter().enumerate() {
                let z: f64 = rng.gen_range(-1.7..1.7);
                row[j] = mean + spread * z;
                y += Self::WEIGHTS[j] * z;
            }
            targets[i] = y;
        }

        Self { features, targets }
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Splits off the last `1 - train_fraction` of rows as a test set.
    ///
    /// # Panics
    /// If `train_fraction` is outside `0.0..=1.0`.
    pub fn split(&self, train_fraction: f64) -> (Self, Self) {
        assert!(
            (0.0..=1.0).contains(&train_fraction),
            "train_fraction must be in [0, 1], got {train_fraction}"
        );
        let n_rows = self.features.nrows();
        let n_train = ((n_rows as f64 * train_fraction).round() as usize).min(n_rows);
        let train = Self {
            features: self.features.slice(ndarray::s![..n_train, ..]).to_owned(),
            targets: self.targets.slice(ndarray::s![..n_train]).to_owned(),
        };
        let test = Self {
            features: self.features.slice(ndarray::s![n_train.., ..]).to_owned(),
            targets: self.targets.slice(ndarray::s![n_train..]).to_owned(),
        };
        (train, test)
    }
}

/// Z-scores `train` and `test` with statistics computed on `train` only.
///
/// Constant columns get a unit divisor.
pub fn standardize(train: &Array2<f64>, test: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let mean = train.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(train.ncols()));
    let std = train
        .std_axis(Axis(0), 0.0)
        .mapv(|s| if s > 1e-8 { s } else { 1.0 });

    ((train - &mean) / &std, (test - &mean) / &std)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape_and_determinism() {
        let a = SyntheticRegression::generate(50, 1);
        let b = SyntheticRegression::generate(50, 1);

        assert_eq!(a.features.dim(), (50, 7));
        assert_eq!(a.targets.len(), 50);
        assert_eq!(a.features, b.features);
        assert_eq!(a.targets, b.targets);
    }

    #[test]
    fn test_split_sizes() {
        let data = SyntheticRegression::generate(100, 2);
        let (train, test) = data.split(0.8);

        assert_eq!(train.features.nrows(), 80);
        assert_eq!(test.features.nrows(), 20);
        assert_eq!(test.targets[0], data.targets[80]);
    }

    #[test]
    fn test_split_full_fraction_leaves_empty_test_set() {
        let data = SyntheticRegression::generate(10, 3);
        let (train, test) = data.split(1.0);

        assert_eq!(train.features.nrows(), 10);
        assert_eq!(test.features.nrows(), 0);
        assert_eq!(test.targets.len(), 0);
    }

    #[test]
    #[should_panic(expected = "train_fraction must be in [0, 1]")]
    fn test_split_rejects_fraction_above_one() {
        SyntheticRegression::generate(10, 3).split(1.5);
    }

    #[test]
    fn test_standardize_uses_train_statistics() {
        let train = ndarray::array![[1.0, 5.0], [3.0, 5.0]];
        let test = ndarray::array![[5.0, 6.0]];

        let (train_scaled, test_scaled) = standardize(&train, &test);

        assert_eq!(train_scaled, ndarray::array![[-1.0, 0.0], [1.0, 0.0]]);
        assert_eq!(test_scaled, ndarray::array![[3.0, 1.0]]);
    }
}
