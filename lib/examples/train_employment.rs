// Trains the gradient-descent regressor on a synthetic, already-standardized
// employment dataset (seven socioeconomic indicators) and prints the result.
use gd_regression::{GradientDescentConfig, GradientDescentLinearRegressor};
use ndarray::{array, Array1, Array2};
use rand::{rngs::StdRng, Rng, SeedableRng};

const FEATURES: [&str; 7] = [
    "gdp_per_capita",
    "life_expectancy",
    "population",
    "urban_population_percent",
    "school_enrollment_primary",
    "school_enrollment_secondary",
    "literacy_rate",
];

fn synthetic_split(rng: &mut StdRng, n: usize) -> (Array2<f64>, Array1<f64>) {
    let true_weights = array![2.1, 1.4, -0.3, 0.9, 0.6, 1.8, 1.1];
    let x = Array2::from_shape_fn((n, FEATURES.len()), |_| rng.gen_range(-2.0..2.0));
    let noise = Array1::from_shape_fn(n, |_| rng.gen_range(-0.5..0.5));
    let y = x.dot(&true_weights) + 61.5 + noise;
    (x, y)
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let (train_x, train_y) = synthetic_split(&mut rng, 160);
    let (test_x, test_y) = synthetic_split(&mut rng, 40);

    let config = GradientDescentConfig::new(0.01, 1000, 1e-6);
    let mut regressor = GradientDescentLinearRegressor::new(config).expect("valid config");
    let summary = regressor
        .fit(train_x.view(), train_y.view(), test_x.view(), test_y.view())
        .expect("fit failed");

    println!(
        "Finished after {} iterations (early stop: {})",
        summary.iterations, summary.converged
    );
    println!(
        "Final loss: train = {:.4}, test = {:.4}",
        summary.final_train_loss, summary.final_validation_loss
    );

    let weights = regressor.weights().expect("fitted");
    for (name, w) in FEATURES.iter().zip(weights.iter()) {
        println!("  {name:<28} {w:>8.4}");
    }
    println!("  {:<28} {:>8.4}", "bias", regressor.bias().expect("fitted"));

    let train_metrics = regressor.evaluate(train_x.view(), train_y.view()).expect("evaluate");
    let test_metrics = regressor.evaluate(test_x.view(), test_y.view()).expect("evaluate");
    println!(
        "Train R² = {:.4}, RMSE = {:.4}",
        train_metrics.r2, train_metrics.rmse
    );
    println!("Test  R² = {:.4}, RMSE = {:.4}", test_metrics.r2, test_metrics.rmse);

    let gap = regressor.loss_history().generalization_gap();
    println!("Train - test loss gap at end: {:.4}", gap.last().copied().unwrap_or(0.0));

    let snapshot = regressor.snapshot().expect("fitted");
    println!("{}", snapshot.to_json().expect("serializable"));
}
