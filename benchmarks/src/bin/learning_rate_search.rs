use benchmarks::{benchmark_fn, standardize, time_fn, SyntheticRegression};
use gd_regression::{GradientDescentConfig, GradientDescentLinearRegressor};

fn main() {
    println!("Learning Rate Search for Full-Batch Gradient Descent");
    println!("====================================================\n");

    let data = SyntheticRegression::generate(2_000, 42);
    let (train, test) = data.split(0.8);
    let (train_x, test_x) = standardize(&train.features, &test.features);
    println!(
        "Generated {} training / {} test samples with {} features\n",
        train_x.nrows(),
        test_x.nrows(),
        data.n_features()
    );

    let max_iterations = 1_000;
    let tolerance = 1e-6;
    let learning_rates = [1e-4, 3e-4, 1e-3, 3e-3, 1e-2, 3e-2, 1e-1, 3e-1, 6e-1];

    println!(
        "Testing {} learning rates (max {} iterations, tolerance = {:e})\n",
        learning_rates.len(),
        max_iterations,
        tolerance
    );

    let mut best: Option<(f64, f64, f64)> = None;

    for lr in learning_rates {
        let config =
            GradientDescentConfig::new(lr, max_iterations, tolerance).with_log_every(0);
        let mut regressor = match GradientDescentLinearRegressor::new(config) {
            Ok(r) => r,
            Err(e) => {
                println!("LR = {lr:.6}: skipped ({e})");
                continue;
            }
        };

        let (fit_result, elapsed) = time_fn(|| {
            regressor.fit(
                train_x.view(),
                train.targets.view(),
                test_x.view(),
                test.targets.view(),
            )
        });
        let summary = match fit_result {
            Ok(summary) => summary,
            Err(e) => {
                println!("LR = {lr:.6}: fit failed ({e})");
                continue;
            }
        };

        let metrics = match regressor.evaluate(test_x.view(), test.targets.view()) {
            Ok(m) => m,
            Err(e) => {
                println!("LR = {lr:.6}: evaluation failed ({e})");
                continue;
            }
        };

        println!(
            "LR = {:.6}: {:>4} iterations{} in {:.2} ms, train MSE = {:.4}, test MSE = {:.4}, R² = {:.4}",
            lr,
            summary.iterations,
            if summary.converged { " (early stop)" } else { "" },
            elapsed.as_secs_f64() * 1000.0,
            summary.final_train_loss,
            summary.final_validation_loss,
            metrics.r2
        );

        if metrics.mse.is_finite() && best.map_or(true, |(_, mse, _)| metrics.mse < mse) {
            best = Some((lr, metrics.mse, metrics.r2));
        }
    }

    println!("\n=== Best Learning Rate ===");
    match best {
        Some((lr, mse, r2)) => {
            println!("LR = {lr:.6}");
            println!("MSE = {mse:.4}");
            println!("R² = {r2:.4}");

            let config = GradientDescentConfig::new(lr, max_iterations, tolerance).with_log_every(0);
            let (runs, mean_ms, std_ms) = benchmark_fn(5, || {
                GradientDescentLinearRegressor::new(config).and_then(|mut r| {
                    r.fit(
                        train_x.view(),
                        train.targets.view(),
                        test_x.view(),
                        test.targets.view(),
                    )
                })
            });
            let ok = runs.iter().filter(|r| r.is_ok()).count();
            println!("Fit time over {ok} runs: {mean_ms:.2} ± {std_ms:.2} ms");
        }
        None => println!("no learning rate produced a finite test error"),
    }
}
