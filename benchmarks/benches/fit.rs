use benchmarks::{standardize, SyntheticRegression};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gd_regression::{GradientDescentConfig, GradientDescentLinearRegressor};

fn bench_fit_sample_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_samples");

    for n_samples in [100usize, 1_000, 10_000] {
        let data = SyntheticRegression::generate(n_samples, 7);
        let (train, test) = data.split(0.8);
        let (train_x, test_x) = standardize(&train.features, &test.features);

        group.bench_with_input(BenchmarkId::from_parameter(n_samples), &n_samples, |b, _| {
            let config = GradientDescentConfig::new(0.01, 200, 0.0).with_log_every(0);
            b.iter(|| {
                let mut regressor =
                    GradientDescentLinearRegressor::new(config).expect("valid config");
                regressor
                    .fit(
                        black_box(train_x.view()),
                        train.targets.view(),
                        test_x.view(),
                        test.targets.view(),
                    )
                    .expect("fit failed")
            });
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let data = SyntheticRegression::generate(10_000, 11);
    let (train, test) = data.split(0.8);
    let (train_x, test_x) = standardize(&train.features, &test.features);

    let config = GradientDescentConfig::new(0.05, 500, 1e-9).with_log_every(0);
    let mut regressor = GradientDescentLinearRegressor::new(config).expect("valid config");
    regressor
        .fit(train_x.view(), train.targets.view(), test_x.view(), test.targets.view())
        .expect("fit failed");

    c.bench_function("predict_2000_rows", |b| {
        b.iter(|| regressor.predict(black_box(test_x.view())).expect("predict failed"));
    });
}

criterion_group!(benches, bench_fit_sample_sizes, bench_predict);
criterion_main!(benches);
