use std::time::{Duration, Instant};

/// Run a function and measure its execution time.
///
/// # Returns
///
/// A tuple of (result, elapsed_time)
pub fn time_fn<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Run a function multiple times and return the mean and std dev of execution times.
///
/// # Returns
///
/// A tuple of (results, mean_time_ms, std_dev_ms)
pub fn benchmark_fn<F, R>(iterations: usize, mut f: F) -> (Vec<R>, f64, f64)
where
    F: FnMut() -> R,
{
    let mut results = Vec::with_capacity(iterations);
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let (result, elapsed) = time_fn(&mut f);
        results.push(result);
        times.push(elapsed.as_secs_f64() * 1000.0);
    }

    if times.is_empty() {
        return (results, 0.0, 0.0);
    }
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let variance = times.iter().map(|&t| (t - mean).powi(2)).sum::<f64>() / times.len() as f64;

    (results, mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_fn_returns_result() {
        let (value, elapsed) = time_fn(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_benchmark_fn() {
        let (results, mean, std_dev) = benchmark_fn(10, || (0..1000).sum::<i32>());

        assert_eq!(results.len(), 10);
        assert!(mean >= 0.0);
        assert!(std_dev >= 0.0);
    }

    #[test]
    fn test_benchmark_fn_zero_iterations() {
        let (results, mean, std_dev) = benchmark_fn(0, || 1);

        assert!(results.is_empty());
        assert_eq!(mean, 0.0);
        assert_eq!(std_dev, 0.0);
    }
}
