//! Numeric-vector helpers for the wavefilt crates.
//!
//! Every estimator in the workspace reduces to a handful of summary
//! statistics over a coefficient band. They live here so the threshold,
//! CUSUM and quality crates agree on divisors and on the robust noise
//! estimator.

use std::cmp::Ordering;

/// Normalising constant of the robust noise estimator: the 0.75 quantile of
/// the standard normal distribution, so `median(|x|) / MAD_SCALE` is an
/// unbiased estimate of `sigma` for Gaussian white noise.
pub const MAD_SCALE: f64 = 0.6745;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Mean of the squared values (`sum(x^2) / n`). Returns 0.0 if empty.
pub fn mean_square(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|&x| x * x).sum::<f64>() / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    sum_sq_dev(data) / (n as f64 - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population variance with N denominator.
/// Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    sum_sq_dev(data) / data.len() as f64
}

/// Population standard deviation with N denominator.
/// Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

fn sum_sq_dev(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum()
}

/// Median of unsorted data. For even length, averages the middle two values.
///
/// Sorts a private copy; NaN values compare as equal and end up wherever the
/// sort leaves them.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn median(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "median: input must not be empty");
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Robust noise standard deviation: `median(|x|) / 0.6745`.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn robust_sigma(data: &[f64]) -> f64 {
    let abs: Vec<f64> = data.iter().map(|x| x.abs()).collect();
    median(&abs) / MAD_SCALE
}

/// Smallest and largest value of a slice, or `None` if empty.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_square() {
        assert_relative_eq!(mean_square(&[3.0, 4.0]), 12.5, epsilon = 1e-12);
        assert_eq!(mean_square(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_population_sd() {
        // Classic textbook example: population sd is exactly 2.
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_sd(&data), 2.0, epsilon = 1e-12);
        assert_relative_eq!(population_variance(&data), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_population_sd_single() {
        assert_eq!(population_sd(&[7.0]), 0.0);
        assert_eq!(population_sd(&[]), 0.0);
    }

    #[test]
    fn test_median_odd_unsorted() {
        assert_relative_eq!(median(&[3.0, 1.0, 2.0]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_median_even_unsorted() {
        assert_relative_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "median: input must not be empty")]
    fn test_median_empty_panics() {
        median(&[]);
    }

    #[test]
    fn test_robust_sigma() {
        // |x| = [1, 2, 3, 4] -> median 2.5
        let sigma = robust_sigma(&[1.0, -2.0, 3.0, -4.0]);
        assert_relative_eq!(sigma, 2.5 / 0.6745, epsilon = 1e-12);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 7.5, 0.0]), Some((-1.0, 7.5)));
        assert_eq!(min_max(&[]), None);
    }
}
