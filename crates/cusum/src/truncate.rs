//! Truncation of coefficients whose CUSUM never leaves the decision interval.

use wavefilt_stats::population_sd;

use crate::analysis::{ControlStatistics, check_finite};
use crate::error::CusumError;

/// Keeps `data[i]` where `upper[i] > H` or `lower[i] > H` and zeroes it
/// otherwise, with decision interval `H = h * std`.
///
/// `std` defaults to the population standard deviation of `data`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CusumError::LengthMismatch`] | `data`, `upper` and `lower` differ in length |
/// | [`CusumError::NonFiniteParameter`] | `h` or `std` is not finite |
pub fn truncate(
    data: &[f64],
    upper: &[f64],
    lower: &[f64],
    std: Option<f64>,
    h: f64,
) -> Result<Vec<f64>, CusumError> {
    if upper.len() != data.len() || lower.len() != data.len() {
        return Err(CusumError::LengthMismatch {
            data_len: data.len(),
            upper_len: upper.len(),
            lower_len: lower.len(),
        });
    }
    check_finite("h", h)?;
    let std = match std {
        Some(s) => check_finite("std", s)?,
        None => population_sd(data),
    };
    let boundary = h * std;

    Ok(data
        .iter()
        .zip(upper.iter().zip(lower.iter()))
        .map(|(&x, (&hi, &lo))| if hi > boundary || lo > boundary { x } else { 0.0 })
        .collect())
}

/// [`truncate`] taking the statistics produced by [`analyze`](crate::analyze).
///
/// # Errors
///
/// Same as [`truncate`].
pub fn truncate_with(
    data: &[f64],
    stats: &ControlStatistics,
    std: Option<f64>,
    h: f64,
) -> Result<Vec<f64>, CusumError> {
    truncate(data, stats.upper(), stats.lower(), std, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CusumOptions, analyze};

    #[test]
    fn keeps_only_out_of_control_indices() {
        // upper = [0, 2.5, 0, 0], lower = [0, 0, 2.5, 1.6]
        let data = [0.2, 3.0, -3.0, 0.4];
        let opts = CusumOptions::new().with_mean(0.0).with_std(1.0);
        let stats = analyze(&data, 0.5, &opts).unwrap();

        let out = truncate_with(&data, &stats, Some(1.0), 2.0).unwrap();
        assert_eq!(out, vec![0.0, 3.0, -3.0, 0.0]);

        // Lower H lets index 3 through as well.
        let out = truncate_with(&data, &stats, Some(1.0), 1.5).unwrap();
        assert_eq!(out, vec![0.0, 3.0, -3.0, 0.4]);
    }

    #[test]
    fn statistic_equal_to_boundary_is_in_control() {
        let out = truncate(&[7.0, 8.0], &[2.0, 2.0001], &[0.0, 0.0], Some(1.0), 2.0).unwrap();
        assert_eq!(out, vec![0.0, 8.0]);
    }

    #[test]
    fn default_std_is_population_sd() {
        // population sd of [1, -1, 1, -1] = 1, so H = 2
        let data = [1.0, -1.0, 1.0, -1.0];
        let out = truncate(&data, &[2.5, 1.0, 0.0, 0.0], &[0.0, 0.0, 0.0, 2.1], None, 2.0).unwrap();
        assert_eq!(out, vec![1.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn negative_boundary_keeps_everything() {
        let data = [0.1, -0.2, 0.0];
        let out = truncate(&data, &[0.0; 3], &[0.0; 3], Some(1.0), -0.5).unwrap();
        assert_eq!(out, data.to_vec());
    }

    #[test]
    fn length_mismatch_rejected() {
        let result = truncate(&[1.0, 2.0, 3.0], &[0.0; 3], &[0.0; 2], None, 5.0);
        assert!(matches!(
            result,
            Err(CusumError::LengthMismatch {
                data_len: 3,
                upper_len: 3,
                lower_len: 2
            })
        ));
    }

    #[test]
    fn non_finite_h_rejected() {
        let result = truncate(&[1.0], &[0.0], &[0.0], None, f64::INFINITY);
        assert!(matches!(
            result,
            Err(CusumError::NonFiniteParameter { name: "h", .. })
        ));
    }
}
