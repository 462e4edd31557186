//! Signal-to-noise and contrast-to-noise ratios.
//!
//! All spreads here are population statistics (divisor `n`).

use std::fmt;
use std::str::FromStr;

use wavefilt_stats::{mean, min_max, population_sd, population_variance};

use crate::db::to_db;
use crate::error::QualityError;

/// How [`differential_snr_db`] compares a signal before and after filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SnrMethod {
    /// Mean squared difference between the two signals. No ideal signal.
    #[default]
    SquareMeanError,
    /// Mean-over-noise-deviation SNR. The ideal signal defaults to zeros.
    MeanStandardNoise,
    /// Amplitude-over-noise-deviation CNR. Requires the ideal signal.
    AmplitudeStandardNoise,
    /// Ratio of variances. Requires the ideal signal.
    Variances,
}

impl SnrMethod {
    /// All methods.
    pub const ALL: [Self; 4] = [
        Self::SquareMeanError,
        Self::MeanStandardNoise,
        Self::AmplitudeStandardNoise,
        Self::Variances,
    ];

    /// Returns the canonical snake-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SquareMeanError => "square_mean_error",
            Self::MeanStandardNoise => "mean_standard_noise",
            Self::AmplitudeStandardNoise => "amplitude_standard_noise",
            Self::Variances => "variances",
        }
    }

    /// Whether the method cannot run without an ideal signal.
    pub fn requires_ideal(&self) -> bool {
        matches!(self, Self::AmplitudeStandardNoise | Self::Variances)
    }
}

impl fmt::Display for SnrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SnrMethod {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square_mean_error" => Ok(Self::SquareMeanError),
            "mean_standard_noise" | "mean_StandardNoise" => Ok(Self::MeanStandardNoise),
            "amplitude_standard_noise" | "amplitude_standardNoise" => {
                Ok(Self::AmplitudeStandardNoise)
            }
            "variances" => Ok(Self::Variances),
            other => Err(QualityError::UnknownMethod(other.to_string())),
        }
    }
}

/// Mean of `(current - ideal)^2`.
///
/// # Errors
///
/// Returns [`QualityError`] if either signal is empty or non-finite, or
/// their lengths differ.
pub fn mean_squared_error(current: &[f64], ideal: &[f64]) -> Result<f64, QualityError> {
    check_pair(current, ideal, "ideal")?;
    let sum: f64 = current
        .iter()
        .zip(ideal)
        .map(|(&c, &i)| (c - i) * (c - i))
        .sum();
    Ok(sum / current.len() as f64)
}

/// `mean(ideal) / std(noise)`.
///
/// # Errors
///
/// Returns [`QualityError`] if either signal is empty or non-finite.
pub fn snr_mean_std_noise(ideal: &[f64], noise: &[f64]) -> Result<f64, QualityError> {
    check_signal(ideal)?;
    check_signal(noise)?;
    Ok(mean(ideal) / population_sd(noise))
}

/// `var(ideal) / var(noise)`.
///
/// # Errors
///
/// Returns [`QualityError`] if either signal is empty or non-finite.
pub fn snr_variances(ideal: &[f64], noise: &[f64]) -> Result<f64, QualityError> {
    check_signal(ideal)?;
    check_signal(noise)?;
    Ok(population_variance(ideal) / population_variance(noise))
}

/// Contrast-to-noise ratio: the ideal signal's largest distance from zero
/// over `std(noise)`.
///
/// # Errors
///
/// Returns [`QualityError`] if either signal is empty or non-finite.
pub fn cnr_amplitude_std_noise(ideal: &[f64], noise: &[f64]) -> Result<f64, QualityError> {
    check_signal(ideal)?;
    check_signal(noise)?;
    let (lo, hi) = min_max(ideal).ok_or(QualityError::EmptyData)?;
    Ok(lo.abs().max(hi.abs()) / population_sd(noise))
}

/// Improvement of `final_signal` over `initial` in decibels.
///
/// With `noise = initial - ideal` and `residual = final - ideal`:
///
/// | Method | Value |
/// |--------|-------|
/// | [`SnrMethod::SquareMeanError`] | `to_db(mse(initial, final))` |
/// | [`SnrMethod::MeanStandardNoise`] | `to_db(std(noise) / std(residual))` |
/// | [`SnrMethod::AmplitudeStandardNoise`] | `to_db(std(noise) / std(residual))` |
/// | [`SnrMethod::Variances`] | `to_db(var(noise) / var(residual))` |
///
/// A perfect reconstruction (zero residual spread) yields `+inf`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`QualityError::MissingIdeal`] | `ideal` is `None` for a method that requires it |
/// | [`QualityError::LengthMismatch`] | any two signals differ in length |
/// | [`QualityError::EmptyData`] | `initial` is empty |
/// | [`QualityError::NonFiniteData`] | any signal has NaN or infinity |
pub fn differential_snr_db(
    initial: &[f64],
    final_signal: &[f64],
    method: SnrMethod,
    ideal: Option<&[f64]>,
) -> Result<f64, QualityError> {
    check_pair(initial, final_signal, "final")?;
    if let SnrMethod::SquareMeanError = method {
        return Ok(to_db(mean_squared_error(initial, final_signal)?));
    }

    let zeros;
    let ideal = match ideal {
        Some(i) => {
            check_pair(initial, i, "ideal")?;
            i
        }
        None if method.requires_ideal() => {
            return Err(QualityError::MissingIdeal {
                method: method.name(),
            });
        }
        None => {
            zeros = vec![0.0; initial.len()];
            &zeros[..]
        }
    };

    let noise = difference(initial, ideal);
    let residual = difference(final_signal, ideal);
    let ratio = match method {
        SnrMethod::Variances => population_variance(&noise) / population_variance(&residual),
        _ => population_sd(&noise) / population_sd(&residual),
    };
    Ok(to_db(ratio))
}

fn difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(&x, &y)| x - y).collect()
}

fn check_signal(data: &[f64]) -> Result<(), QualityError> {
    if data.is_empty() {
        return Err(QualityError::EmptyData);
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(QualityError::NonFiniteData);
    }
    Ok(())
}

fn check_pair(a: &[f64], b: &[f64], field: &'static str) -> Result<(), QualityError> {
    check_signal(a)?;
    if b.len() != a.len() {
        return Err(QualityError::LengthMismatch {
            expected: a.len(),
            got: b.len(),
            field,
        });
    }
    check_signal(b)
}
