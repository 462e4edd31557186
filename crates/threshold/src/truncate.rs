//! Hard and soft truncation of a coefficient band.

use crate::config::TruncationMode;
use crate::error::ThresholdError;

impl TruncationMode {
    /// Applies this rule to a single coefficient.
    ///
    /// `threshold` is assumed finite and non-negative; use [`truncate`] for
    /// the checked, whole-band version.
    #[inline]
    pub fn apply(self, x: f64, threshold: f64) -> f64 {
        match self {
            Self::Hard => {
                if x.abs() < threshold {
                    0.0
                } else {
                    x
                }
            }
            Self::Soft => x.signum() * (x.abs() - threshold).max(0.0),
        }
    }
}

/// Returns a truncated copy of `band`.
///
/// A non-finite threshold (the degenerate BayesShrink outcome, `+inf` or
/// NaN) zeroes the whole band. A zero threshold leaves `band` unchanged.
///
/// # Errors
///
/// Returns [`ThresholdError::NegativeThreshold`] if `threshold < 0`.
pub fn truncate(
    band: &[f64],
    threshold: f64,
    mode: TruncationMode,
) -> Result<Vec<f64>, ThresholdError> {
    if threshold < 0.0 {
        return Err(ThresholdError::NegativeThreshold { value: threshold });
    }
    if !threshold.is_finite() {
        return Ok(vec![0.0; band.len()]);
    }
    Ok(band.iter().map(|&x| mode.apply(x, threshold)).collect())
}
