//! Affine rescaling of data into a target range.

use wavefilt_stats::min_max;

use crate::error::QualityError;

/// Maps `data` affinely so its minimum lands on `lo` and its maximum on `hi`.
///
/// `lo > hi` is allowed and flips the data.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`QualityError::EmptyData`] | `data` is empty |
/// | [`QualityError::NonFiniteData`] | any element, `lo` or `hi` is NaN or infinite |
/// | [`QualityError::DegenerateRange`] | every element of `data` is equal |
pub fn normalize(data: &[f64], lo: f64, hi: f64) -> Result<Vec<f64>, QualityError> {
    let (min, max) = min_max(data).ok_or(QualityError::EmptyData)?;
    if data.iter().any(|v| !v.is_finite()) || !lo.is_finite() || !hi.is_finite() {
        return Err(QualityError::NonFiniteData);
    }
    if min == max {
        return Err(QualityError::DegenerateRange { value: min });
    }
    let scale = (hi - lo) / (max - min);
    Ok(data.iter().map(|&x| (x - min) * scale + lo).collect())
}

/// [`normalize`] into `[0, 1]`.
///
/// # Errors
///
/// Same as [`normalize`].
pub fn normalize_unit(data: &[f64]) -> Result<Vec<f64>, QualityError> {
    normalize(data, 0.0, 1.0)
}
