//! Threshold-based filtering.

use rayon::prelude::*;
use tracing::debug;
use wavefilt_threshold::{ThresholdConfig, estimate_thresholds, truncate};

use crate::coefficients::CoefficientSet;
use crate::error::FilterError;

/// Result of [`threshold_filter`].
#[derive(Clone, Debug)]
pub struct ThresholdFiltration {
    /// Filtered coefficients, same shape as the input.
    pub coefficients: CoefficientSet,
    /// Threshold applied to each detail band, coarsest first.
    pub thresholds: Vec<f64>,
}

/// Estimates one threshold per detail band and truncates each band with it.
///
/// The approximation band is copied unchanged. An infinite threshold zeroes
/// its band.
///
/// # Errors
///
/// Returns [`FilterError::Threshold`] if `config` is invalid.
#[tracing::instrument(
    skip(coefficients, config),
    fields(method = %config.method(), n_bands = coefficients.n_detail_bands())
)]
pub fn threshold_filter(
    coefficients: &CoefficientSet,
    config: &ThresholdConfig,
) -> Result<ThresholdFiltration, FilterError> {
    let details = coefficients.details();
    let thresholds = estimate_thresholds(details, config)?;
    for (band, threshold) in thresholds.iter().enumerate() {
        debug!(band, threshold, "threshold chosen");
    }

    let mode = config.mode();
    let filtered = details
        .par_iter()
        .zip(thresholds.par_iter())
        .map(|(values, &threshold)| truncate(values, threshold, mode))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ThresholdFiltration {
        coefficients: CoefficientSet::reassemble(coefficients.approximation(), filtered),
        thresholds,
    })
}
