//! CUSUM-based filtering.

use rayon::prelude::*;
use tracing::debug;
use wavefilt_cusum::{BandControl, CusumConfig, CusumError, CusumOptions, analyze, truncate_with};

use crate::coefficients::CoefficientSet;
use crate::error::FilterError;

/// Result of [`cusum_filter`].
#[derive(Clone, Debug)]
pub struct CusumFiltration {
    /// Filtered coefficients, same shape as the input.
    pub coefficients: CoefficientSet,
    /// `(k, h)` applied to each detail band, coarsest first.
    pub controls: Vec<BandControl>,
}

impl CusumFiltration {
    /// Returns the slack factor used for each band.
    pub fn k(&self) -> Vec<f64> {
        self.controls.iter().map(|c| c.k).collect()
    }

    /// Returns the decision-interval multiplier used for each band.
    pub fn h(&self) -> Vec<f64> {
        self.controls.iter().map(|c| c.h).collect()
    }
}

/// Runs CUSUM analysis with `k_j` and truncation with `h_j` on every detail
/// band.
///
/// Each band uses its own mean and population standard deviation. The
/// approximation band is copied unchanged. Parameters are resolved and
/// validated before any band is touched.
///
/// # Errors
///
/// Returns [`FilterError::Cusum`] if the parameters do not fit the method
/// or the number of detail bands.
#[tracing::instrument(
    skip(coefficients, config),
    fields(method = %config.method(), n_bands = coefficients.n_detail_bands())
)]
pub fn cusum_filter(
    coefficients: &CoefficientSet,
    config: &CusumConfig,
) -> Result<CusumFiltration, FilterError> {
    let details = coefficients.details();
    let controls = config.resolve(details.len())?;
    for (band, c) in controls.iter().enumerate() {
        debug!(band, k = c.k, h = c.h, "cusum controls chosen");
    }

    let options = CusumOptions::new();
    let filtered = details
        .par_iter()
        .zip(controls.par_iter())
        .map(|(values, c)| -> Result<Vec<f64>, CusumError> {
            let stats = analyze(values, c.k, &options)?;
            truncate_with(values, &stats, None, c.h)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CusumFiltration {
        coefficients: CoefficientSet::reassemble(coefficients.approximation(), filtered),
        controls,
    })
}
