//! # wavefilt-filter
//!
//! Filters the detail bands of a wavelet [`CoefficientSet`] and leaves the
//! approximation band untouched.
//!
//! Two families of methods are available:
//!
//! - **Threshold** (`visu`, `sure`, `bayes`, `spc`): estimate one threshold
//!   per band with [`wavefilt_threshold`], then hard- or soft-truncate.
//! - **CUSUM** (`cusum-trad`, `cusum-decay`, `cusum-adap`): keep only the
//!   coefficients whose control statistic leaves the decision interval, via
//!   [`wavefilt_cusum`].
//!
//! Bands are processed in parallel; results keep band order.
//!
//! ## Quick Start
//!
//! ```
//! use wavefilt_filter::{CoefficientSet, FilterConfig, FilterMethod, filter};
//! use wavefilt_threshold::ThresholdConfig;
//!
//! let set = CoefficientSet::new(vec![
//!     vec![8.0, 8.1],
//!     vec![2.5, -0.1],
//!     vec![0.04, -0.02, 0.01, 1.9],
//! ])?;
//! let method: FilterMethod = "spc".parse()?;
//! let FilterMethod::Threshold(m) = method else { unreachable!() };
//!
//! let out = filter(&set, &FilterConfig::from(ThresholdConfig::new(m)))?;
//! assert_eq!(out.coefficients().approximation(), set.approximation());
//! # Ok::<(), wavefilt_filter::FilterError>(())
//! ```

mod coefficients;
mod cusum;
mod error;
mod method;
mod threshold;

pub use coefficients::CoefficientSet;
pub use cusum::{CusumFiltration, cusum_filter};
pub use error::FilterError;
pub use method::{FilterConfig, FilterMethod};
pub use threshold::{ThresholdFiltration, threshold_filter};

/// Outcome of [`filter`], carrying the per-band diagnostics of whichever
/// method ran.
#[derive(Clone, Debug)]
pub enum Filtration {
    /// Result of a threshold-based run.
    Threshold(ThresholdFiltration),
    /// Result of a CUSUM-based run.
    Cusum(CusumFiltration),
}

impl Filtration {
    /// Returns the filtered coefficients.
    pub fn coefficients(&self) -> &CoefficientSet {
        match self {
            Self::Threshold(f) => &f.coefficients,
            Self::Cusum(f) => &f.coefficients,
        }
    }

    /// Consumes self and returns the filtered coefficients.
    pub fn into_coefficients(self) -> CoefficientSet {
        match self {
            Self::Threshold(f) => f.coefficients,
            Self::Cusum(f) => f.coefficients,
        }
    }
}

/// Filters `coefficients` with the method selected by `config`.
///
/// # Errors
///
/// Propagates the errors of [`threshold_filter`] and [`cusum_filter`].
pub fn filter(
    coefficients: &CoefficientSet,
    config: &FilterConfig,
) -> Result<Filtration, FilterError> {
    match config {
        FilterConfig::Threshold(c) => threshold_filter(coefficients, c).map(Filtration::Threshold),
        FilterConfig::Cusum(c) => cusum_filter(coefficients, c).map(Filtration::Cusum),
    }
}
