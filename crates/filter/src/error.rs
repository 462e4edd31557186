//! Error types for the wavefilt-filter crate.

use wavefilt_cusum::CusumError;
use wavefilt_threshold::ThresholdError;

/// Error type for all fallible operations in the wavefilt-filter crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterError {
    /// Returned when a coefficient set lacks an approximation band or a detail band.
    #[error("coefficient set needs an approximation band and at least one detail band, got {got} bands")]
    TooFewBands {
        /// Number of bands supplied.
        got: usize,
    },

    /// Returned when a band has no coefficients.
    #[error("band {band} is empty")]
    EmptyBand {
        /// Position of the band in the set (0 = approximation).
        band: usize,
    },

    /// Returned when a band contains NaN or infinity.
    #[error("band {band} contains non-finite values")]
    NonFiniteData {
        /// Position of the band in the set (0 = approximation).
        band: usize,
    },

    /// Returned when a filter method name is not recognised.
    #[error("unknown filter method: {0}")]
    UnknownMethod(String),

    /// Wrapped error from the threshold crate.
    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    /// Wrapped error from the CUSUM crate.
    #[error(transparent)]
    Cusum(#[from] CusumError),
}
