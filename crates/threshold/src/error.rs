//! Error types for the wavefilt-threshold crate.

/// Error type for all fallible operations in the wavefilt-threshold crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ThresholdError {
    /// Returned when no detail bands are supplied.
    #[error("no detail bands supplied")]
    EmptyInput,

    /// Returned when a detail band has no coefficients.
    #[error("detail band {band} is empty")]
    EmptyBand {
        /// 0-indexed position of the band.
        band: usize,
    },

    /// Returned when a detail band contains NaN or infinity.
    #[error("detail band {band} contains non-finite values")]
    NonFiniteData {
        /// 0-indexed position of the band.
        band: usize,
    },

    /// Returned when an estimator parameter is out of range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a truncation threshold is negative.
    #[error("threshold must be non-negative, got {value}")]
    NegativeThreshold {
        /// The rejected threshold.
        value: f64,
    },

    /// Returned when a threshold method name is not recognised.
    #[error("unknown threshold method: {0}")]
    UnknownMethod(String),

    /// Returned when a truncation mode name is not recognised.
    #[error("unknown truncation mode: {0}")]
    UnknownMode(String),
}
