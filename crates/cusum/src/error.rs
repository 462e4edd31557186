//! Error types for the wavefilt-cusum crate.

/// Error type for all fallible operations in the wavefilt-cusum crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CusumError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when input data contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a band and its control statistics differ in length.
    #[error(
        "length mismatch: data has {data_len} elements, upper statistic has {upper_len}, lower statistic has {lower_len}"
    )]
    LengthMismatch {
        /// Length of the coefficient band.
        data_len: usize,
        /// Length of the upper statistic.
        upper_len: usize,
        /// Length of the lower statistic.
        lower_len: usize,
    },

    /// Returned when a scalar control parameter is NaN or infinite.
    #[error("parameter {name} must be finite, got {value}")]
    NonFiniteParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when the adaptive method receives a scalar parameter.
    #[error("parameter {name} must be a per-band sequence for the adaptive method")]
    ParameterNotSequence {
        /// Name of the parameter (`"k"` or `"h"`).
        name: &'static str,
    },

    /// Returned when a per-band parameter does not have one value per band.
    #[error("parameter {name} has {got} values, expected one per detail band ({expected})")]
    ParameterLengthMismatch {
        /// Name of the parameter (`"k"` or `"h"`).
        name: &'static str,
        /// Number of detail bands.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when a scalar-only method receives a per-band sequence.
    #[error("parameter {name} must be a scalar for method {method}")]
    UnexpectedSequence {
        /// Name of the parameter (`"k"` or `"h"`).
        name: &'static str,
        /// Canonical name of the method.
        method: &'static str,
    },

    /// Returned when parameters are resolved for zero detail bands.
    #[error("no detail bands supplied")]
    NoBands,

    /// Returned when a CUSUM method name is not recognised.
    #[error("unknown CUSUM method: {0}")]
    UnknownMethod(String),
}
