//! Error types for the wavefilt-quality crate.

/// Error type for all fallible operations in the wavefilt-quality crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QualityError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when input data contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when two signals that must align differ in length.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched signal.
        field: &'static str,
    },

    /// Returned when a method needs the ideal signal and none was given.
    #[error("method {method} requires the ideal signal")]
    MissingIdeal {
        /// Canonical name of the method.
        method: &'static str,
    },

    /// Returned when data to normalise has no spread.
    #[error("cannot normalise constant data (every value is {value})")]
    DegenerateRange {
        /// The single value the data takes.
        value: f64,
    },

    /// Returned when an SNR method name is not recognised.
    #[error("unknown SNR method: {0}")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_data() {
        assert_eq!(QualityError::EmptyData.to_string(), "input data is empty");
    }

    #[test]
    fn error_non_finite_data() {
        assert_eq!(
            QualityError::NonFiniteData.to_string(),
            "input data contains non-finite values"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let e = QualityError::LengthMismatch {
            expected: 10,
            got: 9,
            field: "filtered",
        };
        assert_eq!(e.to_string(), "length mismatch: expected 10, got 9 for filtered");
    }

    #[test]
    fn error_missing_ideal() {
        let e = QualityError::MissingIdeal {
            method: "variances",
        };
        assert_eq!(e.to_string(), "method variances requires the ideal signal");
    }

    #[test]
    fn error_degenerate_range() {
        let e = QualityError::DegenerateRange { value: 2.5 };
        assert_eq!(
            e.to_string(),
            "cannot normalise constant data (every value is 2.5)"
        );
    }

    #[test]
    fn error_unknown_method() {
        let e = QualityError::UnknownMethod("psnr".into());
        assert_eq!(e.to_string(), "unknown SNR method: psnr");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<QualityError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<QualityError>();
    }
}
