//! # wavefilt-quality
//!
//! Metrics for judging how much a filtering run improved a signal: decibel
//! conversions, SNR and CNR estimators, the before/after differential SNR,
//! and min-max normalisation.
//!
//! ```
//! use wavefilt_quality::{SnrMethod, differential_snr_db};
//!
//! let ideal = [0.0, 1.0, 0.0, 1.0];
//! let noisy = [0.4, 0.6, -0.4, 1.4];
//! let filtered = [0.1, 0.9, -0.1, 1.1];
//! let gain = differential_snr_db(&noisy, &filtered, SnrMethod::Variances, Some(&ideal[..]))?;
//! assert!(gain > 0.0);
//! # Ok::<(), wavefilt_quality::QualityError>(())
//! ```

mod db;
mod error;
mod normalize;
mod snr;

pub use db::{from_db, to_db};
pub use error::QualityError;
pub use normalize::{normalize, normalize_unit};
pub use snr::{
    SnrMethod, cnr_amplitude_std_noise, differential_snr_db, mean_squared_error,
    snr_mean_std_noise, snr_variances,
};
