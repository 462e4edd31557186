//! # wavefilt-cusum
//!
//! Tabular CUSUM control charts applied to wavelet detail coefficients.
//!
//! A coefficient is treated as signal when either one-sided cumulative sum
//! at its index has crossed the decision interval `H = h * std`, and as
//! noise (zeroed) otherwise.
//!
//! ```text
//!  band ──▶ analyze(k) ──▶ ControlStatistics ──▶ truncate(h) ──▶ filtered band
//! ```
//!
//! [`CusumConfig::resolve`] turns a [`CusumMethod`] and its parameters into
//! one [`BandControl`] per detail band.
//!
//! ## Quick Start
//!
//! ```
//! use wavefilt_cusum::{CusumOptions, analyze, truncate_with};
//!
//! let band = [0.2, 3.0, -3.0, 0.4];
//! let opts = CusumOptions::new().with_mean(0.0).with_std(1.0);
//! let stats = analyze(&band, 0.5, &opts)?;
//! let filtered = truncate_with(&band, &stats, Some(1.0), 2.0)?;
//! assert_eq!(filtered, vec![0.0, 3.0, -3.0, 0.0]);
//! # Ok::<(), wavefilt_cusum::CusumError>(())
//! ```

mod analysis;
mod error;
mod params;
mod truncate;

pub use analysis::{ControlStatistics, CusumOptions, analyze};
pub use error::CusumError;
pub use params::{
    BandControl, BandParameter, CusumConfig, CusumMethod, DECAY_CALIBRATED_BANDS, DEFAULT_H,
    DEFAULT_K, decay_h,
};
pub use truncate::{truncate, truncate_with};
