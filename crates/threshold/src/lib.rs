//! # wavefilt-threshold
//!
//! Threshold estimation for wavelet detail coefficients and the truncation
//! rules that apply a threshold to a band.
//!
//! ## Estimators
//!
//! | Method | Scope | Threshold |
//! |--------|-------|-----------|
//! | [`ThresholdMethod::Visu`] | global | `sigma * sqrt(2 log10 n)` from the finest band |
//! | [`ThresholdMethod::Sure`] | per band | grid minimiser of Stein's risk on `[0, t_max]` |
//! | [`ThresholdMethod::Bayes`] | per band | `sigma_noise^2 / sigma_signal` |
//! | [`ThresholdMethod::Spc`] | per band | `p * S` after iterative outlier removal |
//!
//! `sigma` is always the robust estimate `median(|x|) / 0.6745`.
//!
//! ## Quick Start
//!
//! ```
//! use wavefilt_threshold::{ThresholdConfig, ThresholdMethod, TruncationMode, estimate_thresholds, truncate};
//!
//! let details = vec![vec![0.9, -0.1, 0.05, 1.4], vec![0.02, -0.04, 0.03, -0.01, 0.6, 0.01]];
//! let config = ThresholdConfig::new(ThresholdMethod::Visu);
//! let lambdas = estimate_thresholds(&details, &config)?;
//!
//! let filtered = truncate(&details[0], lambdas[0], TruncationMode::Hard)?;
//! assert_eq!(filtered.len(), details[0].len());
//! # Ok::<(), wavefilt_threshold::ThresholdError>(())
//! ```

mod config;
mod error;
mod estimate;
mod truncate;

pub use config::{DEFAULT_DIM_T, DEFAULT_P, ThresholdConfig, ThresholdMethod, TruncationMode};
pub use error::ThresholdError;
pub use estimate::{
    SpcBand, bayes_shrink, estimate_thresholds, spc_band, spc_threshold, sure_risk, sure_shrink,
    visu_shrink,
};
pub use truncate::truncate;
