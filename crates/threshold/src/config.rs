//! Configuration for threshold estimation and truncation.

use std::fmt;
use std::str::FromStr;

use crate::error::ThresholdError;

/// Default SPC-Threshold multiplier.
pub const DEFAULT_P: f64 = 3.0;

/// Default number of SureShrink candidate thresholds.
pub const DEFAULT_DIM_T: usize = 1024;

/// Statistical method used to derive one threshold per detail band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ThresholdMethod {
    /// Universal threshold from the finest band, shared by every band.
    #[default]
    Visu,
    /// Per-band minimiser of Stein's Unbiased Risk Estimate.
    Sure,
    /// Per-band ratio of noise variance to signal deviation.
    Bayes,
    /// Per-band iterative control-limit threshold.
    Spc,
}

impl ThresholdMethod {
    /// Returns the canonical lowercase name (`"visu"`, `"sure"`, `"bayes"`, `"spc"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Visu => "visu",
            Self::Sure => "sure",
            Self::Bayes => "bayes",
            Self::Spc => "spc",
        }
    }
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThresholdMethod {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visu" => Ok(Self::Visu),
            "sure" => Ok(Self::Sure),
            "bayes" => Ok(Self::Bayes),
            "spc" => Ok(Self::Spc),
            other => Err(ThresholdError::UnknownMethod(other.to_string())),
        }
    }
}

/// Rule applied to coefficients once a threshold is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TruncationMode {
    /// Zero coefficients whose magnitude is below the threshold.
    #[default]
    Hard,
    /// Shrink every magnitude by the threshold, flooring at zero.
    Soft,
}

impl TruncationMode {
    /// Returns the canonical lowercase name (`"hard"` or `"soft"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        }
    }
}

impl fmt::Display for TruncationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TruncationMode {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            other => Err(ThresholdError::UnknownMode(other.to_string())),
        }
    }
}

/// Configuration for a threshold-based filtering run.
///
/// # Example
///
/// ```
/// use wavefilt_threshold::{ThresholdConfig, ThresholdMethod, TruncationMode};
///
/// let config = ThresholdConfig::new(ThresholdMethod::Spc)
///     .with_p(2.0)
///     .with_mode(TruncationMode::Soft);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ThresholdConfig {
    method: ThresholdMethod,
    p: f64,
    mode: TruncationMode,
    dim_t: usize,
}

impl ThresholdConfig {
    /// Creates a new configuration for `method`.
    ///
    /// Defaults: `p = 3.0`, `mode = Hard`, `dim_t = 1024`.
    pub fn new(method: ThresholdMethod) -> Self {
        Self {
            method,
            p: DEFAULT_P,
            mode: TruncationMode::Hard,
            dim_t: DEFAULT_DIM_T,
        }
    }

    /// Sets the threshold method.
    pub fn with_method(mut self, method: ThresholdMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the SPC-Threshold multiplier.
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// Sets the truncation mode.
    pub fn with_mode(mut self, mode: TruncationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the number of SureShrink candidate thresholds.
    pub fn with_dim_t(mut self, dim_t: usize) -> Self {
        self.dim_t = dim_t;
        self
    }

    /// Returns the threshold method.
    pub fn method(&self) -> ThresholdMethod {
        self.method
    }

    /// Returns the SPC-Threshold multiplier.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the truncation mode.
    pub fn mode(&self) -> TruncationMode {
        self.mode
    }

    /// Returns the number of SureShrink candidate thresholds.
    pub fn dim_t(&self) -> usize {
        self.dim_t
    }

    /// Validates this configuration.
    ///
    /// `p` must be finite and non-negative and `dim_t` at least 1. Both are
    /// checked regardless of the selected method.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        validate_p(self.p)?;
        validate_dim_t(self.dim_t)
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::new(ThresholdMethod::default())
    }
}

pub(crate) fn validate_p(p: f64) -> Result<(), ThresholdError> {
    if !p.is_finite() || p < 0.0 {
        return Err(ThresholdError::InvalidParameter {
            name: "p",
            reason: format!("must be finite and non-negative, got {p}"),
        });
    }
    Ok(())
}

pub(crate) fn validate_dim_t(dim_t: usize) -> Result<(), ThresholdError> {
    if dim_t == 0 {
        return Err(ThresholdError::InvalidParameter {
            name: "dim_t",
            reason: "must be at least 1, got 0".to_string(),
        });
    }
    Ok(())
}
