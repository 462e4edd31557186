//! Filter method selection.

use std::fmt;
use std::str::FromStr;

use wavefilt_cusum::{CusumConfig, CusumMethod};
use wavefilt_threshold::{ThresholdConfig, ThresholdMethod};

use crate::error::FilterError;

/// Every filtering method, threshold-based or CUSUM-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterMethod {
    /// Estimate a threshold per band and truncate.
    Threshold(ThresholdMethod),
    /// Zero coefficients whose CUSUM stays inside the decision interval.
    Cusum(CusumMethod),
}

impl FilterMethod {
    /// All method variants, threshold-based first.
    pub const ALL: [Self; 7] = [
        Self::Threshold(ThresholdMethod::Visu),
        Self::Threshold(ThresholdMethod::Sure),
        Self::Threshold(ThresholdMethod::Bayes),
        Self::Threshold(ThresholdMethod::Spc),
        Self::Cusum(CusumMethod::Traditional),
        Self::Cusum(CusumMethod::Decay),
        Self::Cusum(CusumMethod::Adaptive),
    ];

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Threshold(m) => m.name(),
            Self::Cusum(m) => m.name(),
        }
    }
}

impl Default for FilterMethod {
    fn default() -> Self {
        Self::Threshold(ThresholdMethod::default())
    }
}

impl fmt::Display for FilterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterMethod {
    type Err = FilterError;

    /// Parses any threshold or CUSUM method name. There is no fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(m) = s.parse::<ThresholdMethod>() {
            return Ok(Self::Threshold(m));
        }
        if let Ok(m) = s.parse::<CusumMethod>() {
            return Ok(Self::Cusum(m));
        }
        Err(FilterError::UnknownMethod(s.to_string()))
    }
}

/// Complete configuration of one filtering run.
#[derive(Clone, Debug)]
pub enum FilterConfig {
    /// Threshold estimation followed by truncation.
    Threshold(ThresholdConfig),
    /// CUSUM analysis followed by truncation.
    Cusum(CusumConfig),
}

impl FilterConfig {
    /// Returns the selected method.
    pub fn method(&self) -> FilterMethod {
        match self {
            Self::Threshold(c) => FilterMethod::Threshold(c.method()),
            Self::Cusum(c) => FilterMethod::Cusum(c.method()),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::Threshold(ThresholdConfig::default())
    }
}

impl From<ThresholdConfig> for FilterConfig {
    fn from(c: ThresholdConfig) -> Self {
        Self::Threshold(c)
    }
}

impl From<CusumConfig> for FilterConfig {
    fn from(c: CusumConfig) -> Self {
        Self::Cusum(c)
    }
}
