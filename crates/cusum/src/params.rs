//! Per-band control parameters for CUSUM filtering.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::analysis::check_finite;
use crate::error::CusumError;

/// Default slack factor `k`.
pub const DEFAULT_K: f64 = 0.5;

/// Default decision-interval multiplier `h`.
pub const DEFAULT_H: f64 = 5.0;

/// Number of detail bands the decaying `h` schedule was calibrated on.
pub const DECAY_CALIBRATED_BANDS: usize = 5;

/// Policy for deriving `(k_j, h_j)` for each detail band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CusumMethod {
    /// The same scalar `k` and `h` for every band.
    #[default]
    Traditional,
    /// Scalar `k`; `h_j = -7 * log10(0.201 * (L - j))`.
    Decay,
    /// Caller-supplied `k_j` and `h_j`, one per band.
    Adaptive,
}

impl CusumMethod {
    /// Returns the canonical name (`"cusum-trad"`, `"cusum-decay"`, `"cusum-adap"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Traditional => "cusum-trad",
            Self::Decay => "cusum-decay",
            Self::Adaptive => "cusum-adap",
        }
    }
}

impl fmt::Display for CusumMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CusumMethod {
    type Err = CusumError;

    /// Accepts the canonical names and the camel-case spellings
    /// (`cusumTrad`, `cusumDecay`, `cusumAdap`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cusum-trad" | "cusumTrad" => Ok(Self::Traditional),
            "cusum-decay" | "cusumDecay" => Ok(Self::Decay),
            "cusum-adap" | "cusumAdap" => Ok(Self::Adaptive),
            other => Err(CusumError::UnknownMethod(other.to_string())),
        }
    }
}

/// A control parameter given either once for all bands or once per band.
#[derive(Clone, Debug, PartialEq)]
pub enum BandParameter {
    /// One value shared by every band.
    Scalar(f64),
    /// One value per detail band, coarsest first.
    PerBand(Vec<f64>),
}

impl From<f64> for BandParameter {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for BandParameter {
    fn from(v: Vec<f64>) -> Self {
        Self::PerBand(v)
    }
}

/// Resolved control parameters for one detail band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandControl {
    /// Slack factor (fraction of the band's standard deviation).
    pub k: f64,
    /// Decision-interval multiplier.
    pub h: f64,
}

/// Configuration for a CUSUM-based filtering run.
///
/// # Example
///
/// ```
/// use wavefilt_cusum::{CusumConfig, CusumMethod};
///
/// let config = CusumConfig::new(CusumMethod::Adaptive)
///     .with_k(vec![0.5, 0.5, 0.4])
///     .with_h(vec![4.0, 4.5, 5.0]);
/// let controls = config.resolve(3)?;
/// assert_eq!(controls[2].h, 5.0);
/// # Ok::<(), wavefilt_cusum::CusumError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CusumConfig {
    method: CusumMethod,
    k: BandParameter,
    h: BandParameter,
}

impl CusumConfig {
    /// Creates a new configuration for `method`.
    ///
    /// Defaults: `k = Scalar(0.5)`, `h = Scalar(5.0)`.
    pub fn new(method: CusumMethod) -> Self {
        Self {
            method,
            k: BandParameter::Scalar(DEFAULT_K),
            h: BandParameter::Scalar(DEFAULT_H),
        }
    }

    /// Sets the method.
    pub fn with_method(mut self, method: CusumMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the slack factor.
    pub fn with_k(mut self, k: impl Into<BandParameter>) -> Self {
        self.k = k.into();
        self
    }

    /// Sets the decision-interval multiplier. Ignored by [`CusumMethod::Decay`].
    pub fn with_h(mut self, h: impl Into<BandParameter>) -> Self {
        self.h = h.into();
        self
    }

    /// Returns the method.
    pub fn method(&self) -> CusumMethod {
        self.method
    }

    /// Returns the slack factor parameter.
    pub fn k(&self) -> &BandParameter {
        &self.k
    }

    /// Returns the decision-interval parameter.
    pub fn h(&self) -> &BandParameter {
        &self.h
    }

    /// Derives `(k_j, h_j)` for `n_bands` detail bands, coarsest first.
    ///
    /// Validation happens entirely up front; no band is processed with a
    /// partially valid configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`CusumError::NoBands`] | `n_bands == 0` |
    /// | [`CusumError::UnexpectedSequence`] | per-band `k` (or `h`) for a scalar-only method |
    /// | [`CusumError::ParameterNotSequence`] | scalar `k` or `h` for [`CusumMethod::Adaptive`] |
    /// | [`CusumError::ParameterLengthMismatch`] | per-band length differs from `n_bands` |
    /// | [`CusumError::NonFiniteParameter`] | any resolved value is NaN or infinite |
    pub fn resolve(&self, n_bands: usize) -> Result<Vec<BandControl>, CusumError> {
        if n_bands == 0 {
            return Err(CusumError::NoBands);
        }

        let (ks, hs) = match self.method {
            CusumMethod::Traditional => {
                let k = self.scalar("k", &self.k)?;
                let h = self.scalar("h", &self.h)?;
                (vec![k; n_bands], vec![h; n_bands])
            }
            CusumMethod::Decay => {
                if n_bands != DECAY_CALIBRATED_BANDS {
                    warn!(
                        n_bands,
                        calibrated = DECAY_CALIBRATED_BANDS,
                        "cusum-decay: h schedule is calibrated for 5 detail bands, no performance guarantee"
                    );
                }
                let k = self.scalar("k", &self.k)?;
                let hs = (0..n_bands).map(|j| decay_h(n_bands, j)).collect();
                (vec![k; n_bands], hs)
            }
            CusumMethod::Adaptive => {
                let ks = per_band("k", &self.k)?;
                let hs = per_band("h", &self.h)?;
                check_len("k", ks, n_bands)?;
                check_len("h", hs, n_bands)?;
                (ks.to_vec(), hs.to_vec())
            }
        };

        ks.into_iter()
            .zip(hs)
            .map(|(k, h)| -> Result<BandControl, CusumError> {
                Ok(BandControl {
                    k: check_finite("k", k)?,
                    h: check_finite("h", h)?,
                })
            })
            .collect()
    }

    fn scalar(&self, name: &'static str, param: &BandParameter) -> Result<f64, CusumError> {
        match param {
            BandParameter::Scalar(v) => Ok(*v),
            BandParameter::PerBand(_) => Err(CusumError::UnexpectedSequence {
                name,
                method: self.method.name(),
            }),
        }
    }
}

impl Default for CusumConfig {
    fn default() -> Self {
        Self::new(CusumMethod::default())
    }
}

/// Decaying decision-interval multiplier `h_j = -7 * log10(0.201 * (L - j))`
/// for band `j` (0 = coarsest) of `n_bands`.
///
/// With five bands this runs from about `-0.015` at the coarsest band to
/// about `4.88` at the finest. Outside `j < n_bands` the value is NaN or
/// infinite.
pub fn decay_h(n_bands: usize, j: usize) -> f64 {
    -7.0 * (0.201 * (n_bands as f64 - j as f64)).log10()
}

fn per_band<'a>(name: &'static str, param: &'a BandParameter) -> Result<&'a [f64], CusumError> {
    match param {
        BandParameter::PerBand(v) => Ok(v),
        BandParameter::Scalar(_) => Err(CusumError::ParameterNotSequence { name }),
    }
}

fn check_len(name: &'static str, values: &[f64], n_bands: usize) -> Result<(), CusumError> {
    if values.len() != n_bands {
        return Err(CusumError::ParameterLengthMismatch {
            name,
            expected: n_bands,
            got: values.len(),
        });
    }
    Ok(())
}
