//! One-sided CUSUM control statistics.

use wavefilt_stats::{mean, population_sd};

use crate::error::CusumError;

/// Optional overrides for [`analyze`].
///
/// `mean` and `std` default to the band's own mean and population standard
/// deviation. The two start values seed the recurrences at index `-1`.
///
/// # Example
///
/// ```
/// use wavefilt_cusum::CusumOptions;
///
/// let opts = CusumOptions::new().with_mean(0.0).with_std(1.0);
/// assert_eq!(opts.mean(), Some(0.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CusumOptions {
    mean: Option<f64>,
    std: Option<f64>,
    upper_start: f64,
    lower_start: f64,
}

impl CusumOptions {
    /// Creates options with no overrides and zero start values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target mean.
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Sets the process standard deviation.
    pub fn with_std(mut self, std: f64) -> Self {
        self.std = Some(std);
        self
    }

    /// Sets the value of the upper statistic before index 0.
    pub fn with_upper_start(mut self, start: f64) -> Self {
        self.upper_start = start;
        self
    }

    /// Sets the value of the lower statistic before index 0.
    pub fn with_lower_start(mut self, start: f64) -> Self {
        self.lower_start = start;
        self
    }

    /// Returns the target mean override, if set.
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Returns the standard deviation override, if set.
    pub fn std(&self) -> Option<f64> {
        self.std
    }

    /// Returns the upper start value.
    pub fn upper_start(&self) -> f64 {
        self.upper_start
    }

    /// Returns the lower start value.
    pub fn lower_start(&self) -> f64 {
        self.lower_start
    }
}

/// Upper and lower CUSUM trajectories of a band, one value per coefficient.
///
/// Both sequences are non-negative at every index.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlStatistics {
    upper: Vec<f64>,
    lower: Vec<f64>,
}

impl ControlStatistics {
    /// Returns the upper (positive-shift) statistic.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Returns the lower (negative-shift) statistic.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    /// Returns `true` if there are no indices.
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Consumes self and returns `(upper, lower)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.upper, self.lower)
    }
}

/// Computes the tabular CUSUM of `data` with slack `K = k * std`:
///
/// ```text
/// upper[i] = max(0, x[i] - (mean + K) + upper[i-1])
/// lower[i] = max(0, (mean - K) - x[i] + lower[i-1])
/// ```
///
/// The recurrence is evaluated strictly in index order.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CusumError::EmptyData`] | `data` is empty |
/// | [`CusumError::NonFiniteData`] | any element is NaN or infinite |
/// | [`CusumError::NonFiniteParameter`] | `k`, an override, or a start value is not finite |
pub fn analyze(
    data: &[f64],
    k: f64,
    options: &CusumOptions,
) -> Result<ControlStatistics, CusumError> {
    if data.is_empty() {
        return Err(CusumError::EmptyData);
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(CusumError::NonFiniteData);
    }
    check_finite("k", k)?;
    check_finite("upper_start", options.upper_start())?;
    check_finite("lower_start", options.lower_start())?;

    let target = match options.mean() {
        Some(m) => check_finite("mean", m)?,
        None => mean(data),
    };
    let std = match options.std() {
        Some(s) => check_finite("std", s)?,
        None => population_sd(data),
    };
    let slack = k * std;

    let (upper, lower): (Vec<f64>, Vec<f64>) = data
        .iter()
        .scan(
            (options.upper_start(), options.lower_start()),
            |(hi, lo), &x| {
                *hi = (x - (target + slack) + *hi).max(0.0);
                *lo = ((target - slack) - x + *lo).max(0.0);
                Some((*hi, *lo))
            },
        )
        .unzip();

    Ok(ControlStatistics { upper, lower })
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, CusumError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CusumError::NonFiniteParameter { name, value })
    }
}
