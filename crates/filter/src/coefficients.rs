//! Validated wavelet coefficient sets.

use crate::error::FilterError;

/// Ordered wavelet coefficient bands: the approximation band first, then
/// one or more detail bands from coarsest to finest.
///
/// Every band is non-empty and finite. Filtering never mutates a set; it
/// returns a new one with the same shape.
///
/// # Example
///
/// ```
/// use wavefilt_filter::CoefficientSet;
///
/// let set = CoefficientSet::new(vec![vec![4.0, 4.2], vec![0.1, -0.3], vec![0.02, 0.0, -0.01, 0.05]])?;
/// assert_eq!(set.n_detail_bands(), 2);
/// assert_eq!(set.approximation(), &[4.0, 4.2]);
/// # Ok::<(), wavefilt_filter::FilterError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientSet {
    bands: Vec<Vec<f64>>,
}

impl CoefficientSet {
    /// Validates `bands` and wraps them.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`FilterError::TooFewBands`] | fewer than two bands |
    /// | [`FilterError::EmptyBand`] | any band has no coefficients |
    /// | [`FilterError::NonFiniteData`] | any coefficient is NaN or infinite |
    pub fn new(bands: Vec<Vec<f64>>) -> Result<Self, FilterError> {
        if bands.len() < 2 {
            return Err(FilterError::TooFewBands { got: bands.len() });
        }
        for (band, values) in bands.iter().enumerate() {
            if values.is_empty() {
                return Err(FilterError::EmptyBand { band });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(FilterError::NonFiniteData { band });
            }
        }
        Ok(Self { bands })
    }

    /// Reassembles a set from an untouched approximation band and filtered
    /// detail bands of the original shape.
    pub(crate) fn reassemble(approximation: &[f64], details: Vec<Vec<f64>>) -> Self {
        let mut bands = Vec::with_capacity(details.len() + 1);
        bands.push(approximation.to_vec());
        bands.extend(details);
        Self { bands }
    }

    /// Returns the approximation band.
    pub fn approximation(&self) -> &[f64] {
        &self.bands[0]
    }

    /// Returns the detail bands, coarsest first.
    pub fn details(&self) -> &[Vec<f64>] {
        &self.bands[1..]
    }

    /// Returns all bands, approximation first.
    pub fn bands(&self) -> &[Vec<f64>] {
        &self.bands
    }

    /// Returns the number of detail bands.
    pub fn n_detail_bands(&self) -> usize {
        self.bands.len() - 1
    }

    /// Consumes self and returns the bands.
    pub fn into_bands(self) -> Vec<Vec<f64>> {
        self.bands
    }
}

impl TryFrom<Vec<Vec<f64>>> for CoefficientSet {
    type Error = FilterError;

    fn try_from(bands: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}
