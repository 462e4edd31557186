//! Decibel conversions.

/// Converts a power ratio to decibels: `10 * log10(x)`.
pub fn to_db(x: f64) -> f64 {
    10.0 * x.log10()
}

/// Converts decibels back to a power ratio: `10^(x / 10)`.
pub fn from_db(x: f64) -> f64 {
    10f64.powf(x / 10.0)
}
