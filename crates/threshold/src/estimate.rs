//! Threshold estimators for detail-coefficient bands.
//!
//! Every estimator takes the detail bands only (no approximation band),
//! ordered coarsest to finest, and returns one threshold per band in the
//! same order. The finest band is the last one.

use rayon::prelude::*;
use tracing::{debug, warn};
use wavefilt_stats::{mean_square, robust_sigma, sd};

use crate::config::{
    DEFAULT_DIM_T, DEFAULT_P, ThresholdConfig, ThresholdMethod, validate_dim_t, validate_p,
};
use crate::error::ThresholdError;

/// Outcome of the SPC-Threshold shrink loop on a single band.
#[derive(Clone, Debug, PartialEq)]
pub struct SpcBand {
    /// Final threshold, `p * S` of the converged working set.
    pub threshold: f64,
    /// Number of coefficients left in the working set.
    pub retained: usize,
    /// Number of shrink iterations performed.
    pub iterations: usize,
}

/// Computes one threshold per band with the method selected in `config`.
///
/// This is the single dispatch point from [`ThresholdMethod`] to the
/// estimator functions below.
///
/// # Errors
///
/// Returns [`ThresholdError`] if `config` fails validation or any band is
/// empty or contains non-finite values.
pub fn estimate_thresholds<B>(
    bands: &[B],
    config: &ThresholdConfig,
) -> Result<Vec<f64>, ThresholdError>
where
    B: AsRef<[f64]> + Sync,
{
    config.validate()?;
    match config.method() {
        ThresholdMethod::Visu => visu_shrink(bands),
        ThresholdMethod::Sure => {
            if config.dim_t() == DEFAULT_DIM_T {
                debug!(dim_t = DEFAULT_DIM_T, "sure: using default candidate grid size");
            }
            sure_shrink(bands, config.dim_t())
        }
        ThresholdMethod::Bayes => bayes_shrink(bands),
        ThresholdMethod::Spc => {
            if config.p() == DEFAULT_P {
                debug!(p = DEFAULT_P, "spc: using default multiplier");
            }
            spc_threshold(bands, config.p())
        }
    }
}

/// VisuShrink: the universal threshold `sigma * sqrt(2 * log10(n))`.
///
/// `sigma` is the robust noise estimate of the finest band and `n` its
/// length. The same value is returned once per band.
///
/// # Errors
///
/// Returns [`ThresholdError`] if `bands` is empty or any band is empty or
/// non-finite.
pub fn visu_shrink<B: AsRef<[f64]>>(bands: &[B]) -> Result<Vec<f64>, ThresholdError> {
    validate_bands(bands)?;
    let finest = finest_band(bands);
    let lambda = universal_threshold(finest);
    debug!(lambda, n = finest.len(), "visu: universal threshold");
    Ok(vec![lambda; bands.len()])
}

/// SureShrink: per band, the candidate in `[0, t_max]` minimising
/// [`sure_risk`], where `t_max` is the band's own universal threshold and
/// the grid holds `dim_t` evenly spaced candidates.
///
/// Ties resolve to the smallest candidate.
///
/// # Errors
///
/// Returns [`ThresholdError`] if `dim_t == 0` or any band is invalid.
pub fn sure_shrink<B>(bands: &[B], dim_t: usize) -> Result<Vec<f64>, ThresholdError>
where
    B: AsRef<[f64]> + Sync,
{
    validate_dim_t(dim_t)?;
    validate_bands(bands)?;
    Ok(bands
        .par_iter()
        .map(|band| sure_band(band.as_ref(), dim_t))
        .collect())
}

/// Stein's Unbiased Risk Estimate of a candidate threshold `t`:
/// `n - 2 * #{x_i <= t} + sum(min(x_i, t)^2)`.
///
/// Both terms use the raw coefficient values, not their magnitudes, so a
/// negative coefficient always counts and always clips to itself.
pub fn sure_risk(band: &[f64], t: f64) -> f64 {
    let (below, clipped_sq) = band.iter().fold((0usize, 0.0_f64), |(count, sum), &x| {
        let c = x.min(t);
        (count + usize::from(x <= t), sum + c * c)
    });
    band.len() as f64 - 2.0 * below as f64 + clipped_sq
}

fn sure_band(band: &[f64], dim_t: usize) -> f64 {
    let t_max = universal_threshold(band);
    let step = if dim_t > 1 {
        t_max / (dim_t - 1) as f64
    } else {
        0.0
    };

    let mut best_t = 0.0;
    let mut best_risk = f64::INFINITY;
    for i in 0..dim_t {
        let t = if i + 1 == dim_t && dim_t > 1 {
            t_max
        } else {
            i as f64 * step
        };
        let risk = sure_risk(band, t);
        if risk < best_risk {
            best_risk = risk;
            best_t = t;
        }
    }
    best_t
}

/// BayesShrink: `sigma_noise^2 / sigma_signal` per band.
///
/// `sigma_noise` is the robust estimate of the finest band;
/// `sigma_signal^2 = max(mean(x^2) - sigma_noise^2, 0)`. A band whose
/// signal variance is zero gets an infinite threshold, meaning every
/// coefficient in it is truncated.
///
/// # Errors
///
/// Returns [`ThresholdError`] if `bands` is empty or any band is invalid.
pub fn bayes_shrink<B: AsRef<[f64]>>(bands: &[B]) -> Result<Vec<f64>, ThresholdError> {
    validate_bands(bands)?;
    let noise_var = robust_sigma(finest_band(bands)).powi(2);

    Ok(bands
        .iter()
        .enumerate()
        .map(|(j, band)| {
            let signal_var = (mean_square(band.as_ref()) - noise_var).max(0.0);
            if signal_var == 0.0 {
                warn!(band = j, noise_var, "bayes: zero signal variance, truncating whole band");
                f64::INFINITY
            } else {
                noise_var / signal_var.sqrt()
            }
        })
        .collect())
}

/// SPC-Threshold: per band, `p * S` after iteratively discarding
/// coefficients with `|x| >= p * S`.
///
/// # Errors
///
/// Returns [`ThresholdError`] if `p` is negative or non-finite, or any band
/// is invalid.
pub fn spc_threshold<B: AsRef<[f64]>>(bands: &[B], p: f64) -> Result<Vec<f64>, ThresholdError> {
    validate_p(p)?;
    validate_bands(bands)?;
    Ok(bands
        .iter()
        .map(|band| spc_band(band.as_ref(), p).threshold)
        .collect())
}

/// Runs the SPC-Threshold shrink loop on a single band.
///
/// `S` is the sample standard deviation (N-1 denominator) of the working
/// set. The loop stops when no element reaches `p * S`, or when discarding
/// would leave at most one element; in the latter case the current `S` is
/// kept. Each iteration strictly shrinks the working set, so the loop ends
/// after at most `band.len()` iterations.
pub fn spc_band(band: &[f64], p: f64) -> SpcBand {
    let mut working = band.to_vec();
    let mut s = sd(&working);
    let mut iterations = 0;

    while working.iter().any(|x| x.abs() >= p * s) {
        let bound = p * s;
        let kept: Vec<f64> = working.iter().copied().filter(|x| x.abs() < bound).collect();
        if kept.len() <= 1 {
            debug!(
                remaining = kept.len(),
                iterations, "spc: working set exhausted, keeping last deviation"
            );
            break;
        }
        working = kept;
        s = sd(&working);
        iterations += 1;
    }

    SpcBand {
        threshold: p * s,
        retained: working.len(),
        iterations,
    }
}

fn universal_threshold(band: &[f64]) -> f64 {
    robust_sigma(band) * (2.0 * (band.len() as f64).log10()).sqrt()
}

/// Last band of a validated, non-empty band list.
fn finest_band<B: AsRef<[f64]>>(bands: &[B]) -> &[f64] {
    bands[bands.len() - 1].as_ref()
}

fn validate_bands<B: AsRef<[f64]>>(bands: &[B]) -> Result<(), ThresholdError> {
    if bands.is_empty() {
        return Err(ThresholdError::EmptyInput);
    }
    for (j, band) in bands.iter().enumerate() {
        let band = band.as_ref();
        if band.is_empty() {
            return Err(ThresholdError::EmptyBand { band: j });
        }
        if band.iter().any(|v| !v.is_finite()) {
            return Err(ThresholdError::NonFiniteData { band: j });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn visu_uses_finest_band_only() {
        // Finest |x| = [1, 2, 3, 4] -> sigma = 2.5 / 0.6745, n = 4.
        let bands = vec![vec![9.0, 9.0], vec![1.0, -2.0, 3.0, -4.0]];
        let lambdas = visu_shrink(&bands).unwrap();
        assert_eq!(lambdas.len(), 2);
        assert_relative_eq!(lambdas[0], 4.067175722307424, epsilon = 1e-9);
        assert_eq!(lambdas[0], lambdas[1]);

        // Changing a coarse band does not move the threshold.
        let bands2 = vec![vec![100.0, -50.0, 3.0], vec![1.0, -2.0, 3.0, -4.0]];
        assert_eq!(visu_shrink(&bands2).unwrap()[0], lambdas[0]);
    }

    #[test]
    fn visu_single_coefficient_is_zero() {
        // log10(1) = 0
        let lambdas = visu_shrink(&[vec![5.0]]).unwrap();
        assert_eq!(lambdas, vec![0.0]);
    }

    #[test]
    fn sure_risk_uses_raw_values() {
        // Negative coefficients always count as "<= t" and clip to themselves.
        let band = [-3.0, 2.0];
        // n=2, count(x <= 1) = 1, min(-3,1)^2 + min(2,1)^2 = 9 + 1
        assert_relative_eq!(sure_risk(&band, 1.0), 2.0 - 2.0 + 10.0, epsilon = 1e-12);
    }

    #[test]
    fn sure_picks_grid_minimum() {
        // Grid: [0, tmax/4, tmax/2, 3tmax/4, tmax], tmax = 1.6183524389747326
        // SURE: [10.06, 10.55, 7.53, 8.35, 9.49] -> index 2
        let band = vec![0.5, -1.0, 2.0, -0.25, 0.75, -3.0];
        let lambdas = sure_shrink(&[band], 5).unwrap();
        assert_relative_eq!(lambdas[0], 0.8091762194873663, epsilon = 1e-9);
    }

    #[test]
    fn sure_single_candidate_is_zero() {
        let lambdas = sure_shrink(&[vec![1.0, -2.0, 0.5]], 1).unwrap();
        assert_eq!(lambdas, vec![0.0]);
    }

    #[test]
    fn sure_rejects_zero_dim_t() {
        let result = sure_shrink(&[vec![1.0, 2.0]], 0);
        assert!(matches!(
            result,
            Err(ThresholdError::InvalidParameter { name: "dim_t", .. })
        ));
    }

    #[test]
    fn bayes_finite_and_degenerate() {
        // noise_var = (1 / 0.6745)^2 = 2.198...
        // band 0: mean(x^2) = 12.5 -> finite threshold
        // band 1: mean(x^2) = 1 < noise_var -> infinite threshold
        let bands = vec![vec![3.0, 4.0], vec![1.0, -1.0, 1.0, -1.0]];
        let lambdas = bayes_shrink(&bands).unwrap();
        assert_relative_eq!(lambdas[0], 0.6848196537506436, epsilon = 1e-9);
        assert!(lambdas[1].is_infinite() && lambdas[1] > 0.0);
    }

    #[test]
    fn bayes_all_zero_finest_is_infinite_not_nan() {
        // 0 / 0 would be NaN; it is normalised to +inf.
        let lambdas = bayes_shrink(&[vec![0.0, 0.0, 0.0]]).unwrap();
        assert!(lambdas[0].is_infinite());
    }

    #[test]
    fn spc_keeps_moderate_outlier_at_p3() {
        let band = [0.1, -0.2, 0.15, -0.05, 0.3, -0.25, 0.05, 10.0];
        let out = spc_band(&band, 3.0);
        assert_eq!(out.iterations, 0);
        assert_eq!(out.retained, 8);
        assert_relative_eq!(out.threshold, 10.605313695097784, epsilon = 1e-9);
    }

    #[test]
    fn spc_discards_outlier_at_p2() {
        let band = [0.1, -0.2, 0.15, -0.05, 0.3, -0.25, 0.05, 10.0];
        let out = spc_band(&band, 2.0);
        assert_eq!(out.iterations, 1);
        assert_eq!(out.retained, 7);
        assert_relative_eq!(out.threshold, 0.39036002917941326, epsilon = 1e-9);
    }

    #[test]
    fn spc_constant_band_stops() {
        // S = 0, every |x| >= 0 -> discarding would empty the set.
        let out = spc_band(&[2.0, 2.0, 2.0, 2.0], 3.0);
        assert_eq!(out.threshold, 0.0);
        assert_eq!(out.retained, 4);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn spc_singleton_band() {
        let out = spc_band(&[4.2], 3.0);
        assert_eq!(out.threshold, 0.0);
        assert_eq!(out.retained, 1);
    }

    #[test]
    fn spc_rejects_negative_p() {
        let result = spc_threshold(&[vec![1.0, 2.0]], -1.0);
        assert!(matches!(
            result,
            Err(ThresholdError::InvalidParameter { name: "p", .. })
        ));
    }

    #[test]
    fn validation_errors() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(visu_shrink(&empty), Err(ThresholdError::EmptyInput)));
        assert!(matches!(
            bayes_shrink(&[vec![1.0], vec![]]),
            Err(ThresholdError::EmptyBand { band: 1 })
        ));
        assert!(matches!(
            spc_threshold(&[vec![f64::NAN, 1.0]], 3.0),
            Err(ThresholdError::NonFiniteData { band: 0 })
        ));
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let bands = vec![
            vec![0.4, -1.2, 0.3, 2.2, -0.1, 0.05],
            vec![0.1, -0.3, 0.2, -0.2, 0.15, 0.05, -0.1, 0.25],
        ];
        let cfg = |m| ThresholdConfig::new(m).with_dim_t(32).with_p(2.0);
        assert_eq!(
            estimate_thresholds(&bands, &cfg(ThresholdMethod::Visu)).unwrap(),
            visu_shrink(&bands).unwrap()
        );
        assert_eq!(
            estimate_thresholds(&bands, &cfg(ThresholdMethod::Sure)).unwrap(),
            sure_shrink(&bands, 32).unwrap()
        );
        assert_eq!(
            estimate_thresholds(&bands, &cfg(ThresholdMethod::Bayes)).unwrap(),
            bayes_shrink(&bands).unwrap()
        );
        assert_eq!(
            estimate_thresholds(&bands, &cfg(ThresholdMethod::Spc)).unwrap(),
            spc_threshold(&bands, 2.0).unwrap()
        );
    }
}
