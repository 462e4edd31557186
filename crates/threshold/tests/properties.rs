use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use wavefilt_threshold::{
    ThresholdConfig, ThresholdMethod, TruncationMode, estimate_thresholds, spc_band, truncate,
    visu_shrink,
};

const METHODS: [ThresholdMethod; 4] = [
    ThresholdMethod::Visu,
    ThresholdMethod::Sure,
    ThresholdMethod::Bayes,
    ThresholdMethod::Spc,
];

/// Gaussian white noise with standard deviation `sd`.
fn noise(n: usize, sd: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, sd).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Detail bands shaped like a 5-level dyadic decomposition of 1024 samples,
/// coarsest first, with a few large "signal" coefficients in the coarse bands.
fn detail_bands(seed: u64) -> Vec<Vec<f64>> {
    let mut bands: Vec<Vec<f64>> = [32, 64, 128, 256, 512]
        .iter()
        .enumerate()
        .map(|(j, &n)| noise(n, 0.1, seed + j as u64))
        .collect();
    bands[0][3] += 4.0;
    bands[0][17] -= 3.0;
    bands[1][40] += 2.5;
    bands
}

// ---------------------------------------------------------------------------
// Threshold non-negativity
// ---------------------------------------------------------------------------
#[test]
fn thresholds_are_non_negative() {
    for seed in 0..5 {
        let bands = detail_bands(seed * 100);
        for method in METHODS {
            let config = ThresholdConfig::new(method).with_dim_t(128);
            let lambdas = estimate_thresholds(&bands, &config).unwrap();
            assert_eq!(lambdas.len(), bands.len());
            for (j, &l) in lambdas.iter().enumerate() {
                // Bayes may return +inf for a band without signal, never NaN.
                assert!(
                    l >= 0.0,
                    "{method} band {j}: threshold {l} must be non-negative"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Hard truncation is idempotent
// ---------------------------------------------------------------------------
#[test]
fn hard_truncation_idempotent() {
    let band = noise(256, 1.0, 7);
    for threshold in [0.0, 0.3, 1.0, 2.5] {
        let once = truncate(&band, threshold, TruncationMode::Hard).unwrap();
        let twice = truncate(&once, threshold, TruncationMode::Hard).unwrap();
        assert_eq!(once, twice, "threshold {threshold}");
    }
}

// ---------------------------------------------------------------------------
// Soft truncation shrinks and preserves sign
// ---------------------------------------------------------------------------
#[test]
fn soft_truncation_shrinks() {
    let band = noise(512, 1.0, 11);
    for threshold in [0.0, 0.1, 0.8, 3.0] {
        let out = truncate(&band, threshold, TruncationMode::Soft).unwrap();
        assert_eq!(out.len(), band.len());
        for (&x, &y) in band.iter().zip(out.iter()) {
            assert!(y.abs() <= x.abs(), "|{y}| > |{x}|");
            if y != 0.0 {
                assert_eq!(y.signum(), x.signum());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SPC-Threshold terminates and never grows the working set
// ---------------------------------------------------------------------------
#[test]
fn spc_converges() {
    for seed in 0..20 {
        let mut band = noise(200, 0.5, seed);
        // Heavy-tailed contamination.
        band[seed as usize] = 40.0;
        band[199 - seed as usize] = -25.0;
        for p in [1.0, 2.0, 3.0] {
            let out = spc_band(&band, p);
            assert!(out.retained <= band.len());
            assert!(out.retained >= 1);
            assert!(out.iterations <= band.len());
            assert!(out.threshold >= 0.0);
        }
    }
}

#[test]
fn spc_tiny_p_stops_instead_of_emptying() {
    let band = noise(50, 1.0, 3);
    let out = spc_band(&band, 0.01);
    assert!(out.retained >= 2 || out.iterations == 0);
    assert!(out.threshold.is_finite());
}

// ---------------------------------------------------------------------------
// End-to-end: VisuShrink on white noise with variance 0.01
// ---------------------------------------------------------------------------
#[test]
fn visu_on_known_noise_level() {
    let finest = noise(1024, 0.1, 2024);
    let lambdas = visu_shrink(&[finest]).unwrap();
    let upper = 3.0 * (2.0 * 1024f64.log10()).sqrt() * 0.1;
    assert!(
        lambdas[0] > 0.0 && lambdas[0] < upper,
        "threshold {} outside (0, {upper})",
        lambdas[0]
    );
}

// ---------------------------------------------------------------------------
// Truncating with estimated thresholds removes most pure-noise coefficients
// ---------------------------------------------------------------------------
#[test]
fn visu_hard_removes_noise_keeps_spikes() {
    let bands = detail_bands(42);
    let lambdas = visu_shrink(&bands).unwrap();
    let coarse = truncate(&bands[0], lambdas[0], TruncationMode::Hard).unwrap();
    assert!(coarse[3] > 3.0);
    assert!(coarse[17] < -2.0);

    let finest = truncate(&bands[4], lambdas[4], TruncationMode::Hard).unwrap();
    let survivors = finest.iter().filter(|&&x| x != 0.0).count();
    assert!(
        survivors < finest.len() / 20,
        "{survivors} of {} noise coefficients survived",
        finest.len()
    );
}

#[test]
fn deterministic() {
    let bands = detail_bands(9);
    for method in METHODS {
        let config = ThresholdConfig::new(method).with_dim_t(64);
        let a = estimate_thresholds(&bands, &config).unwrap();
        let b = estimate_thresholds(&bands, &config).unwrap();
        assert_eq!(a, b, "{method} must be deterministic");
    }
}
