//! Quality command: compare a signal before and after filtering.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use wavefilt_quality::{
    SnrMethod, cnr_amplitude_std_noise, differential_snr_db, mean_squared_error,
};

use crate::cli::QualityArgs;
use crate::io;

/// Metrics of one noisy/filtered pair.
#[derive(Debug, Serialize)]
pub struct QualityReport {
    /// Differential SNR in dB, keyed by method name.
    pub differential_snr_db: BTreeMap<&'static str, f64>,
    /// Absolute errors, only when the ideal signal is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub against_ideal: Option<IdealComparison>,
}

#[derive(Debug, Serialize)]
pub struct IdealComparison {
    pub mse_noisy: f64,
    pub mse_filtered: f64,
    pub cnr_noisy: f64,
    pub cnr_filtered: f64,
}

/// Computes every metric that the available signals allow.
pub fn compute(noisy: &[f64], filtered: &[f64], ideal: Option<&[f64]>) -> Result<QualityReport> {
    let mut differential = BTreeMap::new();
    for method in SnrMethod::ALL {
        if method.requires_ideal() && ideal.is_none() {
            continue;
        }
        let db = differential_snr_db(noisy, filtered, method, ideal)
            .with_context(|| format!("failed to compute {method}"))?;
        differential.insert(method.name(), db);
    }

    let against_ideal = match ideal {
        Some(ideal) => {
            let noise: Vec<f64> = noisy.iter().zip(ideal).map(|(n, i)| n - i).collect();
            let residual: Vec<f64> = filtered.iter().zip(ideal).map(|(f, i)| f - i).collect();
            Some(IdealComparison {
                mse_noisy: mean_squared_error(noisy, ideal)?,
                mse_filtered: mean_squared_error(filtered, ideal)?,
                cnr_noisy: cnr_amplitude_std_noise(ideal, &noise)?,
                cnr_filtered: cnr_amplitude_std_noise(ideal, &residual)?,
            })
        }
        None => None,
    };

    Ok(QualityReport {
        differential_snr_db: differential,
        against_ideal,
    })
}

/// Run the quality evaluation.
pub fn run(args: QualityArgs) -> Result<()> {
    let _cmd = info_span!("quality").entered();
    let noisy = io::read_signal(&args.noisy)?;
    let filtered = io::read_signal(&args.filtered)?;
    let ideal = args.ideal.as_deref().map(io::read_signal).transpose()?;
    info!(n = noisy.len(), has_ideal = ideal.is_some(), "signals loaded");

    let report = compute(&noisy, &filtered, ideal.as_deref())?;

    match &args.output {
        Some(path) => {
            io::write_json(path, &report)?;
            info!(path = %path.display(), "metrics written");
        }
        None => {
            let json = serde_json::to_string_pretty(&report).context("failed to encode metrics")?;
            println!("{json}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn without_ideal_only_ideal_free_methods() {
        let report = compute(&[2.0, -2.0, 2.0, -2.0], &[1.0, -1.0, 1.0, -1.0], None).unwrap();
        let keys: Vec<_> = report.differential_snr_db.keys().copied().collect();
        assert_eq!(keys, vec!["mean_standard_noise", "square_mean_error"]);
        assert!(report.against_ideal.is_none());
    }

    #[test]
    fn with_ideal_all_methods() {
        let ideal = [0.0, 1.0, 0.0, 1.0];
        let noisy = [0.4, 0.6, -0.4, 1.4];
        let filtered = [0.2, 0.8, -0.2, 1.2];
        let report = compute(&noisy, &filtered, Some(&ideal[..])).unwrap();
        assert_eq!(report.differential_snr_db.len(), 4);
        assert_relative_eq!(
            report.differential_snr_db["variances"],
            10.0 * 4f64.log10(),
            epsilon = 1e-9
        );
        let cmp = report.against_ideal.unwrap();
        assert_relative_eq!(cmp.mse_noisy, 0.16, epsilon = 1e-12);
        assert_relative_eq!(cmp.mse_filtered, 0.04, epsilon = 1e-12);
        assert!(cmp.cnr_filtered > cmp.cnr_noisy);
    }

    #[test]
    fn mismatched_lengths_fail() {
        assert!(compute(&[1.0, 2.0], &[1.0], None).is_err());
    }

    #[test]
    fn run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let noisy = dir.path().join("noisy.json");
        let filtered = dir.path().join("filtered.json");
        let output = dir.path().join("metrics.json");
        io::write_json(&noisy, &vec![1.0, 3.0, 2.0]).unwrap();
        io::write_json(&filtered, &vec![1.5, 2.5, 2.0]).unwrap();

        run(QualityArgs {
            noisy,
            filtered,
            ideal: None,
            output: Some(output.clone()),
        })
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert!(json["differential_snr_db"]["square_mean_error"].is_number());
        assert!(json.get("against_ideal").is_none());
    }
}
