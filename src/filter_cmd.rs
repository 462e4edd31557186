//! Filter command: run one filtering method over a JSON coefficient set.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use wavefilt_filter::{CoefficientSet, FilterMethod, Filtration, filter};

use crate::cli::FilterArgs;
use crate::config::WavefiltConfig;
use crate::convert;
use crate::io;

/// Filtered coefficients plus the per-band parameters that produced them.
#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub method: String,
    pub coefficients: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<Vec<f64>>,
}

impl FilterReport {
    fn new(method: FilterMethod, filtration: Filtration) -> Self {
        match filtration {
            Filtration::Threshold(f) => Self {
                method: method.to_string(),
                coefficients: f.coefficients.into_bands(),
                thresholds: Some(f.thresholds),
                k: None,
                h: None,
            },
            Filtration::Cusum(f) => Self {
                method: method.to_string(),
                k: Some(f.k()),
                h: Some(f.h()),
                coefficients: f.coefficients.into_bands(),
                thresholds: None,
            },
        }
    }
}

/// Run the filter pipeline.
pub fn run(args: FilterArgs) -> Result<()> {
    let _cmd = info_span!("filter").entered();
    // 1. Resolve configuration
    let config = match &args.config {
        Some(path) => WavefiltConfig::load(path)?,
        None => WavefiltConfig::default(),
    };
    let filter_config =
        convert::build_filter_config(&config, args.method.as_deref(), args.mode.as_deref())?;
    let method = filter_config.method();

    // 2. Read coefficients
    info!(path = %args.input.display(), "reading coefficients");
    let bands = io::read_coefficients(&args.input)?;
    let set = CoefficientSet::new(bands)
        .with_context(|| format!("invalid coefficient set: {}", args.input.display()))?;
    info!(
        %method,
        n_detail_bands = set.n_detail_bands(),
        "coefficients loaded"
    );

    // 3. Filter
    let filtration = filter(&set, &filter_config).context("filtering failed")?;

    // 4. Write report
    let report = FilterReport::new(method, filtration);
    io::write_json(&args.output, &report)?;
    info!(path = %args.output.display(), "filtered coefficients written");

    Ok(())
}
