//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use wavefilt_cusum::{BandParameter, CusumConfig, CusumMethod};
use wavefilt_filter::{FilterConfig, FilterMethod};
use wavefilt_threshold::{ThresholdConfig, TruncationMode};

use crate::config::{CusumToml, ScalarOrList, WavefiltConfig};

/// Parses a filter method name into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<FilterMethod> {
    s.parse::<FilterMethod>()
        .with_context(|| format!("invalid filter method {s:?}"))
}

/// Parses a truncation mode name into the corresponding enum variant.
pub fn parse_mode(s: &str) -> Result<TruncationMode> {
    match s.to_lowercase().as_str() {
        "hard" => Ok(TruncationMode::Hard),
        "soft" => Ok(TruncationMode::Soft),
        other => bail!("unknown truncation mode: {other:?}"),
    }
}

/// Converts a TOML scalar-or-list value into a [`BandParameter`].
pub fn band_parameter(v: &ScalarOrList) -> BandParameter {
    match v {
        ScalarOrList::Scalar(x) => BandParameter::Scalar(*x),
        ScalarOrList::List(xs) => BandParameter::PerBand(xs.clone()),
    }
}

/// Builds a [`CusumConfig`] from the TOML CUSUM section.
fn build_cusum_config(method: CusumMethod, cusum: &CusumToml) -> CusumConfig {
    CusumConfig::new(method)
        .with_k(band_parameter(&cusum.k))
        .with_h(band_parameter(&cusum.h))
}

/// Builds a [`FilterConfig`] from the TOML configuration.
///
/// `method` and `mode` override `[filter].method` and `[filter].mode`.
pub fn build_filter_config(
    config: &WavefiltConfig,
    method: Option<&str>,
    mode: Option<&str>,
) -> Result<FilterConfig> {
    let method = parse_method(method.unwrap_or(&config.filter.method))?;
    let mode = parse_mode(mode.unwrap_or(&config.filter.mode))?;

    let cfg = match method {
        FilterMethod::Threshold(m) => {
            let cfg = ThresholdConfig::new(m)
                .with_mode(mode)
                .with_p(config.filter.p)
                .with_dim_t(config.filter.dim_t);
            cfg.validate().context("invalid [filter] settings")?;
            FilterConfig::Threshold(cfg)
        }
        FilterMethod::Cusum(m) => FilterConfig::Cusum(build_cusum_config(m, &config.cusum)),
    };
    Ok(cfg)
}
