use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level wavefilt configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WavefiltConfig {
    /// Method selection and threshold settings.
    #[serde(default)]
    pub filter: FilterToml,

    /// CUSUM control parameters.
    #[serde(default)]
    pub cusum: CusumToml,
}

impl WavefiltConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_p")]
    pub p: f64,
    #[serde(default = "default_dim_t")]
    pub dim_t: usize,
}

impl Default for FilterToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            mode: default_mode(),
            p: default_p(),
            dim_t: default_dim_t(),
        }
    }
}

fn default_method() -> String {
    "visu".to_string()
}
fn default_mode() -> String {
    "hard".to_string()
}
fn default_p() -> f64 {
    3.0
}
fn default_dim_t() -> usize {
    1024
}

/// A value given once for all bands, or once per detail band.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrList {
    Scalar(f64),
    List(Vec<f64>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CusumToml {
    #[serde(default = "default_k")]
    pub k: ScalarOrList,
    #[serde(default = "default_h")]
    pub h: ScalarOrList,
}

impl Default for CusumToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            h: default_h(),
        }
    }
}

fn default_k() -> ScalarOrList {
    ScalarOrList::Scalar(0.5)
}
fn default_h() -> ScalarOrList {
    ScalarOrList::Scalar(5.0)
}
