//! JSON input and output for the CLI.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse JSON: {}", path.display()))
}

/// Reads a coefficient set stored as a JSON array of arrays, approximation
/// band first.
pub fn read_coefficients(path: &Path) -> Result<Vec<Vec<f64>>> {
    read_json(path)
}

/// Reads a signal stored as a flat JSON array.
pub fn read_signal(path: &Path) -> Result<Vec<f64>> {
    read_json(path)
}

/// Writes `value` as pretty-printed JSON. Non-finite floats become `null`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("failed to write JSON: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))
}
