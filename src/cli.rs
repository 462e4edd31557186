use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wavefilt statistical wavelet-coefficient filter.
#[derive(Parser)]
#[command(
    name = "wavefilt",
    version,
    about = "Threshold and CUSUM filtering of wavelet coefficients"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Filter the detail bands of a coefficient set.
    Filter(FilterArgs),
    /// Compare a signal before and after filtering.
    Quality(QualityArgs),
}

/// Arguments for the `filter` subcommand.
#[derive(clap::Args)]
pub struct FilterArgs {
    /// Path to TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to input JSON coefficient set (array of bands, approximation first).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the filtered JSON output.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Override `[filter].method` from config.
    #[arg(short, long)]
    pub method: Option<String>,

    /// Override `[filter].mode` from config (hard or soft).
    #[arg(long)]
    pub mode: Option<String>,
}

/// Arguments for the `quality` subcommand.
#[derive(clap::Args)]
pub struct QualityArgs {
    /// Path to JSON array holding the signal before filtering.
    #[arg(long)]
    pub noisy: PathBuf,

    /// Path to JSON array holding the signal after filtering.
    #[arg(long)]
    pub filtered: PathBuf,

    /// Path to JSON array holding the noise-free reference signal.
    #[arg(long)]
    pub ideal: Option<PathBuf>,

    /// Path for the metrics JSON. Printed to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
