mod cli;
mod config;
mod convert;
mod filter_cmd;
mod io;
mod logging;
mod quality_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Filter(args) => filter_cmd::run(args),
        Command::Quality(args) => quality_cmd::run(args),
    }
}
