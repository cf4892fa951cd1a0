//! sif2sis: Voyager patron SIF to Alma SIS user XML.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sif_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_convert, run_layout};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run one subcommand; `Ok(false)` when some input file failed.
fn run(command: Command) -> Result<bool> {
    match command {
        Command::Convert(args) => {
            let report = run_convert(&args)?;
            print_summary(&report);
            Ok(!report.has_failures())
        }
        Command::Layout(args) => run_layout(&args).map(|()| true),
    }
}
