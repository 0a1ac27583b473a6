//! bsearch: binary search a sorted list of integers read from stdin.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use bs_01_binary_search::BinarySearchService;
use bs_cli::{run, Args};
use bs_telemetry::{init_logging, TelemetryConfig};

fn init_telemetry(args: &Args) -> Result<()> {
    let config = args.telemetry_config(TelemetryConfig::from_env());
    init_logging(&config).context("failed to initialize logging")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_telemetry(&args) {
        eprintln!("Warning: {:#}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let service = BinarySearchService::new();

    match run(stdin.lock(), &mut out, &service, &args.driver_config()) {
        Ok(summary) => {
            debug!(?summary, "Run complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Errors share stdout with the prompts they answer.
            let _ = writeln!(out, "Error: {}", e);
            let _ = out.flush();
            ExitCode::from(e.exit_code())
        }
    }
}
