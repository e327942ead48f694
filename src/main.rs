//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnsvet` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit-code mapping (0 all passed, 1 some checks failed, 2 fatal error)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dnsvet::initialization::init_logger_with;
use dnsvet::{report, run_checks, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_checks(config).await {
        Ok(run) => {
            report::summary(&run);
            if run.failed > 0 {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dnsvet error: {:#}", e);
            process::exit(2);
        }
    }
}
