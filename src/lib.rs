//! dnsvet library: staged DNS change verification
//!
//! This library compares DNS record state between a test (staging) nameserver
//! and a production nameserver to confirm that a declared set of changes —
//! additions, removals, renames, value changes — has been staged correctly
//! before promotion, and that production reflects it afterwards.
//!
//! # Example
//!
//! ```no_run
//! use dnsvet::{run_checks, Config};
//! use clap::Parser;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["dnsvet", "changes.txt", "--server-test", "1.2.3.5", "--server-prod", "1.2.3.4"]);
//! let report = run_checks(config).await?;
//! println!("{} passed, {} failed", report.passed, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from within an async context.

#![warn(missing_docs)]

pub mod checks;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod parser;
pub mod report;
pub mod resolver;

// Re-export public API
pub use checks::{Checker, Mode, Verdict};
pub use config::{Config, LogFormat, LogLevel, Profile};
pub use parser::{parse_line, ChangeRecord, ParseError};
pub use run::{run_checks, RunReport};

// Internal run module (drives one verification run end to end)
mod run {
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{debug, info};
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::checks::{Checker, Mode, VerdictBuilder};
    use crate::config::{Config, Profile};
    use crate::initialization::init_resolver;
    use crate::parser::parse_line;
    use crate::report;

    /// Results of a verification run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of change specifications processed.
        pub total: usize,
        /// Number of checks that passed.
        pub passed: usize,
        /// Number of checks that failed, including unparsable lines.
        pub failed: usize,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs every change specification in the input against both nameservers.
    ///
    /// Reads change lines from the configured file (or stdin for `-`),
    /// skipping blank lines and `#` comments. Each line is parsed and checked
    /// in order; verdicts are rendered as they complete. A malformed line
    /// becomes a failed verdict rather than aborting the run.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - The configuration profile is missing or invalid
    /// - The resolver cannot be built from the configured server addresses
    /// - The input file cannot be opened
    pub async fn run_checks(config: Config) -> Result<RunReport> {
        let profile = Profile::resolve(&config).context("Failed to resolve configuration")?;
        let resolver =
            init_resolver(&profile).context("Failed to initialize DNS resolver")?;
        let mode = if config.verify {
            Mode::Verify
        } else {
            Mode::Check
        };

        let is_stdin = config.file.as_os_str() == "-";
        let mut stdin_lines = if is_stdin {
            info!("Reading change specifications from stdin");
            Some(BufReader::new(tokio::io::stdin()).lines())
        } else {
            None
        };
        let mut file_lines = if !is_stdin {
            let file = tokio::fs::File::open(&config.file)
                .await
                .context("Failed to open change specification file")?;
            Some(BufReader::new(file).lines())
        } else {
            None
        };

        match mode {
            Mode::Check => info!(
                "check mode: staged changes expected on TEST={}, pre-image on PROD={}",
                profile.server_test, profile.server_prod
            ),
            Mode::Verify => info!(
                "verify mode: promoted changes expected on PROD={}",
                profile.server_prod
            ),
        }

        let checker = Checker::new(&profile, resolver.as_ref());
        let start_time = Instant::now();
        let mut total = 0usize;
        let mut passed = 0usize;
        let mut failed = 0usize;

        loop {
            let line_result = if is_stdin {
                stdin_lines
                    .as_mut()
                    .expect("stdin_lines should be Some when is_stdin is true")
                    .next_line()
                    .await
            } else {
                file_lines
                    .as_mut()
                    .expect("file_lines should be Some when is_stdin is false")
                    .next_line()
                    .await
            };
            let line = match line_result {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => return Err(e).context("Failed to read change specification line"),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if total > 0 && profile.sleep > 0.0 {
                tokio::time::sleep(Duration::from_secs_f64(profile.sleep)).await;
            }

            let verdict = match parse_line(trimmed) {
                Ok(record) => {
                    debug!("running {record}");
                    checker.check(&record, mode).await
                }
                Err(e) => VerdictBuilder::new().fail(e.to_string()),
            };
            report::render(&verdict);

            total += 1;
            if verdict.passed {
                passed += 1;
            } else {
                failed += 1;
            }
        }

        Ok(RunReport {
            total,
            passed,
            failed,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
