//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration for a verification run.
///
/// Server addresses, the default domain, and the behavioral knobs normally
/// come from the profile file (`dnsvet.toml`, see
/// [`Profile`](crate::config::Profile)); every profile setting can be
/// overridden here for one-off runs.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dnsvet",
    about = "Confirms staged DNS changes against production nameservers"
)]
pub struct Config {
    /// File of change specifications, one per line ("-" for stdin)
    pub file: PathBuf,

    /// Verify a completed promotion: expect PROD to show the changes
    #[arg(long)]
    pub verify: bool,

    /// Explicit profile file (skips ./dnsvet.toml and ~/.dnsvet.toml discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Test (staging) nameserver address, overriding the profile
    #[arg(long)]
    pub server_test: Option<String>,

    /// Production nameserver address, overriding the profile
    #[arg(long)]
    pub server_prod: Option<String>,

    /// Domain suffix appended to bare hostnames, overriding the profile
    #[arg(long)]
    pub default_domain: Option<String>,

    /// Seconds to pause between checks, overriding the profile
    #[arg(long)]
    pub sleep: Option<f64>,

    /// Suppress TTL-mismatch warnings on renames
    #[arg(long)]
    pub ignore_ttl: bool,

    /// Skip reverse-DNS sub-checks entirely
    #[arg(long)]
    pub no_reverse_dns: bool,
}
