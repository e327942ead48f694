//! Error type definitions.
//!
//! Two fatal error families live here: configuration problems and
//! initialization failures. Malformed change lines are [`crate::parser::ParseError`],
//! DNS status codes are [`crate::resolver::ResolveStatus`] values the engine
//! branches on, and business-rule violations are failed verdicts — none of
//! those are errors in the `Result` sense.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Error types for loading and saving the configuration profile.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The profile file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The profile file is not valid TOML (or has unknown keys).
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The profile file could not be written.
    #[error("cannot write config file {path}: {source}")]
    Write {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The profile could not be serialized to TOML.
    #[error("cannot serialize config for {path}: {source}")]
    Serialize {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::ser::Error,
    },

    /// A setting every run needs is absent from file and command line alike.
    #[error("configuration is missing required setting {0:?}")]
    MissingField(&'static str),
}
