//! Change-specification parsing.
//!
//! One line of text describes one intended DNS change:
//!
//! ```text
//! add <hostname> value <value>
//! remove <hostname>
//! rename <old> to <new>
//! change <hostname> to <value>
//! ```
//!
//! Keywords are case-sensitive and tokens are whitespace-delimited. Hostname
//! syntax is not validated here; canonicalization and comparison belong to
//! the verification engine.

use std::fmt;

use thiserror::Error;

/// A declared DNS change, one per specification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
    /// A new record: `hostname` should resolve to `value`.
    Add {
        /// Name being added.
        hostname: String,
        /// Intended record data (address or CNAME target).
        value: String,
    },
    /// An existing record goes away.
    Remove {
        /// Name being removed.
        hostname: String,
    },
    /// The record keeps its value but moves to a new name.
    Rename {
        /// Name before the change.
        old_name: String,
        /// Name after the change.
        new_name: String,
    },
    /// The record keeps its name but gets a new value.
    Change {
        /// Name whose record is changing.
        hostname: String,
        /// Intended record data after the change.
        new_value: String,
    },
}

impl fmt::Display for ChangeRecord {
    /// Emits the canonical specification line, so that
    /// `parse_line(&record.to_string())` round-trips.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeRecord::Add { hostname, value } => write!(f, "add {hostname} value {value}"),
            ChangeRecord::Remove { hostname } => write!(f, "remove {hostname}"),
            ChangeRecord::Rename { old_name, new_name } => {
                write!(f, "rename {old_name} to {new_name}")
            }
            ChangeRecord::Change { hostname, new_value } => {
                write!(f, "change {hostname} to {new_value}")
            }
        }
    }
}

/// Failure to interpret a change-specification line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token count or keyword positions match none of the four forms.
    #[error("malformed change specification: {line:?}")]
    Malformed {
        /// The offending line, trimmed.
        line: String,
    },
}

/// Parses a single change-specification line.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] when the line matches none of the four
/// grammar forms.
pub fn parse_line(line: &str) -> Result<ChangeRecord, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["add", hostname, "value", value] => Ok(ChangeRecord::Add {
            hostname: (*hostname).to_string(),
            value: (*value).to_string(),
        }),
        ["remove", hostname] => Ok(ChangeRecord::Remove {
            hostname: (*hostname).to_string(),
        }),
        ["rename", old_name, "to", new_name] => Ok(ChangeRecord::Rename {
            old_name: (*old_name).to_string(),
            new_name: (*new_name).to_string(),
        }),
        ["change", hostname, "to", new_value] => Ok(ChangeRecord::Change {
            hostname: (*hostname).to_string(),
            new_value: (*new_value).to_string(),
        }),
        _ => Err(ParseError::Malformed {
            line: line.trim().to_string(),
        }),
    }
}
