//! Error types for statcode.
//!
//! This module defines the error taxonomy using `thiserror`. Every failure mode is
//! its own variant so callers can tell "key absent" apart from "malformed entry"
//! apart from "formatting failure" instead of collapsing them into a single
//! not-found signal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`'s run function
//!   - [`DataError`] - Reference table could not be read, parsed or validated (fatal)
//!   - [`LookupError`] - User token is empty or not present in the table
//!   - [`FormatError`] - Content could not be laid out
//!   - [`ConfigError`] - Configuration file could not be read or parsed (fatal)
//!   - [`TuiError`] - Terminal acquisition or rendering failures (fatal)
//!
//! # Recovery Strategy
//!
//! There are no retries anywhere. Every error ends the current invocation with a
//! message on stderr and a non-zero exit code (see [`AppError::exit_code`]).
//! Scroll clamping is never reported as an error.

use crate::config::ConfigError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a token that is not in the reference table.
pub const EXIT_NOT_FOUND: u8 = 1;
/// Exit code for configuration or reference data startup failures.
pub const EXIT_STARTUP: u8 = 2;
/// Exit code for terminal acquisition or rendering failures.
pub const EXIT_TERMINAL: u8 = 3;

/// Top-level application error encompassing all failure modes.
///
/// Domain-specific errors convert into `AppError` via `From`, so the run function
/// composes with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reference table unavailable or invalid.
    #[error("Failed to load reference data: {0}")]
    Data(#[from] DataError),

    /// The requested status code or header is unknown.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Layout of the requested content failed.
    #[error("Failed to format content: {0}")]
    Format(#[from] FormatError),

    /// Configuration file unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the interactive view cannot run. The terminal
    /// guard restores the previous terminal mode before this reaches the user.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Lookup(_) => EXIT_NOT_FOUND,
            AppError::Data(_) | AppError::Config(_) | AppError::Format(_) => EXIT_STARTUP,
            AppError::Terminal(_) => EXIT_TERMINAL,
        }
    }
}

/// Errors raised while loading the reference table.
///
/// All of these are startup errors: the process exits before the interactive
/// view is entered.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file could not be read.
    #[error("Failed to read reference data at {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid TOML or does not match the entry schema.
    #[error("Invalid reference data in {origin}: {reason}")]
    Parse {
        /// Human-readable origin (file path or "embedded table").
        origin: String,
        /// Parse error details.
        reason: String,
    },

    /// An entry has an empty or whitespace-only key.
    #[error("Entry #{position} has an empty key")]
    EmptyKey {
        /// Zero-based position of the entry in the file.
        position: usize,
    },

    /// Two entries normalize to the same key.
    #[error("Duplicate reference key: {key}")]
    DuplicateKey {
        /// The normalized key that appears twice.
        key: String,
    },

    /// An entry is missing a required field value.
    #[error("Malformed entry {key}: field `{field}` is empty")]
    MalformedEntry {
        /// Normalized key of the offending entry.
        key: String,
        /// Name of the empty field.
        field: &'static str,
    },
}

/// Errors returned by the lookup resolver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The token was empty after trimming.
    #[error("No status code or header given")]
    EmptyToken,

    /// The normalized token is not present in the table.
    #[error("Sorry, statcode doesn't recognize: {token}")]
    NotFound {
        /// The token as the user typed it.
        token: String,
    },
}

/// Errors returned by the content formatter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// List mode was requested over a table without entries.
    #[error("Reference table has no entries to list")]
    EmptyTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_token() {
        let err = LookupError::NotFound {
            token: "999".to_string(),
        };
        assert_eq!(err.to_string(), "Sorry, statcode doesn't recognize: 999");
    }

    #[test]
    fn lookup_error_is_transparent_in_app_error() {
        let err: AppError = LookupError::NotFound {
            token: "teapot".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Sorry, statcode doesn't recognize: teapot");
    }

    #[test]
    fn exit_codes_distinguish_failure_kinds() {
        let lookup: AppError = LookupError::EmptyToken.into();
        let data: AppError = DataError::DuplicateKey {
            key: "200".to_string(),
        }
        .into();
        let format: AppError = FormatError::EmptyTable.into();
        let terminal: AppError = TuiError::from(std::io::Error::other("no tty")).into();

        assert_eq!(lookup.exit_code(), EXIT_NOT_FOUND);
        assert_eq!(data.exit_code(), EXIT_STARTUP);
        assert_eq!(format.exit_code(), EXIT_STARTUP);
        assert_eq!(terminal.exit_code(), EXIT_TERMINAL);
    }

    #[test]
    fn malformed_entry_reports_field() {
        let err = DataError::MalformedEntry {
            key: "200".to_string(),
            field: "message",
        };
        assert_eq!(err.to_string(), "Malformed entry 200: field `message` is empty");
    }
}
