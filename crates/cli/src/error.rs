// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Certlookup error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A store mutation was given structurally invalid input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Lookup was called with neither a number nor a name.
    #[error("enter a certificate number or a recipient name")]
    EmptyQuery,

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using certlookup Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Certificate found (or command completed)
    Success = 0,
    /// No certificate matched the query
    NotFound = 1,
    /// Invalid input: config, arguments, validation, empty query
    UsageError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Validation(_)
            | Error::EmptyQuery
            | Error::Config { .. }
            | Error::Argument(_) => ExitCode::UsageError,
            Error::Io { .. } | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
