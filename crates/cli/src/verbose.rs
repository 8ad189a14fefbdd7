// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes `[verbose]` prefixed lines to stderr. Enabled with `--verbose`
//! or `CERTLOOKUP_DEBUG=1`.

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Logger enabled by the flag or the `CERTLOOKUP_DEBUG` env var.
    pub fn from_flag(verbose: bool) -> Self {
        Self::new(verbose || std::env::var("CERTLOOKUP_DEBUG").is_ok_and(|v| v == "1"))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if let Some(line) = self.format(msg) {
            eprintln!("{line}");
        }
    }

    fn format(&self, msg: &str) -> Option<String> {
        self.enabled.then(|| format!("[verbose] {msg}"))
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
