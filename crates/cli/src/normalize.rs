// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison-form normalization for certificate fields and queries.

/// Lowercase and trim a value for comparison. Missing values normalize to "".
pub fn normalize(value: Option<&str>) -> String {
    value.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

/// Shorthand for [`normalize`] on a present value.
pub fn normalize_str(value: &str) -> String {
    normalize(Some(value))
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
