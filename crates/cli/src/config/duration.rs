// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings for the simulated lookup delay.
//!
//! Supports formats:
//! - `"1100ms"` → 1.1 seconds
//! - `"2s"` / `"1.5s"` → seconds, fractional allowed
//! - `"1m"` → 1 minute
//! - `"0"` → no delay

use std::time::Duration;

/// Parse a duration string into a Duration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }

    // Milliseconds before seconds: "ms" also ends with 's'
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Ok(Duration::from_millis(n));
    }

    if let Some(secs) = s.strip_suffix('s') {
        let n: f64 = secs
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        if n < 0.0 || !n.is_finite() {
            return Err(format!("invalid duration: {s}"));
        }
        return Ok(Duration::from_secs_f64(n));
    }

    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        let secs = n
            .checked_mul(60)
            .ok_or_else(|| format!("duration too large: {s}"))?;
        return Ok(Duration::from_secs(secs));
    }

    Err(format!(
        "invalid duration format: {s} (use 1100ms, 2s, or 1m)"
    ))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
