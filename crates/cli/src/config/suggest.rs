// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key name suggestions for config validation.

use std::path::Path;

/// Suggest a known key for a likely typo.
pub fn suggest_key<'a>(unknown: &str, known: &[&'a str]) -> Option<&'a str> {
    if unknown.is_empty() {
        return None;
    }

    // Common variations of the top-level tables
    let alias = match unknown {
        "certificate" | "certs" | "cert" | "records" | "entries" => Some("certificates"),
        "alias" | "params" | "parameters" => Some("aliases"),
        "search" | "verify" => Some("lookup"),
        "latency" | "wait" => Some("delay"),
        _ => None,
    };
    if let Some(suggested) = alias
        && known.contains(&suggested)
    {
        return Some(suggested);
    }

    // Prefix matching (require at least 3 chars to avoid false positives)
    if unknown.len() >= 3 {
        let lower = unknown.to_lowercase();
        for &name in known {
            if name.starts_with(&lower) || lower.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about an unknown key, with a suggestion when one is close.
pub fn warn_unknown_key(path: &Path, key: &str, known: &[&str]) {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    match suggest_key(leaf, known) {
        Some(suggested) => eprintln!(
            "certlookup: warning: {}: unrecognized field `{}` (ignored). Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "certlookup: warning: {}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
