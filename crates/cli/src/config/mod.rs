// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles certlookup.toml parsing with version validation and unknown key
//! warnings.

pub mod duration;
mod parse;
mod suggest;

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::builtin;
use crate::controller::DEFAULT_DELAY;
use crate::error::{Error, Result};
use crate::query::AliasConfig;
use crate::record::CertificateRecord;
use crate::store::CertificateStore;
use parse::{
    KNOWN_ALIAS_KEYS, KNOWN_LOOKUP_KEYS, parse_alias_config, parse_certificates,
    parse_lookup_config,
};
use suggest::warn_unknown_key;

pub use suggest::suggest_key;

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "certlookup.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "lookup", "aliases", "certificates"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    lookup: Option<toml::Value>,

    #[serde(default)]
    aliases: Option<toml::Value>,

    #[serde(default)]
    certificates: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Lookup behavior.
    pub lookup: LookupConfig,

    /// URL parameter names for each query field.
    pub aliases: AliasConfig,

    /// Initial certificate list (None = built-in demo list).
    pub certificates: Option<Vec<CertificateRecord>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            lookup: LookupConfig::default(),
            aliases: AliasConfig::default(),
            certificates: None,
        }
    }
}

impl Config {
    /// Build the initial store from the configured or built-in list.
    pub fn initial_store(&self) -> CertificateStore {
        match &self.certificates {
            Some(records) => CertificateStore::from_records(records.clone()),
            None => CertificateStore::from_records(builtin::demo_certificates()),
        }
    }
}

/// Lookup behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Simulated latency before each lookup (default: 1100ms).
    pub delay: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            delay: Self::default_delay(),
        }
    }
}

impl LookupConfig {
    pub(crate) fn default_delay() -> Duration {
        DEFAULT_DELAY
    }
}

/// Load and validate config from a file path (strict mode).
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content, rejecting unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    build(content, path, &mut |key, _known| {
        Err(Error::Config {
            message: format!("unknown field `{}`", key),
            path: Some(path.to_path_buf()),
        })
    })
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    build(content, path, &mut |key, known| {
        warn_unknown_key(path, key, known);
        Ok(())
    })
}

type UnknownKeyHandler<'a> = dyn FnMut(&str, &[&str]) -> Result<()> + 'a;

fn build(content: &str, path: &Path, on_unknown: &mut UnknownKeyHandler<'_>) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade certlookup to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in flexible.unknown.keys() {
        on_unknown(key, KNOWN_KEYS)?;
    }
    for_each_unknown(flexible.lookup.as_ref(), "lookup", KNOWN_LOOKUP_KEYS, on_unknown)?;
    for_each_unknown(flexible.aliases.as_ref(), "aliases", KNOWN_ALIAS_KEYS, on_unknown)?;

    let lookup = parse_lookup_config(flexible.lookup.as_ref(), path)?;
    let aliases = parse_alias_config(flexible.aliases.as_ref());
    let certificates = parse_certificates(flexible.certificates.as_ref(), path)?;

    tracing::trace!(
        delay_ms = u64::try_from(lookup.delay.as_millis()).unwrap_or(u64::MAX),
        certificates = certificates.as_ref().map(Vec::len),
        "parsed config"
    );

    Ok(Config {
        version: flexible.version,
        lookup,
        aliases,
        certificates,
    })
}

/// Report keys of a nested table that are not in `known`.
fn for_each_unknown(
    value: Option<&toml::Value>,
    table: &str,
    known: &[&str],
    on_unknown: &mut UnknownKeyHandler<'_>,
) -> Result<()> {
    let Some(toml::Value::Table(t)) = value else {
        return Ok(());
    };
    for key in t.keys() {
        if !known.contains(&key.as_str()) {
            on_unknown(&format!("{}.{}", table, key), known)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
