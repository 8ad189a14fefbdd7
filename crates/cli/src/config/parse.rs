// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;
use std::time::Duration;

use serde_json::Value;

use super::LookupConfig;
use super::duration::parse_duration;
use crate::error::{Error, Result};
use crate::query::AliasConfig;
use crate::record::CertificateRecord;

/// Known keys in the `[lookup]` table.
pub(super) const KNOWN_LOOKUP_KEYS: &[&str] = &["delay"];

/// Known keys in the `[aliases]` table.
pub(super) const KNOWN_ALIAS_KEYS: &[&str] = &["number", "name"];

/// Parse a TOML array of strings into a Vec<String>.
fn parse_string_array(value: Option<&toml::Value>) -> Option<Vec<String>> {
    value?.as_array().map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    })
}

/// Parse a TOML array of strings with a default function.
fn parse_string_array_or_else<F>(value: Option<&toml::Value>, default: F) -> Vec<String>
where
    F: FnOnce() -> Vec<String>,
{
    parse_string_array(value).unwrap_or_else(default)
}

/// Parse a delay given as a duration string or whole milliseconds.
fn parse_delay(value: Option<&toml::Value>, path: &Path) -> Result<Duration> {
    match value {
        None => Ok(LookupConfig::default_delay()),
        Some(toml::Value::String(s)) => parse_duration(s).map_err(|e| Error::Config {
            message: format!("lookup.delay: {e}"),
            path: Some(path.to_path_buf()),
        }),
        Some(toml::Value::Integer(ms)) if *ms >= 0 => Ok(Duration::from_millis(ms.unsigned_abs())),
        Some(other) => Err(Error::Config {
            message: format!(
                "lookup.delay: expected a duration like \"1100ms\", got {}",
                other.type_str()
            ),
            path: Some(path.to_path_buf()),
        }),
    }
}

/// Parse the `[lookup]` table.
pub(super) fn parse_lookup_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<LookupConfig> {
    let Some(toml::Value::Table(t)) = value else {
        return Ok(LookupConfig::default());
    };

    Ok(LookupConfig {
        delay: parse_delay(t.get("delay"), path)?,
    })
}

/// Parse the `[aliases]` table.
pub(super) fn parse_alias_config(value: Option<&toml::Value>) -> AliasConfig {
    let Some(toml::Value::Table(t)) = value else {
        return AliasConfig::default();
    };

    AliasConfig {
        number: parse_string_array_or_else(t.get("number"), AliasConfig::default_number),
        name: parse_string_array_or_else(t.get("name"), AliasConfig::default_name),
    }
}

/// Parse the `[[certificates]]` array. `None` when the key is absent.
pub(super) fn parse_certificates(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<Option<Vec<CertificateRecord>>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let toml::Value::Array(entries) = value else {
        return Err(Error::Config {
            message: format!(
                "certificates: expected an array of tables, got {}",
                value.type_str()
            ),
            path: Some(path.to_path_buf()),
        });
    };

    let records = entries
        .iter()
        .map(|entry| CertificateRecord::from_value(&toml_to_json(entry)))
        .collect();
    Ok(Some(records))
}

/// Convert a TOML value to JSON, rendering datetimes as their TOML text.
pub(super) fn toml_to_json(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::from(*i),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.iter().map(toml_to_json).collect()),
        toml::Value::Table(t) => Value::Object(
            t.iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
    }
}
