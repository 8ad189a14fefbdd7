// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lookup queries and URL parameter resolution.
//!
//! A verification link such as `https://example.org/verify?cert=146882`
//! pre-fills the lookup. The parameter names that count as a certificate
//! number or a recipient name come from [`AliasConfig`].

use percent_encoding::percent_decode_str;
use serde::Deserialize;

/// Number and name to search for. Either may be empty, not both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupQuery {
    pub number: String,
    pub name: String,
}

impl LookupQuery {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }

    /// True when neither field has any non-whitespace content.
    pub fn is_empty(&self) -> bool {
        self.number.trim().is_empty() && self.name.trim().is_empty()
    }

    /// Replace fields with explicitly given values.
    pub fn with_overrides(mut self, number: Option<&str>, name: Option<&str>) -> Self {
        if let Some(number) = number {
            self.number = number.to_string();
        }
        if let Some(name) = name {
            self.name = name.to_string();
        }
        self
    }
}

/// Decoded `key=value` pairs from a URL query string, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a full URL or a bare query string.
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, rest)) => rest,
            None => input,
        };
        let query = query.split_once('#').map_or(query, |(before, _)| before);

        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { pairs }
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Decode one form-encoded component: `+` is a space, then percent-decoding.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Parameter names accepted for each query field, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasConfig {
    #[serde(default = "AliasConfig::default_number")]
    pub number: Vec<String>,

    #[serde(default = "AliasConfig::default_name")]
    pub name: Vec<String>,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            number: Self::default_number(),
            name: Self::default_name(),
        }
    }
}

impl AliasConfig {
    pub(crate) fn default_number() -> Vec<String> {
        ["number", "cert", "certNumber", "certificate", "id"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub(crate) fn default_name() -> Vec<String> {
        ["name", "recipient", "fullName"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Build a query from URL parameters.
    ///
    /// For each field the first alias present with a non-blank value wins.
    pub fn resolve(&self, params: &QueryParams) -> LookupQuery {
        LookupQuery {
            number: first_present(params, &self.number),
            name: first_present(params, &self.name),
        }
    }
}

fn first_present(params: &QueryParams, aliases: &[String]) -> String {
    aliases
        .iter()
        .filter_map(|alias| params.get(alias))
        .find(|value| !value.trim().is_empty())
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
