// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Documents are buffered and written whole, pretty-printed.

use std::io::Write;

use serde::Serialize;

use super::timestamp;
use crate::matcher::{LookupOutcome, MatchKind};
use crate::record::CertificateRecord;

/// Lookup result document.
#[derive(Debug, Serialize)]
pub struct LookupOutput<'a> {
    pub timestamp: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<MatchKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<&'a CertificateRecord>,
}

impl<'a> LookupOutput<'a> {
    pub fn new(outcome: &'a LookupOutcome) -> Self {
        let (matched_by, certificate) = match outcome {
            LookupOutcome::Found { record, kind } => (Some(*kind), Some(record)),
            LookupOutcome::NotFound => (None, None),
        };
        Self {
            timestamp: timestamp(),
            found: outcome.is_found(),
            matched_by,
            certificate,
        }
    }
}

/// Store listing document.
#[derive(Debug, Serialize)]
pub struct ListOutput<'a> {
    pub timestamp: String,
    pub count: usize,
    pub certificates: &'a [CertificateRecord],
}

impl<'a> ListOutput<'a> {
    pub fn new(certificates: &'a [CertificateRecord]) -> Self {
        Self {
            timestamp: timestamp(),
            count: certificates.len(),
            certificates,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_outcome(&mut self, outcome: &LookupOutcome) -> std::io::Result<()> {
        self.write(&LookupOutput::new(outcome))
    }

    pub fn write_list(&mut self, records: &[CertificateRecord]) -> std::io::Result<()> {
        self.write(&ListOutput::new(records))
    }

    fn write<T: Serialize>(&mut self, document: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(document).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
