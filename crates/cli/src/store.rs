// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-ordered certificate store.
//!
//! No two records share a normalized `(number, recipient)` key. On conflict
//! the first-inserted record is kept and later duplicates are discarded.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::CertificateRecord;

/// Keep the first occurrence of each dedupe key, preserving order.
pub fn dedupe(records: Vec<CertificateRecord>) -> Vec<CertificateRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.dedupe_key()))
        .collect()
}

/// Ordered collection of certificate records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateStore {
    records: Vec<CertificateRecord>,
}

impl CertificateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an initial record list, dropping duplicates.
    pub fn from_records(records: Vec<CertificateRecord>) -> Self {
        Self {
            records: dedupe(records),
        }
    }

    /// Records in store order.
    pub fn records(&self) -> &[CertificateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record.
    ///
    /// Number and recipient must be non-empty after trimming. The record is
    /// stored trimmed; if its key already exists the store is left as is.
    pub fn add_record(&mut self, entry: CertificateRecord) -> Result<()> {
        let entry = entry.trimmed();
        if entry.number.is_empty() {
            return Err(Error::Validation(
                "certificate number is required".to_string(),
            ));
        }
        if entry.recipient.is_empty() {
            return Err(Error::Validation("recipient name is required".to_string()));
        }

        tracing::debug!(number = %entry.number, "adding certificate");
        self.records.push(entry);
        self.records = dedupe(std::mem::take(&mut self.records));
        Ok(())
    }

    /// Replace the whole store from a list of loosely-typed entries.
    ///
    /// Fails only when `entries` is not an array. Entries with empty fields
    /// are kept. Returns the number of records after deduplication.
    pub fn replace_all(&mut self, entries: &Value) -> Result<usize> {
        let Value::Array(items) = entries else {
            return Err(Error::Validation(format!(
                "expected a list of certificates, got {}",
                value_kind(entries)
            )));
        };

        let records = items.iter().map(CertificateRecord::from_value).collect();
        self.records = dedupe(records);
        tracing::debug!(
            received = items.len(),
            kept = self.records.len(),
            "replaced certificate store"
        );
        Ok(self.records.len())
    }
}

/// JSON type name for error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
