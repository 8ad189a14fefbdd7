// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Certificate records and coercion from loosely-typed entries.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::normalize_str;

/// Accepted field names for each record field, in lookup order.
const NUMBER_FIELDS: &[&str] = &["number"];
const RECIPIENT_FIELDS: &[&str] = &["recipient", "name"];
const QUALIFICATION_FIELDS: &[&str] = &["qualification", "award"];
const AWARD_DATE_FIELDS: &[&str] = &["award_date", "awardDate", "date"];
const STATUS_FIELDS: &[&str] = &["status"];

/// One issued credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    /// Certificate identifier (compared case-insensitively).
    pub number: String,
    /// Full name of the recipient (compared case-insensitively).
    pub recipient: String,
    /// Display-only description of the award.
    pub qualification: String,
    /// Display-only date string; never parsed.
    pub award_date: String,
    /// Display-only verification status, e.g. "Authentic & Valid".
    pub status: String,
}

impl CertificateRecord {
    /// Build a record from its parts.
    pub fn new(
        number: impl Into<String>,
        recipient: impl Into<String>,
        qualification: impl Into<String>,
        award_date: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            recipient: recipient.into(),
            qualification: qualification.into(),
            award_date: award_date.into(),
            status: String::new(),
        }
    }

    /// Set the display status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Coerce a loosely-typed entry into a record.
    ///
    /// Every field becomes a string; missing or null fields become empty.
    /// Entries that are not objects coerce to an all-empty record.
    pub fn from_value(entry: &Value) -> Self {
        let Value::Object(map) = entry else {
            return Self::default();
        };

        let field = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| map.get(*name))
                .map(coerce_to_string)
                .unwrap_or_default()
        };

        Self {
            number: field(NUMBER_FIELDS),
            recipient: field(RECIPIENT_FIELDS),
            qualification: field(QUALIFICATION_FIELDS),
            award_date: field(AWARD_DATE_FIELDS),
            status: field(STATUS_FIELDS),
        }
    }

    /// Copy of this record with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            number: self.number.trim().to_string(),
            recipient: self.recipient.trim().to_string(),
            qualification: self.qualification.trim().to_string(),
            award_date: self.award_date.trim().to_string(),
            status: self.status.trim().to_string(),
        }
    }

    /// Normalized `(number, recipient)` pair that identifies a record.
    pub fn dedupe_key(&self) -> (String, String) {
        (normalize_str(&self.number), normalize_str(&self.recipient))
    }
}

/// Render a JSON value as record text.
pub(crate) fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
