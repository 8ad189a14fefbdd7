// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Certificate lookup by number or recipient name.
//!
//! Matching walks the store in order and returns the first record that
//! satisfies the query, so earlier records win when several would match.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::normalize::normalize_str;
use crate::record::CertificateRecord;
use crate::store::CertificateStore;

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Certificate number equal to the query.
    Number,
    /// Recipient equal to the query.
    ExactName,
    /// Recipient contains the query.
    RecipientContainsQuery,
    /// Query contains the recipient.
    QueryContainsRecipient,
    /// Every query token appears in the recipient.
    AllTokens,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Number => "number",
            MatchKind::ExactName => "exact_name",
            MatchKind::RecipientContainsQuery => "recipient_contains_query",
            MatchKind::QueryContainsRecipient => "query_contains_recipient",
            MatchKind::AllTokens => "all_tokens",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record found by a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<'a> {
    pub record: &'a CertificateRecord,
    pub kind: MatchKind,
}

/// Result of a lookup. Not finding a certificate is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found {
        record: CertificateRecord,
        kind: MatchKind,
    },
    NotFound,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found { .. })
    }

    pub fn record(&self) -> Option<&CertificateRecord> {
        match self {
            LookupOutcome::Found { record, .. } => Some(record),
            LookupOutcome::NotFound => None,
        }
    }
}

impl From<Option<Found<'_>>> for LookupOutcome {
    fn from(found: Option<Found<'_>>) -> Self {
        match found {
            Some(Found { record, kind }) => LookupOutcome::Found {
                record: record.clone(),
                kind,
            },
            None => LookupOutcome::NotFound,
        }
    }
}

/// First record whose normalized number equals the normalized query.
pub fn find_by_number<'a>(store: &'a CertificateStore, query: &str) -> Option<Found<'a>> {
    let query = normalize_str(query);
    if query.is_empty() {
        return None;
    }

    store
        .records()
        .iter()
        .find(|record| normalize_str(&record.number) == query)
        .map(|record| Found {
            record,
            kind: MatchKind::Number,
        })
}

/// First record whose recipient matches the query under any name rule.
pub fn find_by_name<'a>(store: &'a CertificateStore, query: &str) -> Option<Found<'a>> {
    let query = normalize_str(query);
    if query.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = query.split_whitespace().collect();

    store.records().iter().find_map(|record| {
        name_match(&normalize_str(&record.recipient), &query, &tokens)
            .map(|kind| Found { record, kind })
    })
}

/// Apply the name rules in priority order to one normalized recipient.
fn name_match(recipient: &str, query: &str, tokens: &[&str]) -> Option<MatchKind> {
    // An empty recipient is contained in every query; rule (c) does not apply to it.
    if recipient.is_empty() {
        return None;
    }
    if recipient == query {
        Some(MatchKind::ExactName)
    } else if recipient.contains(query) {
        Some(MatchKind::RecipientContainsQuery)
    } else if query.contains(recipient) {
        Some(MatchKind::QueryContainsRecipient)
    } else if !tokens.is_empty() && tokens.iter().all(|token| recipient.contains(token)) {
        Some(MatchKind::AllTokens)
    } else {
        None
    }
}

/// Combined search: number first, then name.
///
/// A number match always wins over a name match. Fails with
/// [`Error::EmptyQuery`] when both queries are blank.
pub fn lookup<'a>(
    store: &'a CertificateStore,
    number_query: &str,
    name_query: &str,
) -> Result<Option<Found<'a>>> {
    let has_number = !number_query.trim().is_empty();
    let has_name = !name_query.trim().is_empty();
    if !has_number && !has_name {
        return Err(Error::EmptyQuery);
    }

    if has_number && let Some(found) = find_by_number(store, number_query) {
        return Ok(Some(found));
    }
    if has_name {
        return Ok(find_by_name(store, name_query));
    }
    Ok(None)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
