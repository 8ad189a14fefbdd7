// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lookup submission with simulated network latency.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::matcher::{self, LookupOutcome};
use crate::query::LookupQuery;
use crate::shared::SharedStore;

/// Delay applied to every lookup unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1100);

/// Owns the shared store and runs delayed lookups against it.
#[derive(Debug, Clone)]
pub struct LookupController {
    store: SharedStore,
    delay: Duration,
}

impl LookupController {
    pub fn new(store: SharedStore, delay: Duration) -> Self {
        Self { store, delay }
    }

    /// The store this controller searches. Writers go through this handle.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run one lookup.
    ///
    /// Empty queries fail immediately. Otherwise the lookup runs against a
    /// snapshot taken at submission time, after the configured delay.
    pub fn submit(&self, query: &LookupQuery) -> Result<LookupOutcome> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let snapshot = self.store.snapshot()?;
        tracing::debug!(
            number = %query.number,
            name = %query.name,
            records = snapshot.len(),
            "lookup submitted"
        );

        if !self.delay.is_zero() {
            tracing::trace!(
                delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
                "simulating latency"
            );
            std::thread::sleep(self.delay);
        }

        let outcome = LookupOutcome::from(matcher::lookup(&snapshot, &query.number, &query.name)?);
        match &outcome {
            LookupOutcome::Found { record, kind } => {
                tracing::debug!(number = %record.number, rule = %kind, "certificate found");
            }
            LookupOutcome::NotFound => tracing::debug!("certificate not found"),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
