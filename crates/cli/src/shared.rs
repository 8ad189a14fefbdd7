// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-writer, multi-reader access to the certificate store.
//!
//! Readers hold an `Arc` snapshot that never changes underneath them.
//! Writers clone the current store, mutate the clone, and swap it in, so a
//! failed mutation leaves the published store untouched.

use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::CertificateRecord;
use crate::store::CertificateStore;

/// Shared handle to the certificate store. Cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Arc<CertificateStore>>>,
}

impl SharedStore {
    pub fn new(store: CertificateStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// Immutable view of the current store contents.
    pub fn snapshot(&self) -> Result<Arc<CertificateStore>> {
        let guard = self
            .inner
            .read()
            .map_err(|_| Error::Internal("certificate store lock poisoned".to_string()))?;
        Ok(Arc::clone(&guard))
    }

    /// Append one record (see [`CertificateStore::add_record`]).
    pub fn add_record(&self, entry: CertificateRecord) -> Result<()> {
        self.update(|store| store.add_record(entry))
    }

    /// Replace every record (see [`CertificateStore::replace_all`]).
    pub fn replace_all(&self, entries: &Value) -> Result<usize> {
        self.update(|store| store.replace_all(entries))
    }

    /// Copy-on-write update. The new store is published only on success.
    fn update<T>(&self, mutate: impl FnOnce(&mut CertificateStore) -> Result<T>) -> Result<T> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| Error::Internal("certificate store lock poisoned".to_string()))?;
        let mut next = CertificateStore::clone(&guard);
        let value = mutate(&mut next)?;
        *guard = Arc::new(next);
        Ok(value)
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
