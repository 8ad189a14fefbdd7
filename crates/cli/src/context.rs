// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Startup state shared by the commands: config, store, and query aliases.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::cli::{DelayArgs, StoreArgs};
use crate::config::{self, Config};
use crate::controller::LookupController;
use crate::discovery::resolve_config;
use crate::error::{Error, Result};
use crate::query::{LookupQuery, QueryParams};
use crate::shared::SharedStore;

/// Loaded configuration and where it came from.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    /// `None` when running on built-in defaults.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load config from the explicit path or by discovery from the cwd.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::Io {
            path: PathBuf::from("."),
            source: e,
        })?;
        Self::load_from(explicit, &cwd)
    }

    pub fn load_from(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let config_path = resolve_config(explicit, cwd)?;
        let config = match &config_path {
            Some(path) => config::load_with_warnings(path)?,
            None => Config::default(),
        };
        tracing::debug!(
            path = ?config_path,
            configured = config.certificates.as_ref().map(Vec::len),
            "loaded config"
        );
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Store seeded from config, optionally replaced by an import file.
    pub fn store(&self, args: &StoreArgs) -> Result<SharedStore> {
        let store = SharedStore::new(self.config.initial_store());
        if let Some(path) = &args.import {
            let entries = read_import(path)?;
            let count = store.replace_all(&entries)?;
            tracing::debug!(path = %path.display(), count, "imported certificates");
        }
        Ok(store)
    }

    /// Controller over a fresh store with the effective delay.
    pub fn controller(&self, store: &StoreArgs, delay: &DelayArgs) -> Result<LookupController> {
        Ok(LookupController::new(
            self.store(store)?,
            delay.resolve(self.config.lookup.delay),
        ))
    }

    /// Query from an optional URL, with explicit flags taking precedence.
    pub fn query(&self, url: Option<&str>, number: Option<&str>, name: Option<&str>) -> LookupQuery {
        let base = match url {
            Some(url) => self.config.aliases.resolve(&QueryParams::parse(url)),
            None => LookupQuery::default(),
        };
        base.with_overrides(number, name)
    }
}

/// Read a JSON certificate list from disk.
fn read_import(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Argument(format!("{}: invalid JSON: {}", path.display(), e)))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
