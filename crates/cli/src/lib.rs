// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Certificate lookup by number or recipient name.
//!
//! An in-memory [`CertificateStore`] is searched by exact certificate number
//! or fuzzy recipient name. [`LookupController`] runs delayed lookups against
//! a [`SharedStore`] that add and replace operations update copy-on-write.

pub mod builtin;
pub mod cli;
pub mod cmd_init;
pub mod color;
pub mod completions;
pub mod config;
pub mod context;
pub mod controller;
pub mod discovery;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod output;
pub mod query;
pub mod record;
pub mod session;
pub mod shared;
pub mod store;
pub mod verbose;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use controller::{DEFAULT_DELAY, LookupController};
pub use error::{Error, ExitCode, Result};
pub use matcher::{Found, LookupOutcome, MatchKind, find_by_name, find_by_number, lookup};
pub use normalize::normalize;
pub use query::{AliasConfig, LookupQuery, QueryParams};
pub use record::CertificateRecord;
pub use shared::SharedStore;
pub use store::{CertificateStore, dedupe};
