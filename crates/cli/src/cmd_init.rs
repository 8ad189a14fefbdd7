// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `certlookup init` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::InitArgs;
use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, ExitCode};

/// Starter config written by `init`.
pub const TEMPLATE: &str = r#"# certlookup configuration
version = 1

[lookup]
# Simulated latency before each lookup (e.g., 500ms, 1.5s, 0).
delay = "1100ms"

[aliases]
# URL query parameters read by `certlookup lookup --url`, first match wins.
number = ["number", "cert", "certNumber", "certificate", "id"]
name = ["name", "recipient", "fullName"]

# Certificates searched by `certlookup lookup`. Without any entries here,
# a built-in demo list is used.
[[certificates]]
number = "146882"
recipient = "Mary Kevin"
qualification = "Level 3 TESOL"
award_date = "23/08/2022"
status = "Authentic & Valid"
"#;

/// Write the starter config into `dir`, returning its path.
pub fn init_config(dir: &Path, force: bool) -> crate::error::Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(Error::Argument(format!(
            "{} already exists. Use --force to overwrite.",
            CONFIG_FILE_NAME
        )));
    }

    std::fs::write(&path, TEMPLATE).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

/// Run the `init` command in the current directory.
pub fn run(args: &InitArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let path = init_config(&cwd, args.force)?;
    tracing::debug!(path = %path.display(), "wrote starter config");
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_init_tests.rs"]
mod tests;
