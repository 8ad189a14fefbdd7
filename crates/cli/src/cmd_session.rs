// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `certlookup session` command.

use anyhow::Result;

use certlookup::cli::{Cli, SessionArgs};
use certlookup::context::Context;
use certlookup::error::ExitCode;
use certlookup::session;

pub fn run(cli: &Cli, args: &SessionArgs) -> Result<ExitCode> {
    let ctx = Context::load(cli.config.as_deref())?;
    let controller = ctx.controller(&args.store, &args.delay)?;

    let stdin = std::io::stdin();
    let stats = session::run(&controller, stdin.lock(), std::io::stdout().lock())?;
    tracing::debug!(
        requests = stats.requests,
        failures = stats.failures,
        "session finished"
    );
    Ok(ExitCode::Success)
}
