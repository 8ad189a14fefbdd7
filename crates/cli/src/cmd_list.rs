// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `certlookup list` command.

use anyhow::Result;

use certlookup::cli::{Cli, ListArgs, OutputFormat};
use certlookup::context::Context;
use certlookup::error::ExitCode;
use certlookup::output::json::JsonFormatter;
use certlookup::output::text::TextFormatter;

pub fn run(cli: &Cli, args: &ListArgs) -> Result<ExitCode> {
    let ctx = Context::load(cli.config.as_deref())?;
    let snapshot = ctx.store(&args.store)?.snapshot()?;

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(args.color.choice()).write_list(snapshot.records())?
        }
        OutputFormat::Json => JsonFormatter::new(std::io::stdout()).write_list(snapshot.records())?,
    }
    Ok(ExitCode::Success)
}
