// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `certlookup lookup` command.

use anyhow::Result;

use certlookup::cli::{Cli, LookupArgs, OutputFormat};
use certlookup::context::Context;
use certlookup::error::ExitCode;
use certlookup::matcher::LookupOutcome;
use certlookup::output::json::JsonFormatter;
use certlookup::output::text::TextFormatter;
use certlookup::verbose::VerboseLogger;

pub fn run(cli: &Cli, args: &LookupArgs) -> Result<ExitCode> {
    let verbose = VerboseLogger::from_flag(args.verbose);

    let ctx = Context::load(cli.config.as_deref())?;
    match &ctx.config_path {
        Some(path) => verbose.log(&format!("config: {}", path.display())),
        None => verbose.log("config: none (built-in defaults)"),
    }

    let controller = ctx.controller(&args.store, &args.delay)?;
    let query = ctx.query(
        args.url.as_deref(),
        args.number.as_deref(),
        args.name.as_deref(),
    );
    if verbose.is_enabled() {
        verbose.log(&format!("store: {} records", controller.store().snapshot()?.len()));
        verbose.log(&format!("query: number={:?} name={:?}", query.number, query.name));
        verbose.log(&format!("delay: {}ms", controller.delay().as_millis()));
    }

    if args.output == OutputFormat::Text && !controller.delay().is_zero() && !query.is_empty() {
        eprintln!("Checking certificate...");
    }

    let outcome = controller.submit(&query)?;
    if let LookupOutcome::Found { kind, .. } = &outcome {
        verbose.log(&format!("matched by: {}", kind));
    }

    match args.output {
        OutputFormat::Text => TextFormatter::stdout(args.color.choice()).write_outcome(&outcome)?,
        OutputFormat::Json => JsonFormatter::new(std::io::stdout()).write_outcome(&outcome)?,
    }

    Ok(if outcome.is_found() {
        ExitCode::Success
    } else {
        ExitCode::NotFound
    })
}
