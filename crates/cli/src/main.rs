// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Certlookup CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use certlookup::cli::{Cli, Command};
use certlookup::error::ExitCode;

mod cmd_list;
mod cmd_lookup;
mod cmd_session;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CERTLOOKUP_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("certlookup: {}", e);
            match e.downcast_ref::<certlookup::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Lookup(args)) => cmd_lookup::run(&cli, args),
        Some(Command::List(args)) => cmd_list::run(&cli, args),
        Some(Command::Session(args)) => cmd_session::run(&cli, args),
        Some(Command::Init(args)) => certlookup::cmd_init::run(args),
        Some(Command::Completions(args)) => {
            certlookup::completions::write_completions(args.shell, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
