// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

use crate::color::resolve_color;
use crate::config::duration::parse_duration;

/// Verify certificates by number or recipient name
#[derive(Parser)]
#[command(name = "certlookup")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "CERTLOOKUP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a certificate
    Lookup(LookupArgs),
    /// List every certificate in the store
    List(ListArgs),
    /// Answer JSON requests from stdin, one per line
    Session(SessionArgs),
    /// Create a starter certlookup.toml
    Init(InitArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct LookupArgs {
    /// Certificate number
    #[arg(short, long, value_name = "NUMBER")]
    pub number: Option<String>,

    /// Recipient name (full or partial)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Verification link or query string to read the query from
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub delay: DelayArgs,

    #[command(flatten)]
    pub color: ColorArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub color: ColorArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub delay: DelayArgs,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Where the store contents come from.
#[derive(clap::Args, Clone, Default)]
pub struct StoreArgs {
    /// Replace the configured certificates with a JSON list from FILE
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,
}

/// Simulated lookup latency.
#[derive(clap::Args, Clone, Default)]
pub struct DelayArgs {
    /// Delay before each lookup (e.g., 500ms, 1.5s)
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub delay: Option<Duration>,

    /// Skip the lookup delay
    #[arg(long, conflicts_with = "delay")]
    pub no_delay: bool,
}

impl DelayArgs {
    /// Effective delay given the configured default.
    pub fn resolve(&self, configured: Duration) -> Duration {
        if self.no_delay {
            Duration::ZERO
        } else {
            self.delay.unwrap_or(configured)
        }
    }
}

#[derive(clap::Args, Clone, Default)]
pub struct ColorArgs {
    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

impl ColorArgs {
    /// Flags win over environment detection.
    pub fn choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else if self.color {
            ColorChoice::Always
        } else {
            resolve_color()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
