// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the certlookup binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the certlookup binary with a clean
/// environment.
pub fn certlookup_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("certlookup"));
    for var in [
        "CERTLOOKUP_CONFIG",
        "CERTLOOKUP_LOG",
        "CERTLOOKUP_DEBUG",
        "COLOR",
        "NO_COLOR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a lookup command builder.
pub fn lookup() -> LookupBuilder<Text> {
    LookupBuilder::new()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Lookup command builder for fluent test assertions.
///
/// Runs with `--no-delay` unless a delay is given, in a fresh project
/// directory unless `pwd` is set.
pub struct LookupBuilder<Mode = Text> {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    delay: Option<String>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl LookupBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            delay: None,
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> LookupBuilder<Json> {
        LookupBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            delay: self.delay,
            _mode: PhantomData,
        }
    }

    /// Expect exit code 0.
    pub fn found(self) -> RunAssert {
        self.exits(0)
    }

    /// Expect exit code 1.
    pub fn not_found(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self, code)
    }
}

impl LookupBuilder<Json> {
    pub fn found(self) -> serde_json::Value {
        parse_json(&run_exits(self, 0))
    }

    pub fn not_found(self) -> serde_json::Value {
        parse_json(&run_exits(self, 1))
    }
}

#[allow(dead_code)]
impl<Mode: 'static> LookupBuilder<Mode> {
    pub fn number(self, number: &str) -> Self {
        self.args(&["--number", number])
    }

    pub fn name(self, name: &str) -> Self {
        self.args(&["--name", name])
    }

    pub fn url(self, url: &str) -> Self {
        self.args(&["--url", url])
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Run with a real delay instead of `--no-delay`.
    pub fn delay(mut self, delay: &str) -> Self {
        self.delay = Some(delay.to_string());
        self
    }

    fn output(self) -> std::process::Output {
        let scratch = Project::empty();
        let mut cmd = certlookup_cmd();
        cmd.arg("lookup");
        match &self.delay {
            Some(delay) => cmd.args(["--delay", delay.as_str()]),
            None => cmd.arg("--no-delay"),
        };
        if std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>() {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);
        cmd.current_dir(self.dir.as_deref().unwrap_or(scratch.path()));
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.output().unwrap()
    }
}

fn run_exits<Mode: 'static>(builder: LookupBuilder<Mode>, code: i32) -> RunAssert {
    let output = builder.output();
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn parse_json(run: &RunAssert) -> serde_json::Value {
    serde_json::from_slice(&run.output.stdout).expect("stdout should be valid JSON")
}

/// Result of a command run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    pub fn from_output(output: std::process::Output) -> Self {
        Self { output }
    }

    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary git-rooted directory so config discovery never escapes it.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("[lookup]\ndelay = \"0ms\"");
/// lookup().number("1").pwd(temp.path()).not_found();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create a project with no config file
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Create a project whose certlookup.toml holds `version = 1` plus `body`
    pub fn with_config(body: &str) -> Self {
        let project = Self::empty();
        project.config(body);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write certlookup.toml, prefixed with `version = 1`
    pub fn config(&self, body: &str) {
        self.file("certlookup.toml", &format!("version = 1\n{}", body));
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: &str, content: &str) -> PathBuf {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
        full
    }

    /// certlookup command running in this project
    pub fn cmd(&self) -> Command {
        let mut cmd = certlookup_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
