// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `certlookup init`.

use crate::prelude::*;

#[test]
fn init_creates_config() {
    let temp = Project::empty();

    temp.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created certlookup.toml"));

    let config = std::fs::read_to_string(temp.path().join("certlookup.toml")).unwrap();
    assert!(config.starts_with("# certlookup configuration\nversion = 1\n"));
}

#[test]
fn init_config_is_usable() {
    let temp = Project::empty();
    temp.cmd().arg("init").assert().success();

    lookup()
        .pwd(temp.path())
        .number("146882")
        .found()
        .stderr_lacks("warning");
}

#[test]
fn init_refuses_existing_config() {
    let temp = Project::with_config("");

    temp.cmd()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let temp = Project::with_config("");

    temp.cmd().args(["init", "--force"]).assert().success();

    let config = std::fs::read_to_string(temp.path().join("certlookup.toml")).unwrap();
    assert!(config.contains("[[certificates]]"));
}
