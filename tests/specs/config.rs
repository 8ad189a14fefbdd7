// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for certlookup.toml handling.

use crate::prelude::*;

#[test]
fn configured_certificates_replace_demo_list() {
    let temp = Project::with_config(
        r#"
[[certificates]]
number = "XY-1"
recipient = "Ann Lee"
qualification = "TEFL"
award_date = 2024-03-01
"#,
    );

    lookup()
        .pwd(temp.path())
        .number("xy-1")
        .found()
        .stdout_has("Date:          2024-03-01");
    lookup().pwd(temp.path()).number("146882").not_found();
}

#[test]
fn config_is_discovered_from_subdirectory() {
    let temp = Project::with_config("[[certificates]]\nnumber = \"S-1\"\nrecipient = \"Sub Dir\"\n");
    let sub = temp.path().join("a/b");
    std::fs::create_dir_all(&sub).unwrap();

    lookup().pwd(&sub).number("S-1").found();
}

#[test]
fn short_config_flag_selects_file() {
    let temp = Project::empty();
    let path = temp.file(
        "custom.toml",
        "version = 1\n[[certificates]]\nnumber = \"C-1\"\nrecipient = \"Custom\"\n",
    );

    lookup()
        .pwd(temp.path())
        .args(&["-C", path.to_str().unwrap()])
        .number("C-1")
        .found();
}

#[test]
fn env_config_selects_file() {
    let temp = Project::empty();
    let path = temp.file(
        "env.toml",
        "version = 1\n[[certificates]]\nnumber = \"E-1\"\nrecipient = \"Env\"\n",
    );

    lookup()
        .pwd(temp.path())
        .env("CERTLOOKUP_CONFIG", path.to_str().unwrap())
        .number("E-1")
        .found();
}

#[test]
fn missing_explicit_config_is_usage_error() {
    lookup()
        .args(&["-C", "/nonexistent/certlookup.toml"])
        .number("1")
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_is_usage_error() {
    let temp = Project::empty();
    temp.file("certlookup.toml", "version = 2\n");

    lookup()
        .pwd(temp.path())
        .number("146882")
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn unknown_key_warns_with_suggestion() {
    let temp = Project::with_config("certificate = []\n");

    lookup()
        .pwd(temp.path())
        .number("146882")
        .found()
        .stderr_has("certlookup: warning:")
        .stderr_has("unrecognized field `certificate` (ignored). Did you mean `certificates`?");
}

#[test]
fn unknown_nested_key_warns() {
    let temp = Project::with_config("[lookup]\npause = \"1s\"\n");

    lookup()
        .pwd(temp.path())
        .number("146882")
        .found()
        .stderr_has("unrecognized field `lookup.pause`");
}

#[test]
fn valid_config_has_no_warnings() {
    let temp = Project::with_config("[lookup]\ndelay = \"0ms\"\n");

    lookup()
        .pwd(temp.path())
        .number("146882")
        .found()
        .stderr_lacks("warning");
}

#[test]
fn configured_aliases_drive_url_lookup() {
    let temp = Project::with_config("[aliases]\nnumber = [\"serial\"]\n");

    lookup()
        .pwd(temp.path())
        .url("?serial=123456")
        .found()
        .stdout_has("Jane Doe");
    lookup().pwd(temp.path()).url("?cert=123456").exits(2);
}

#[test]
fn configured_delay_is_used() {
    let temp = Project::empty();
    temp.config("[lookup]\ndelay = \"300ms\"\n");

    let start = std::time::Instant::now();
    temp.cmd()
        .args(["lookup", "--number", "146882"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Checking certificate..."));
    assert!(start.elapsed() >= std::time::Duration::from_millis(300));
}
