// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for output formats and colorization.

use crate::prelude::*;

#[test]
fn json_lookup_document() {
    let json = lookup().number("123456").json().found();

    assert_eq!(json["found"], true);
    assert_eq!(json["matched_by"], "number");
    assert_eq!(
        json["certificate"],
        serde_json::json!({
            "number": "123456",
            "recipient": "Jane Doe",
            "qualification": "Level 2 TEFL",
            "awardDate": "05/09/2025",
            "status": "Authentic & Valid",
        })
    );
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn json_not_found_document() {
    let json = lookup().number("nope").json().not_found();
    assert_eq!(json["found"], false);
    assert!(json.get("matched_by").is_none());
}

#[test]
fn no_color_env_wins_over_color_env() {
    lookup()
        .number("146882")
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .found()
        .stdout_lacks("\x1b[");
}

#[test]
fn piped_output_has_no_color() {
    lookup()
        .number("146882")
        .found()
        .stdout_lacks("\x1b[");
}

#[test]
fn color_env_forces_color() {
    lookup()
        .number("146882")
        .env("COLOR", "1")
        .found()
        .stdout_has("\x1b[");
}

#[test]
fn no_color_flag_wins_over_color_env() {
    lookup()
        .number("146882")
        .env("COLOR", "1")
        .args(&["--no-color"])
        .found()
        .stdout_lacks("\x1b[");
}
