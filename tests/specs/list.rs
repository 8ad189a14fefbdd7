// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `certlookup list`.

use crate::prelude::*;

#[test]
fn lists_demo_certificates() {
    let temp = Project::empty();
    let output = temp.cmd().arg("list").output().unwrap();
    RunAssert::from_output(output).stdout_eq(
        "146882       Mary Kevin            Level 3 TESOL            23/08/2022
123456       Jane Doe              Level 2 TEFL             05/09/2025
GA-24K7F195  Tunka Botyova Popova  Level 5 Diploma in TEFL  14/02/2024
3 certificates
",
    );
}

#[test]
fn lists_json() {
    let temp = Project::empty();
    let output = temp.cmd().args(["list", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["certificates"][1]["awardDate"], "05/09/2025");
}

#[test]
fn lists_configured_certificates() {
    let temp = Project::with_config(
        r#"
[[certificates]]
number = "A-1"
recipient = "Ann Lee"

[[certificates]]
number = "a-1"
recipient = "ANN LEE"
"#,
    );
    temp.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("A-1  Ann Lee").and(predicates::str::contains("1 certificate\n")));
}

#[test]
fn lists_imported_certificates() {
    let temp = Project::empty();
    let file = temp.file("certs.json", "[]");
    temp.cmd()
        .args(["list", "--import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("0 certificates\n");
}
