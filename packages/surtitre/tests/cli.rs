//! Integration tests for the CLI surface. These paths exit before any GUI
//! or capture work happens.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("surtitre");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("surtitre "));
}

#[test]
fn test_help_lists_language_flags() {
    let mut cmd = cargo_bin_cmd!("surtitre");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--source-lang"))
        .stdout(predicate::str::contains("--target-lang"))
        .stdout(predicate::str::contains("--ocr-lang"));
}

#[test]
fn test_unknown_flag_rejected() {
    let mut cmd = cargo_bin_cmd!("surtitre");
    cmd.arg("--watch");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
