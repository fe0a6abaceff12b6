//! Smoke tests for the jsonboard CLI.
//!
//! These tests verify basic CLI functionality:
//! - `jsonboard --version` outputs version info
//! - `jsonboard --help` lists the commands and options

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the jsonboard binary.
fn jsonboard() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsonboard"))
}

#[test]
fn test_version_flag() {
    jsonboard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jsonboard"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    jsonboard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn test_help_lists_commands() {
    jsonboard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_help_lists_server_options() {
    jsonboard()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--data-file"))
        .stdout(predicate::str::contains("--index-file"));
}

#[test]
fn test_unknown_command_fails() {
    jsonboard().arg("frobnicate").assert().failure();
}
