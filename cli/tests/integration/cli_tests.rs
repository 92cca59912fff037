//! Integration tests for the boot binary
//!
//! These tests verify the startup report and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = include_str!("../../assets/files/sample.txt");

fn boot() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("boot"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Report tests ---

#[test]
fn test_report_prints_version_section() {
    boot()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\nVERSION:\n---------------------------------------------\nboot, version ",
        ))
        .stdout(predicate::str::contains("  build user:       "))
        .stdout(predicate::str::contains("  build date:       "))
        .stdout(predicate::str::contains("  go version:       rustc "));
}

#[test]
fn test_report_lists_assets() {
    boot()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\nASSETS:\n---------------------------------------------\n",
        ))
        .stdout(predicate::str::contains("assets/files/sample.txt\n"));
}

#[test]
fn test_report_ends_with_sample_asset_bytes() {
    boot()
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "\nASSET assets/files/sample.txt\n---------------------------------------------\n{SAMPLE}=============================================\n"
        )));
}

#[test]
fn test_report_has_no_ansi_codes_when_piped() {
    boot()
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_report_keeps_stderr_quiet_by_default() {
    boot()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    boot()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("writing embedded asset"))
        .stdout(predicate::str::contains("writing embedded asset").not());
}

// --- Argument parsing tests ---

#[test]
fn test_cli_help_flag_shows_help() {
    boot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Print the build metadata and assets embedded into this binary",
        ));
}

#[test]
fn test_cli_version_flag_shows_version() {
    boot()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("boot "));
}

#[test]
fn test_cli_rejects_unknown_arguments() {
    boot()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}
