//! CLI output integration tests.
//!
//! These run the real binary. Commands that would touch the backend are
//! exercised only up to their client-side guards, with `HOME` pointed at a
//! temp directory so no real session or config file is read.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pitboss() -> Command {
    cargo_bin_cmd!("pitboss")
}

/// Binary wired to an empty home, a missing config, and no env override.
fn isolated(home: &TempDir) -> Command {
    let mut cmd = pitboss();
    cmd.env("HOME", home.path())
        .env_remove("PITBOSS_API_URL")
        .arg("--config")
        .arg(home.path().join("nonexistent.toml"));
    cmd
}

#[test]
fn test_help() {
    pitboss()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pitboss"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("kyc"))
        .stdout(predicate::str::contains("finance"))
        .stdout(predicate::str::contains("trading"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn test_version() {
    pitboss()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pitboss"));
}

#[test]
fn test_users_help_lists_operations() {
    pitboss()
        .args(["users", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("set-status"))
        .stdout(predicate::str::contains("adjust-balance"));
}

#[test]
fn test_check_help_lists_backend() {
    pitboss()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend"));
}

#[test]
fn test_color_never_flag() {
    pitboss()
        .args(["--color", "never", "--help"])
        .assert()
        .success();
}

#[test]
fn test_login_json_mode_is_rejected_with_guidance() {
    let home = TempDir::new().expect("temp home");
    isolated(&home)
        .args(["--json", "login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--json"));
}

#[test]
fn test_json_delete_requires_yes() {
    let home = TempDir::new().expect("temp home");
    isolated(&home)
        .args(["--json", "pairs", "delete", "pr-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_zero_adjustment_is_rejected_before_any_request() {
    let home = TempDir::new().expect("temp home");
    isolated(&home)
        .args([
            "users",
            "adjust-balance",
            "u-1",
            "--amount",
            "0",
            "--reason",
            "correction",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount cannot be zero"));
}

#[test]
fn test_account_update_requires_a_field() {
    let home = TempDir::new().expect("temp home");
    isolated(&home)
        .args(["trading", "update-account", "ta-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn test_unknown_adjustment_reason_is_a_parse_error() {
    pitboss()
        .args([
            "users",
            "adjust-balance",
            "u-1",
            "--amount",
            "5",
            "--reason",
            "because",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn test_whoami_signed_out_in_json_mode() {
    let home = TempDir::new().expect("temp home");
    isolated(&home)
        .args(["--json", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"whoami\""))
        .stdout(predicate::str::contains("\"signed_in\":false"));
}
