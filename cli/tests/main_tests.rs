//! # PsiGame CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! Top-level behavior of the `psigame` binary: standard flags, a missing
//! subcommand, and configuration errors surfacing as a failed exit.
//!
mod common;

use common::{psigame_cmd, psigame_cmd_with_config};
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    psigame_cmd()
        .cmd
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_commands() {
    psigame_cmd()
        .cmd
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("contact"))
        .stdout(predicate::str::contains("about"));
}

#[test]
fn test_missing_subcommand_fails() {
    psigame_cmd()
        .cmd
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_config_key_fails() {
    psigame_cmd_with_config("[chat]\nreply_delay = 5\n")
        .cmd
        .arg("about")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_excessive_delay_fails_validation() {
    psigame_cmd_with_config("[chat]\nreply_delay_ms = 600000\n")
        .cmd
        .args(["ask", "oi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chat.reply_delay_ms"));
}
