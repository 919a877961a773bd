//! # PsiGame CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! built here runs against an explicit configuration file in a temporary
//! directory, so the developer's own user or project configuration never
//! leaks into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Configuration with every delay set to zero.
pub const FAST_CONFIG: &str = "\
[chat]
reply_delay_ms = 0
follow_up_delay_ms = 0

[contact]
submit_delay_ms = 0
";

/// A `psigame` command plus the temporary directory holding its config.
/// The directory is removed when this value is dropped.
pub struct Fixture {
    pub cmd: Command,
    pub dir: TempDir,
}

/// # Get PsiGame Command (`psigame_cmd`)
///
/// A command for the compiled `psigame` binary using `FAST_CONFIG`.
///
/// ## Panics
/// Panics if the binary cannot be found or the temporary config cannot be written.
pub fn psigame_cmd() -> Fixture {
    psigame_cmd_with_config(FAST_CONFIG)
}

/// Like `psigame_cmd`, with the given TOML as the configuration file.
pub fn psigame_cmd_with_config(toml: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, toml).expect("Failed to write test config");

    let mut cmd = Command::cargo_bin("psigame").expect("Failed to find psigame binary for testing");
    cmd.env("PSIGAME_CONFIG", &config_path)
        .env_remove("RUST_LOG")
        .current_dir(dir.path());
    Fixture { cmd, dir }
}
