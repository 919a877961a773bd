//! # PsiGame Ask Command Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
mod common;

use common::{psigame_cmd, psigame_cmd_with_config};
use predicates::prelude::*;

#[test]
fn test_ask_pricing() {
    psigame_cmd()
        .cmd
        .args(["ask", "--topic", "Quanto", "custa?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[pricing]\n"));
}

#[test]
fn test_ask_online_is_format() {
    psigame_cmd()
        .cmd
        .args(["ask", "--topic", "É online?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[format]"))
        .stdout(predicate::str::contains("online"));
}

#[test]
fn test_ask_unknown_falls_back() {
    psigame_cmd()
        .cmd
        .args(["a", "--topic", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[default]"));
}

#[test]
fn test_ask_blank_fails() {
    psigame_cmd()
        .cmd
        .args(["ask", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The question is empty."));
}

#[test]
fn test_ask_with_configured_rules() {
    let config = r#"
[[chat.rules]]
topic = "coffee"
keywords = ["café"]
response = "Temos café."

[chat.fallback]
response = "Não sei."
"#;
    psigame_cmd_with_config(config)
        .cmd
        .args(["ask", "Tem CAFÉ?"])
        .assert()
        .success()
        .stdout("Temos café.\n");
    psigame_cmd_with_config(config)
        .cmd
        .args(["ask", "Quanto custa?"])
        .assert()
        .success()
        .stdout("Não sei.\n");
}
