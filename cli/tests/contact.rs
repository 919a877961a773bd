//! # PsiGame Contact Command Integration Tests
//!
//! File: cli/tests/contact.rs
//! Author: Christi Mahu
//!
mod common;

use common::{psigame_cmd, psigame_cmd_with_config};
use predicates::prelude::*;

#[test]
fn test_contact_prints_whatsapp_link() {
    psigame_cmd()
        .cmd
        .args(["contact", "--name", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "https://wa.me/5598981368232?text=",
        ))
        .stdout(predicate::str::contains("Nome%3A%20Ana"));
}

#[test]
fn test_contact_simulated_submission() {
    psigame_cmd()
        .cmd
        .args(["contact", "--name", "Ana", "--simulate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Obrigado! Em breve entraremos em contato",
        ));
}

#[test]
fn test_contact_preview_shows_message_block() {
    psigame_cmd()
        .cmd
        .args(["contact", "--preview", "--name", "Ana", "--team-size", "11-25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nome: Ana\n"))
        .stdout(predicate::str::contains("Tamanho da equipe: 11-25\n"));
}

#[test]
fn test_contact_uses_configured_number() {
    psigame_cmd_with_config("[contact]\nwhatsapp_number = \"+1 (555) 010-0000\"\n")
        .cmd
        .args(["contact", "--name", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://wa.me/15550100000?text="));
}

#[test]
fn test_contact_rejects_broken_template() {
    psigame_cmd_with_config("[contact]\ntemplate = \"{{ name \"\n")
        .cmd
        .args(["contact", "--name", "Ana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid syntax"));
}
