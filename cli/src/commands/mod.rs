//! # PsiGame Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `psigame` CLI. Each
//! command defines its own Clap arguments struct and an async handler that
//! receives the loaded configuration.
//!
//! ## Commands
//!
//! - `chat`: interactive (or piped) chat session with the assistant
//! - `ask`: a single question answered by the matcher
//! - `contact`: contact form hand-off (WhatsApp link or simulated submission)
//! - `about`: facts about the offering
//!

/// Prints the knowledge base summary.
pub mod about;
/// One-shot question to the keyword matcher.
pub mod ask;
/// Line-oriented chat session driven from stdin.
pub mod chat;
/// Contact form composition and hand-off.
pub mod contact;
