//! # PsiGame About Command
//!
//! File: cli/src/commands/about.rs
//! Author: Christi Mahu
//!
//! `psigame about` prints what the assistant knows about the offering.
//!
use clap::Parser;
use psigame::chat::knowledge::PSIGAME;
use psigame::core::error::Result;

/// Arguments for `psigame about` (none yet).
#[derive(Parser, Debug)]
pub struct AboutArgs {}

pub async fn handle_about(_args: AboutArgs) -> Result<()> {
    print!("{}", PSIGAME.summary());
    Ok(())
}
