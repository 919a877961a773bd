//! # PsiGame Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `psigame ask <question>` runs the keyword matcher once, without a session
//! and without the artificial reply delay, and prints the reply.
//!
//! ```bash
//! psigame ask Quanto custa?
//! psigame ask --topic "É online?"
//! ```
//!
use clap::Parser;
use psigame::chat::Matcher;
use psigame::core::config::Config;
use psigame::core::error::Result;
use tracing::info;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Several words are joined with spaces, so quoting is optional.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Print the topic of the matching rule before the reply.
    #[arg(long)]
    pub topic: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// ## Errors
///
/// Fails if the question is blank (the matcher is never consulted for blank
/// input) or if the configured rule table is invalid.
pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let question = args.question.join(" ");
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("The question is empty.");
    }
    let matcher = Matcher::new(config.chat.rule_table()?);
    let reply = matcher.respond(question);
    info!("Question answered by rule '{}'.", reply.topic);
    if args.topic {
        println!("[{}]", reply.topic);
    }
    println!("{}", reply.text);
    Ok(())
}
