//! # PsiGame Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `psigame` CLI, a terminal
//! front end for the landing page's chat widget and contact form.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the configuration shared by all commands
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Talk to the assistant
//! psigame chat
//!
//! # One question, one answer
//! psigame ask "Quanto custa?"
//!
//! # Build the WhatsApp hand-off link for a contact request
//! psigame contact --name Ana --company Acme
//!
//! # Run a command with increased verbosity
//! psigame -vv chat --no-delay
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (explicit file, or user + project files)
//! 4. Route to appropriate command handler
//! 5. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use psigame::core::config;
use psigame::core::error::Result;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Handles specific command logic (chat, ask, contact, about)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "psigame",
    about = "PsiGame: assistente da landing page (chat e contato)",
    long_about = "Terminal front end for the PsiGame landing page assistant.\n\
                  Chat with the rule-based assistant or hand a contact request over to WhatsApp.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user and project files.
    #[arg(long, global = true, env = "PSIGAME_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    Contact(commands::contact::ContactArgs),
    About(commands::about::AboutArgs),
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &config).await,
        Commands::Ask(args) => commands::ask::handle_ask(args, &config).await,
        Commands::Contact(args) => commands::contact::handle_contact(args, &config).await,
        Commands::About(args) => commands::about::handle_about(args).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["psigame", "ask", "oi", "-vv", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Ask(_)));
    }

    #[test]
    fn test_chat_alias() {
        let cli = Cli::try_parse_from(["psigame", "c", "--no-delay"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat(_)));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["psigame"]).is_err());
    }
}
