//! # PsiGame Contact Command
//!
//! File: cli/src/commands/contact.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `psigame contact` fills the landing page contact form from flags and hands
//! it off: by default it prints the WhatsApp link carrying the composed
//! message; with `--simulate` it waits the configured delay and prints the
//! thank-you notice; with `--preview` it only prints the composed message.
//!
//! ```bash
//! psigame contact --name Ana --company Acme --team-size 11-25
//! psigame contact --name Ana --simulate
//! ```
//!
use clap::Parser;
use psigame::contact::{ContactDesk, ContactForm, HandOff, SubmitMode};
use psigame::core::config::Config;
use psigame::core::error::Result;

/// # Contact Command Arguments (`ContactArgs`)
///
/// Every field is optional; missing ones render as empty in the message.
#[derive(Parser, Debug, Default)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long = "team-size")]
    pub team_size: Option<String>,
    #[arg(long)]
    pub objective: Option<String>,
    #[arg(long)]
    pub format: Option<String>,
    #[arg(long)]
    pub message: Option<String>,

    /// Simulate the form submission instead of building the WhatsApp link.
    #[arg(long, conflicts_with = "preview")]
    pub simulate: bool,

    /// Print the composed message and stop.
    #[arg(long)]
    pub preview: bool,
}

impl ContactArgs {
    fn form(&self) -> ContactForm {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        ContactForm {
            name: field(&self.name),
            company: field(&self.company),
            role: field(&self.role),
            email: field(&self.email),
            team_size: field(&self.team_size),
            objective: field(&self.objective),
            format: field(&self.format),
            message: field(&self.message),
        }
    }
}

/// # Handle Contact Command (`handle_contact`)
///
/// ## Errors
///
/// Fails if the configured template cannot be rendered or the configured
/// WhatsApp number has no digits.
pub async fn handle_contact(args: ContactArgs, config: &Config) -> Result<()> {
    let desk = ContactDesk::from_config(&config.contact);
    let form = args.form();

    if args.preview {
        println!("{}", desk.compose(&form)?);
        return Ok(());
    }

    let mode = if args.simulate {
        SubmitMode::Simulated
    } else {
        SubmitMode::WhatsApp
    };
    match desk.hand_off(&form, mode).await? {
        HandOff::Redirect { url } => println!("{}", url),
        HandOff::Simulated { notice } => println!("{}", notice),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_fill_the_form() {
        let args = ContactArgs::try_parse_from([
            "contact",
            "--name",
            "Ana",
            "--team-size",
            "11-25",
        ])
        .unwrap();
        let form = args.form();
        assert_eq!(form.name, "Ana");
        assert_eq!(form.team_size, "11-25");
        assert!(form.company.is_empty());
        assert!(!args.simulate);
    }

    #[test]
    fn test_simulate_conflicts_with_preview() {
        assert!(ContactArgs::try_parse_from(["contact", "--simulate", "--preview"]).is_err());
    }
}
