//! # PsiGame Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `psigame chat` puts the chat widget on the terminal. Each line read from
//! stdin is submitted to a `ChatSession`; a printer task writes the session
//! events to stdout as they arrive, so replies keep their submission order even
//! when input is piped in faster than the reply delay.
//!
//! ## Input
//!
//! - any text: submitted as a user message (blank lines are ignored)
//! - `/open`, `/close`, `/toggle`: drive the widget state
//! - `sair` or `bye` (or end of input): wait for pending replies and leave
//!
//! ## Examples
//!
//! ```bash
//! psigame chat
//! printf 'Quanto custa?\nÉ online?\n' | psigame chat --no-delay
//! ```
//!
use clap::Parser;
use psigame::chat::{ChatSession, Matcher, Sender, SessionEvent, SessionSettings};
use psigame::core::config::Config;
use psigame::core::error::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

const WELCOME: &str = "Olá! Sou o assistente PsiGame. Pergunte sobre a metodologia, \
                       formatos, resultados ou como agendar um diagnóstico.";
const GOODBYE: &str = "Até logo! Quando quiser, é só chamar.";

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Answer immediately instead of waiting the configured reply delays.
    #[arg(long)]
    pub no_delay: bool,
}

/// What one input line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Open,
    Close,
    Toggle,
    Quit,
    Text(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "/open" => Input::Open,
        "/close" => Input::Close,
        "/toggle" => Input::Toggle,
        "sair" | "bye" => Input::Quit,
        _ => Input::Text(trimmed),
    }
}

fn render_suggestions(suggestions: &[String]) -> String {
    format!("Sugestões: {}", suggestions.join(" | "))
}

/// Formats a session event the way the terminal shows it.
fn render_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Message(message) => match message.sender() {
            Sender::User => format!("Você: {}", message.text()),
            Sender::Bot => format!("PsiGame: {}", message.text()),
        },
        SessionEvent::FollowUpSuggestions(suggestions) => render_suggestions(suggestions),
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs a session until `sair`/`bye` or end of input, then waits for every
/// queued reply before returning.
///
/// ## Errors
///
/// Fails if the configured rule table is invalid, stdin cannot be read, or the
/// session worker dies.
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let matcher = Matcher::new(config.chat.rule_table()?);
    let mut settings = SessionSettings::from_config(&config.chat);
    if args.no_delay {
        settings = settings.without_delays();
    }

    let (events, mut incoming) = mpsc::unbounded_channel::<SessionEvent>();
    let session = ChatSession::start(matcher, settings, events);
    session.open();

    let printer = tokio::spawn(async move {
        while let Some(event) = incoming.recv().await {
            println!("{}", render_event(&event));
        }
    });

    println!("PsiGame: {}", WELCOME);
    if !session.starter_suggestions().is_empty() {
        println!("{}", render_suggestions(session.starter_suggestions()));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match classify(&line) {
            Input::Open => session.open(),
            Input::Close => session.close(),
            Input::Toggle => {
                let open = session.toggle();
                debug!("Widget is now {}.", if open { "open" } else { "closed" });
            }
            Input::Quit => break,
            Input::Text(text) => {
                session.submit(text)?;
            }
        }
    }

    session.settle().await?;
    let exchanged = session.transcript().len();
    session.shutdown().await?;
    printer.await?;
    info!("Chat ended after {} messages.", exchanged);
    println!("PsiGame: {}", GOODBYE);
    Ok(())
}
