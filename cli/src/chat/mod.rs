//! # PsiGame Chat Widget Engine
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the pieces of the landing page chat widget:
//!
//! - `rules`: the ordered keyword rule table and its fallback
//! - `matcher`: the total, side-effect free classifier over a rule table
//! - `message`: transcript entries
//! - `session`: the widget state machine and its FIFO reply queue
//! - `knowledge`: static facts about the offering
//!
//! ## Usage
//!
//! ```rust
//! use psigame::chat::Matcher;
//!
//! let matcher = Matcher::builtin();
//! let reply = matcher.respond("É online?");
//! assert_eq!(reply.topic, "format");
//! ```
//!
use thiserror::Error;

pub mod knowledge;
pub mod matcher;
pub mod message;
pub mod rules;
pub mod session;

pub use matcher::{Matcher, Reply};
pub use message::{ChatMessage, Sender};
pub use rules::{DefaultRule, KeywordRule, RuleTable};
pub use session::{ChatSession, NullSink, SessionEvent, SessionSettings, Submitted, TranscriptSink};

/// Errors raised by a chat session.
///
/// Only misuse of a torn-down session fails; blank input and unknown questions
/// are normal traffic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatError {
    #[error("chat session has been torn down")]
    SessionTerminated,
}
