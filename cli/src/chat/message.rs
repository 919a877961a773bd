//! # Chat Transcript Entries
//!
//! File: cli/src/chat/message.rs
//! Author: Christi Mahu
//!
//! A `ChatMessage` is one line of the transcript. Its timestamp is its
//! position: the transcript is append-only, so the index at which a message
//! was appended is all the ordering information the widget needs.
//!
use std::fmt;

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// An immutable transcript entry. Fields are private so that a message
/// cannot be edited once it has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    position: usize,
    sender: Sender,
    text: String,
}

impl ChatMessage {
    pub(crate) fn new(position: usize, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            position,
            sender,
            text: text.into(),
        }
    }

    /// Zero-based index of this message in its session transcript.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// The message body, exactly as produced. Bot texts may carry inline
    /// markup; escaping is up to whoever renders them.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_display() {
        assert_eq!(Sender::User.to_string(), "user");
        assert_eq!(Sender::Bot.to_string(), "bot");
    }

    #[test]
    fn test_message_accessors() {
        let message = ChatMessage::new(3, Sender::Bot, "Olá!");
        assert_eq!(message.position(), 3);
        assert_eq!(message.sender(), Sender::Bot);
        assert_eq!(message.text(), "Olá!");
    }
}
