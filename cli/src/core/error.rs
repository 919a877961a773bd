//! # PsiGame Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the PsiGame crate.
//! It provides a consistent approach to error management with detailed error
//! information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PsiGameError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors
//! - Contact form hand-off errors
//! - Template rendering errors
//! - Chat session errors (see `crate::chat::ChatError`)
//!
//! Note that the keyword matcher has no error type at all: every input maps to
//! some reply, so nothing in `chat::matcher` can fail.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if digits.is_empty() {
//!     return Err(PsiGameError::Contact("phone number has no digits".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use crate::chat::ChatError;
use thiserror::Error;

/// Custom error type for the PsiGame application.
#[derive(Error, Debug)]
pub enum PsiGameError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Contact hand-off error: {0}")]
    Contact(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Chat error: {source}")]
    Chat {
        #[from]
        source: ChatError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = PsiGameError::Config("reply_delay_ms is too large".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: reply_delay_ms is too large"
        );

        let contact_err = PsiGameError::Contact("phone number has no digits".into());
        assert_eq!(
            contact_err.to_string(),
            "Contact hand-off error: phone number has no digits"
        );

        let chat_err = PsiGameError::from(ChatError::SessionTerminated);
        assert_eq!(
            chat_err.to_string(),
            "Chat error: chat session has been torn down"
        );
    }
}
