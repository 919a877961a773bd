//! # PsiGame Landing Assistant
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Library side of the `psigame` crate. The landing page's chat widget and
//! contact form live here, free of any presentation environment, so the CLI
//! (`main.rs`), the integration tests and any other front end drive the same
//! code.
//!
//! - `chat`: keyword rules, the matcher and the chat session state machine
//! - `contact`: contact form message block and WhatsApp hand-off
//! - `page`: scroll and preloader decisions taken by the page glue
//! - `core`: configuration, errors and templating
//!
pub mod chat;
pub mod contact;
pub mod core;
pub mod page;
