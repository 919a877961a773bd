//! # PsiGame Contact Form Hand-off
//!
//! File: cli/src/contact/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The landing page form either pretends to submit (a short loading state
//! followed by a thank-you notice) or hands the visitor over to WhatsApp with
//! the form contents pre-typed. Both are one-shot and stateless: there is no
//! retry and no delivery confirmation. Success means the notice was produced
//! or the link was built.
//!
//! ## Architecture
//!
//! - `form`: the named fields and the message block template
//! - `whatsapp`: the `wa.me` deep link
//! - `ContactDesk` (here): applies the configured phone, delay and template
//!
//! ## Examples
//!
//! ```rust
//! use psigame::contact::{ContactDesk, ContactForm, HandOff, SubmitMode};
//! use psigame::core::config::ContactConfig;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let desk = ContactDesk::from_config(&ContactConfig::default());
//! let form = ContactForm { name: "Ana".into(), ..Default::default() };
//! match desk.hand_off(&form, SubmitMode::WhatsApp).await? {
//!     HandOff::Redirect { url } => assert!(url.starts_with("https://wa.me/")),
//!     HandOff::Simulated { .. } => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::config::ContactConfig;
use crate::core::error::Result;
use std::time::Duration;
use tracing::info;

pub mod form;
pub mod whatsapp;

pub use form::{ContactForm, DEFAULT_TEMPLATE};
pub use whatsapp::whatsapp_link;

/// Notice shown after a simulated submission.
pub const SUCCESS_NOTICE: &str =
    "Obrigado! Em breve entraremos em contato para agendar seu diagnóstico.";

/// How the form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Open WhatsApp with the composed message.
    WhatsApp,
    /// Wait the configured delay and report success.
    Simulated,
}

/// Result of a hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandOff {
    Redirect { url: String },
    Simulated { notice: String },
}

/// # Contact Desk (`ContactDesk`)
///
/// Holds the contact settings and performs hand-offs.
#[derive(Debug, Clone)]
pub struct ContactDesk {
    phone: String,
    submit_delay: Duration,
    template: String,
}

impl ContactDesk {
    pub fn from_config(config: &ContactConfig) -> Self {
        Self {
            phone: config.whatsapp_number.clone(),
            submit_delay: Duration::from_millis(config.submit_delay_ms),
            template: config
                .template
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
        }
    }

    /// The message block for `form`.
    pub fn compose(&self, form: &ContactForm) -> Result<String> {
        form.compose_message(&self.template)
    }

    /// # Hand Off (`hand_off`)
    ///
    /// Composes the message and either builds the WhatsApp link or runs the
    /// simulated submission. The simulated path still composes the message so
    /// that a broken template fails the same way in both modes.
    pub async fn hand_off(&self, form: &ContactForm, mode: SubmitMode) -> Result<HandOff> {
        let message = self.compose(form)?;
        match mode {
            SubmitMode::WhatsApp => {
                let url = whatsapp_link(&self.phone, &message)?;
                info!("Built WhatsApp hand-off link ({} bytes).", url.len());
                Ok(HandOff::Redirect { url })
            }
            SubmitMode::Simulated => {
                if !self.submit_delay.is_zero() {
                    tokio::time::sleep(self.submit_delay).await;
                }
                info!("Simulated contact submission completed.");
                Ok(HandOff::Simulated {
                    notice: SUCCESS_NOTICE.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn ana() -> ContactForm {
        ContactForm {
            name: "Ana".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_whatsapp_hand_off() {
        let desk = ContactDesk::from_config(&ContactConfig::default());
        let handoff = desk.hand_off(&ana(), SubmitMode::WhatsApp).await.unwrap();
        match handoff {
            HandOff::Redirect { url } => {
                assert!(url.starts_with("https://wa.me/5598981368232?text="));
                assert!(url.contains("Nome%3A%20Ana"));
            }
            other => panic!("unexpected hand-off: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_hand_off_waits() {
        let desk = ContactDesk::from_config(&ContactConfig::default());
        let started = Instant::now();
        let handoff = desk.hand_off(&ana(), SubmitMode::Simulated).await.unwrap();
        assert_eq!(
            handoff,
            HandOff::Simulated {
                notice: SUCCESS_NOTICE.to_string()
            }
        );
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_configured_template_and_phone() {
        let config = ContactConfig {
            whatsapp_number: "1 234".to_string(),
            submit_delay_ms: 0,
            template: Some("{{ name }} / {{ company }}".to_string()),
        };
        let desk = ContactDesk::from_config(&config);
        assert_eq!(desk.compose(&ana()).unwrap(), "Ana / ");
        let handoff = desk.hand_off(&ana(), SubmitMode::WhatsApp).await.unwrap();
        assert_eq!(
            handoff,
            HandOff::Redirect {
                url: "https://wa.me/1234?text=Ana%20%2F%20".to_string()
            }
        );
    }
}
