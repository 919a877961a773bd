//! # Contact Form Fields and Message Block
//!
//! File: cli/src/contact/form.rs
//! Author: Christi Mahu
//!
//! The landing page form collects a fixed set of named fields. This module
//! holds them and renders them into the single preformatted text block that
//! is handed to WhatsApp.
//!
//! No field is validated. A field the visitor left blank, or never sent,
//! renders as an empty string.
//!
use crate::core::error::Result;
use crate::core::templating;
use serde::Serialize;

/// Message block used when the configuration does not provide a template.
pub const DEFAULT_TEMPLATE: &str = "\
Olá! Gostaria de agendar um diagnóstico PsiGame.

Nome: {{ name }}
Empresa: {{ company }}
Cargo: {{ role }}
E-mail: {{ email }}
Tamanho da equipe: {{ team_size }}
Objetivo: {{ objective }}
Formato: {{ format }}
Mensagem: {{ message }}";

/// The fields of the landing page contact form. Every field is plain text
/// and defaults to empty.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub role: String,
    pub email: String,
    pub team_size: String,
    pub objective: String,
    pub format: String,
    pub message: String,
}

impl ContactForm {
    /// # Compose Message (`compose_message`)
    ///
    /// Renders the form through `template` (see `DEFAULT_TEMPLATE` for the
    /// variable names).
    ///
    /// ## Errors
    ///
    /// Fails only if the template itself is broken or names a variable that
    /// is not a form field.
    pub fn compose_message(&self, template: &str) -> Result<String> {
        templating::render_text("contact message", template, self)
    }
}
