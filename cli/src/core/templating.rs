//! # PsiGame Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrapper around the Tera templating engine. The contact form uses it
//! to turn the submitted fields into the preformatted message block that is
//! sent through WhatsApp; the template itself can be replaced from the
//! configuration file.
//!
//! ## Architecture
//!
//! - Any `Serialize` value can be the rendering context; its fields become
//!   template variables.
//! - Rendering is plain text: autoescaping is off, so `&` and `<` reach the
//!   message unchanged. The WhatsApp link percent-encodes the result later.
//! - Tera failures are wrapped in `PsiGameError::Template` with context
//!   naming the template.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let text = templating::render_text("greeting", "Nome: {{ name }}", &form)?;
//! ```
//!
use crate::core::error::{PsiGameError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

/// # Render Text Template (`render_text`)
///
/// Renders `template` with the fields of `context` as variables.
///
/// ## Arguments
///
/// * `name`: Label used in error messages.
/// * `template`: Tera template source.
/// * `context`: Any serializable value whose fields feed the template.
///
/// ## Errors
///
/// Returns an error if the context cannot be serialized, the template has
/// invalid syntax, or it references a variable the context lacks.
pub fn render_text<C: Serialize>(name: &str, template: &str, context: &C) -> Result<String> {
    let tera_context = Context::from_serialize(context).map_err(|e| {
        anyhow!(PsiGameError::Template { source: e })
            .context(format!("Failed to build rendering context for '{}'", name))
    })?;
    let rendered = Tera::one_off(template, &tera_context, false).map_err(|e| {
        anyhow!(PsiGameError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })?;
    debug!("Rendered template '{}' ({} bytes).", name, rendered.len());
    Ok(rendered)
}

/// # Check Template Syntax (`check_template`)
///
/// Parses `template` without rendering it, so configuration errors surface
/// at load time rather than on the first submission.
pub fn check_template(name: &str, template: &str) -> Result<()> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, template).map_err(|e| {
        anyhow!(PsiGameError::Template { source: e })
            .context(format!("Template '{}' has invalid syntax", name))
    })?;
    Ok(())
}
