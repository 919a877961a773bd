//! # PsiGame Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for PsiGame, handling
//! loading, merging, validation, and access to configuration data. It supports
//! a multi-level approach that combines defaults, user settings, and
//! project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (used alone when given)
//! 2. Project-specific `.psigame.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! reply_delay_ms = 800
//! follow_up_delay_ms = 300
//!
//! [contact]
//! whatsapp_number = "+55 (98) 98136-8232"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let table = cfg.chat.rule_table()?;
//! ```
//!
use crate::chat::knowledge::PSIGAME;
use crate::chat::rules::{self, DefaultRule, KeywordRule, RuleTable};
use crate::core::error::{PsiGameError, Result};
use crate::core::templating;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Configuration of the chat widget (`psigame chat`, `psigame ask`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Milliseconds between a user message and the bot reply.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Milliseconds between a bot reply and the follow-up suggestions.
    #[serde(default = "default_follow_up_delay_ms")]
    pub follow_up_delay_ms: u64,
    /// Questions offered before the first message.
    #[serde(default = "default_starter_suggestions")]
    pub starter_suggestions: Vec<String>,
    /// Questions offered after replies that invite a follow-up.
    #[serde(default = "default_follow_up_suggestions")]
    pub follow_up_suggestions: Vec<String>,
    /// Replacement keyword rules, in precedence order. Empty keeps the built-in rules.
    #[serde(default)]
    pub rules: Vec<KeywordRule>,
    /// Replacement fallback rule.
    #[serde(default)]
    pub fallback: Option<DefaultRule>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            follow_up_delay_ms: default_follow_up_delay_ms(),
            starter_suggestions: default_starter_suggestions(),
            follow_up_suggestions: default_follow_up_suggestions(),
            rules: Vec::new(),
            fallback: None,
        }
    }
}

impl ChatConfig {
    /// Builds the rule table this configuration describes: configured rules
    /// and fallback where present, built-in ones otherwise.
    pub fn rule_table(&self) -> Result<RuleTable> {
        let rules = if self.rules.is_empty() {
            rules::builtin_rules()
        } else {
            self.rules.clone()
        };
        let fallback = self
            .fallback
            .clone()
            .unwrap_or_else(rules::builtin_fallback);
        RuleTable::new(rules, fallback).context("Invalid chat rule table")
    }
}

/// Configuration of the contact form hand-off (`psigame contact`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// Phone number the WhatsApp link points to. Only its digits are used.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    /// Milliseconds a simulated submission takes.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Tera template for the message block. `None` uses the built-in one.
    #[serde(default)]
    pub template: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            submit_delay_ms: default_submit_delay_ms(),
            template: None,
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1000
}
fn default_follow_up_delay_ms() -> u64 {
    300
}
fn default_starter_suggestions() -> Vec<String> {
    ["Como funciona?", "Quanto custa?", "É online?"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_follow_up_suggestions() -> Vec<String> {
    [
        "Quero agendar um diagnóstico",
        "Quanto tempo dura?",
        "Qual o tamanho ideal do grupo?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_whatsapp_number() -> String {
    format!("+55 {}", PSIGAME.contacts.whatsapp)
}
fn default_submit_delay_ms() -> u64 {
    2000
}

/// Longest delay accepted for any presentation pause.
const MAX_DELAY_MS: u64 = 60_000;

const PROJECT_CONFIG_FILENAME: &str = ".psigame.toml";

/// # Load Configuration (`load_config`)
///
/// Loads the effective configuration. With `explicit` set, only that file is
/// read (on top of defaults); otherwise the user and project files are merged.
/// The result is validated before it is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::from(load_layer_from_path(path)?)
        }
        None => {
            let user_layer = load_user_config()?;
            let project_layer = load_project_config()?;
            Config::from(merge_layers(user_layer.unwrap_or_default(), project_layer))
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "PsiGame", "psigame") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_layer_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_layer_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.psigame.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.psigame.toml`, stopping
/// at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_layer_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// One configuration file as written: every key it leaves out stays `None`,
/// so a value equal to the default still counts as set.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    chat: ChatLayer,
    #[serde(default)]
    contact: ContactLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChatLayer {
    reply_delay_ms: Option<u64>,
    follow_up_delay_ms: Option<u64>,
    starter_suggestions: Option<Vec<String>>,
    follow_up_suggestions: Option<Vec<String>>,
    rules: Option<Vec<KeywordRule>>,
    fallback: Option<DefaultRule>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ContactLayer {
    whatsapp_number: Option<String>,
    submit_delay_ms: Option<u64>,
    template: Option<String>,
}

/// Project values win over user values, key by key.
fn merge_layers(user: ConfigLayer, project: Option<ConfigLayer>) -> ConfigLayer {
    let Some(project) = project else {
        return user;
    };
    ConfigLayer {
        chat: ChatLayer {
            reply_delay_ms: project.chat.reply_delay_ms.or(user.chat.reply_delay_ms),
            follow_up_delay_ms: project
                .chat
                .follow_up_delay_ms
                .or(user.chat.follow_up_delay_ms),
            starter_suggestions: project
                .chat
                .starter_suggestions
                .or(user.chat.starter_suggestions),
            follow_up_suggestions: project
                .chat
                .follow_up_suggestions
                .or(user.chat.follow_up_suggestions),
            rules: project.chat.rules.or(user.chat.rules),
            fallback: project.chat.fallback.or(user.chat.fallback),
        },
        contact: ContactLayer {
            whatsapp_number: project
                .contact
                .whatsapp_number
                .or(user.contact.whatsapp_number),
            submit_delay_ms: project
                .contact
                .submit_delay_ms
                .or(user.contact.submit_delay_ms),
            template: project.contact.template.or(user.contact.template),
        },
    }
}

impl From<ConfigLayer> for Config {
    /// Fills every key the layer leaves unset with its default.
    fn from(layer: ConfigLayer) -> Self {
        let ConfigLayer { chat, contact } = layer;
        Config {
            chat: ChatConfig {
                reply_delay_ms: chat.reply_delay_ms.unwrap_or_else(default_reply_delay_ms),
                follow_up_delay_ms: chat
                    .follow_up_delay_ms
                    .unwrap_or_else(default_follow_up_delay_ms),
                starter_suggestions: chat
                    .starter_suggestions
                    .unwrap_or_else(default_starter_suggestions),
                follow_up_suggestions: chat
                    .follow_up_suggestions
                    .unwrap_or_else(default_follow_up_suggestions),
                rules: chat.rules.unwrap_or_default(),
                fallback: chat.fallback,
            },
            contact: ContactConfig {
                whatsapp_number: contact
                    .whatsapp_number
                    .unwrap_or_else(default_whatsapp_number),
                submit_delay_ms: contact
                    .submit_delay_ms
                    .unwrap_or_else(default_submit_delay_ms),
                template: contact.template,
            },
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    for (name, value) in [
        ("chat.reply_delay_ms", config.chat.reply_delay_ms),
        ("chat.follow_up_delay_ms", config.chat.follow_up_delay_ms),
        ("contact.submit_delay_ms", config.contact.submit_delay_ms),
    ] {
        if value > MAX_DELAY_MS {
            return Err(anyhow!(PsiGameError::Config(format!(
                "'{}' is {} ms; the maximum is {} ms.",
                name, value, MAX_DELAY_MS
            ))));
        }
    }
    config.chat.rule_table()?;
    if !config
        .contact
        .whatsapp_number
        .chars()
        .any(|c| c.is_ascii_digit())
    {
        return Err(anyhow!(PsiGameError::Config(format!(
            "WhatsApp number '{}' contains no digits.",
            config.contact.whatsapp_number
        ))));
    }
    if let Some(template) = &config.contact.template {
        templating::check_template("contact.template", template)?;
    }
    info!("Configuration validation successful.");
    Ok(())
}
