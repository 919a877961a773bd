//! # PsiGame Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by the
//! chat engine, the contact form and the command handlers.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Tera rendering of text templates (the contact message block)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{PsiGameError, Result}; // For error handling
//! use crate::core::templating; // For rendering the contact message
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
