//! Application configuration and constants.
//!
//! This module provides:
//! - Sitemap protocol constants (namespaces, limits, column layout)
//! - Library configuration for file-driven generation
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
