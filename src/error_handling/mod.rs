//! Error handling.
//!
//! This module provides the error taxonomy of the crate:
//! - **Validation**: a page record field was rejected
//! - **Setup**: an entry, the destination path or the format token was rejected
//!   before anything was written
//! - **Generate**: the sitemap could not be written to its destination
//! - **Initialization**: logger setup failed

mod types;

// Re-export public API
pub use types::{GenerateError, InitializationError, RecordField, SitemapError, ValidationError};
