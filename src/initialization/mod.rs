//! Application initialization.
//!
//! Sets up process-wide resources before a sitemap is generated. Currently
//! this is the logger only.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
