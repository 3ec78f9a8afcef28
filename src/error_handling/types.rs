//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use std::fmt;
use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::config::ALLOWED_ENTRY_KEYS;
use crate::export::SitemapFormat;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Page record fields subject to validation.
///
/// Displayed with the key names used by mapping entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// The page location
    Url,
    /// The last-modified timestamp
    LastMod,
    /// The crawl priority
    Priority,
    /// The change frequency
    Frequency,
}

impl RecordField {
    /// Key naming this field in a mapping entry.
    pub fn key(self) -> &'static str {
        match self {
            RecordField::Url => "url",
            RecordField::LastMod => "lastMod",
            RecordField::Priority => "priority",
            RecordField::Frequency => "frequency",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A page record field failed validation.
///
/// Raised while building a [`PageRecord`](crate::PageRecord); no record is
/// produced when any field is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {field}: {message}")]
pub struct ValidationError {
    /// The rejected field
    pub field: RecordField,
    /// Why the value was rejected
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: RecordField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors raised before anything is written: entry validation, destination
/// preparation and format selection.
#[derive(Error, Debug)]
pub enum SitemapError {
    /// A record field was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A mapping entry did not carry exactly the allowed keys.
    #[error(
        "Invalid keys in entry (unexpected: [{}], missing: [{}]). Allowed keys: {}",
        .unexpected.join(","),
        .missing.join(","),
        ALLOWED_ENTRY_KEYS.join(",")
    )]
    InvalidKeys {
        /// Keys present in the entry but not allowed
        unexpected: Vec<String>,
        /// Allowed keys absent from the entry
        missing: Vec<String>,
    },

    /// An entry was neither a page record nor a mapping.
    #[error("Invalid entry: expected a mapping, found {0}")]
    InvalidEntry(&'static str),

    /// The destination directory did not exist and could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The destination file could not be created or opened for writing.
    #[error("Not enough rights to write {}: {source}", .path.display())]
    Permission {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The requested output format is not one of `json`, `xml`, `csv`.
    #[error("Unsupported sitemap format '{0}' (expected one of: json, xml, csv)")]
    UnsupportedFormat(String),
}

/// Writing a sitemap to its destination failed.
///
/// Kept apart from [`SitemapError`] so callers can tell "rejected before any
/// write" from "the file did not get written".
#[derive(Error, Debug)]
#[error("Failed to write {format} sitemap to {}", .path.display())]
pub struct GenerateError {
    /// Format being written
    pub format: SitemapFormat,
    /// Destination file
    pub path: PathBuf,
    /// What went wrong
    #[source]
    pub source: anyhow::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_display_uses_entry_keys() {
        assert_eq!(RecordField::Url.to_string(), "url");
        assert_eq!(RecordField::LastMod.to_string(), "lastMod");
        assert_eq!(RecordField::Priority.to_string(), "priority");
        assert_eq!(RecordField::Frequency.to_string(), "frequency");
    }

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::new(RecordField::Priority, "1.5 is outside 0.0 - 1.0");
        assert_eq!(err.to_string(), "Invalid priority: 1.5 is outside 0.0 - 1.0");
    }

    #[test]
    fn test_invalid_keys_message_lists_allowed_keys() {
        let err = SitemapError::InvalidKeys {
            unexpected: vec!["title".to_string()],
            missing: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("unexpected: [title]"));
        assert!(msg.contains("url,lastMod,priority,frequency"));
    }

    #[test]
    fn test_validation_converts_into_sitemap_error() {
        let err: SitemapError = ValidationError::new(RecordField::Url, "bad").into();
        assert!(matches!(
            err,
            SitemapError::Validation(ValidationError {
                field: RecordField::Url,
                ..
            })
        ));
    }

    #[test]
    fn test_generate_error_keeps_source() {
        use std::error::Error;

        let err = GenerateError {
            format: SitemapFormat::Csv,
            path: PathBuf::from("/tmp/sitemap.csv"),
            source: anyhow::anyhow!("disk full"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write csv sitemap to /tmp/sitemap.csv"
        );
        assert!(err.source().is_some());
    }
}
