//! Page records.
//!
//! A [`PageRecord`] is one validated sitemap entry: location, canonical
//! last-modified timestamp, priority and change frequency. Records are only
//! produced by [`PageRecordBuilder::build`], which validates every field, and
//! are read-only afterwards.

mod frequency;
mod location;
mod timestamp;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::config::DEFAULT_PRIORITY;
use crate::error_handling::{RecordField, ValidationError};

use location::validate_location;
use timestamp::canonical_timestamp;

pub use frequency::{ChangeFrequency, FrequencyInput};
pub use timestamp::LastModified;

/// One validated sitemap entry.
///
/// Serializes as `{loc, lastmod, priority, changefreq}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    #[serde(rename = "loc")]
    url: String,
    #[serde(rename = "lastmod")]
    last_modified: String,
    priority: f64,
    #[serde(rename = "changefreq")]
    frequency: ChangeFrequency,
    #[serde(skip)]
    last_modified_at: DateTime<FixedOffset>,
}

impl PageRecord {
    /// Starts a builder with the default priority (1.0) and frequency (weekly).
    pub fn builder() -> PageRecordBuilder {
        PageRecordBuilder::default()
    }

    /// Builds a record with the default priority and frequency.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the URL or timestamp is rejected.
    pub fn new(
        url: impl Into<String>,
        last_modified: impl Into<LastModified>,
    ) -> Result<Self, ValidationError> {
        Self::builder()
            .url(url)
            .last_modified(last_modified)
            .build()
    }

    /// The page location, exactly as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The canonical last-modified timestamp, e.g. `2024-01-15T00:00:00+00:00`.
    pub fn last_modified(&self) -> &str {
        &self.last_modified
    }

    /// The last-modified timestamp as a date/time value.
    pub fn last_modified_at(&self) -> DateTime<FixedOffset> {
        self.last_modified_at
    }

    /// Crawl priority in [0.0, 1.0].
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Expected change frequency.
    pub fn frequency(&self) -> ChangeFrequency {
        self.frequency
    }

    /// Priority in the shortest decimal form (`0.8`, `1`), as written to text formats.
    pub(crate) fn priority_text(&self) -> String {
        self.priority.to_string()
    }
}

/// Collects raw field values for a [`PageRecord`].
///
/// Nothing is checked until [`build`](Self::build), which validates the fields
/// in order (url, lastMod, priority, frequency) and stops at the first failure.
///
/// # Example
///
/// ```
/// use sitemap_gen::{ChangeFrequency, PageRecord};
///
/// let record = PageRecord::builder()
///     .url("https://example.com/")
///     .last_modified("2024-01-15")
///     .priority(0.8)
///     .frequency(ChangeFrequency::Daily)
///     .build()?;
/// assert_eq!(record.last_modified(), "2024-01-15T00:00:00+00:00");
/// # Ok::<(), sitemap_gen::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PageRecordBuilder {
    url: Option<String>,
    last_modified: Option<LastModified>,
    priority: f64,
    frequency: FrequencyInput,
}

impl Default for PageRecordBuilder {
    fn default() -> Self {
        Self {
            url: None,
            last_modified: None,
            priority: DEFAULT_PRIORITY,
            frequency: FrequencyInput::default(),
        }
    }
}

impl PageRecordBuilder {
    /// Sets the page location.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the last-modified timestamp, as text or as a date/time value.
    pub fn last_modified(mut self, last_modified: impl Into<LastModified>) -> Self {
        self.last_modified = Some(last_modified.into());
        self
    }

    /// Sets the priority (default 1.0).
    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the change frequency (default weekly).
    pub fn frequency(mut self, frequency: impl Into<FrequencyInput>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Validates every field and produces the record.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first rejected field. A missing URL
    /// or timestamp is rejected; priority and frequency have defaults.
    pub fn build(self) -> Result<PageRecord, ValidationError> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| ValidationError::new(RecordField::Url, "URL is required"))
            .and_then(validate_location)?;

        let last_modified_at = self
            .last_modified
            .ok_or_else(|| ValidationError::new(RecordField::LastMod, "timestamp is required"))?
            .resolve()?;

        let priority = validate_priority(self.priority)?;
        let frequency = self.frequency.resolve()?;

        Ok(PageRecord {
            url,
            last_modified: canonical_timestamp(&last_modified_at),
            priority,
            frequency,
            last_modified_at,
        })
    }
}

/// Accepts priorities in the closed interval [0.0, 1.0]. NaN is rejected.
/// `-0.0` is stored as `0.0`.
fn validate_priority(priority: f64) -> Result<f64, ValidationError> {
    if (0.0..=1.0).contains(&priority) {
        Ok(priority + 0.0)
    } else {
        Err(ValidationError::new(
            RecordField::Priority,
            format!("{priority} is outside 0.0 - 1.0"),
        ))
    }
}
