//! Sitemap collections.
//!
//! A [`SitemapCollection`] owns the validated page records, in insertion order,
//! and the prepared destination path. It is append-only: records are added at
//! construction or through [`SitemapCollection::add_url`], never removed.

mod destination;
mod entry;

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::MAX_URLS_PER_SITEMAP;
use crate::error_handling::SitemapError;
use crate::record::PageRecord;

pub use entry::RawEntry;

/// Ordered, validated page records plus the file they will be written to.
#[derive(Debug, Clone)]
pub struct SitemapCollection {
    urls: Vec<PageRecord>,
    path: PathBuf,
}

impl SitemapCollection {
    /// Prepares the destination, then adds every entry in order.
    ///
    /// # Errors
    ///
    /// * `DirectoryCreation` / `Permission` if the destination cannot be prepared
    /// * `InvalidKeys` / `Validation` / `InvalidEntry` for the first rejected
    ///   entry; the whole construction fails
    pub fn new<I, E>(entries: I, path: impl AsRef<Path>) -> Result<Self, SitemapError>
    where
        I: IntoIterator<Item = E>,
        E: Into<RawEntry>,
    {
        let path = path.as_ref().to_path_buf();
        destination::prepare_destination(&path)?;

        let mut collection = Self {
            urls: Vec::new(),
            path,
        };
        for entry in entries {
            collection.add_url(entry)?;
        }
        Ok(collection)
    }

    /// Appends one entry.
    ///
    /// Mapping entries have their keys checked and their fields validated;
    /// pre-built records are appended as they are. Nothing is appended when
    /// the entry is rejected.
    pub fn add_url(&mut self, entry: impl Into<RawEntry>) -> Result<&mut Self, SitemapError> {
        let record = entry.into().into_record()?;
        debug!("Adding {} to sitemap", record.url());
        self.urls.push(record);

        if self.urls.len() == MAX_URLS_PER_SITEMAP + 1 {
            warn!(
                "Sitemap {} lists more than {} URLs; search engines ignore the excess",
                self.path.display(),
                MAX_URLS_PER_SITEMAP
            );
        }
        Ok(self)
    }

    /// Where the sitemap will be written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether no record has been added.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Records in insertion order, for the serializers.
    pub(crate) fn urls(&self) -> &[PageRecord] {
        &self.urls
    }
}
