//! Sitemap serialization.
//!
//! This module turns a [`SitemapCollection`] into one of three on-disk formats
//! (JSON, XML, CSV). Every serializer implements [`Sitemap`]; [`make`] picks
//! the serializer for a format token and builds the collection it consumes.

mod csv;
mod format;
mod json;
mod xml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use log::info;

use crate::collection::{RawEntry, SitemapCollection};
use crate::error_handling::{GenerateError, SitemapError};

pub use self::csv::CsvSitemap;
pub use format::{IntoSitemapFormat, SitemapFactory, SitemapFormat};
pub use json::JsonSitemap;
pub use xml::XmlSitemap;

/// A serializer bound to one collection.
///
/// Implementors only describe how records become bytes ([`write_to`]); the
/// provided [`generate`] owns the destination file for the duration of the
/// call, so the handle is released whether or not the write succeeds.
///
/// [`write_to`]: Sitemap::write_to
/// [`generate`]: Sitemap::generate
pub trait Sitemap: fmt::Debug {
    /// Format this serializer produces.
    fn format(&self) -> SitemapFormat;

    /// The records and destination being serialized.
    fn collection(&self) -> &SitemapCollection;

    /// Serializes every record, in insertion order, to `out`.
    fn write_to(&self, out: &mut dyn Write) -> anyhow::Result<()>;

    /// Serializes into memory.
    fn render(&self) -> anyhow::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Writes the sitemap to the collection's path, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns a `GenerateError` if the file cannot be created, written,
    /// flushed or synced. The file may then be partially written.
    fn generate(&self) -> Result<(), GenerateError> {
        let path = self.collection().path();
        write_file(self, path).map_err(|source| GenerateError {
            format: self.format(),
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.collection().len();
        info!(
            "Wrote {} URL{} to {} ({})",
            count,
            if count == 1 { "" } else { "s" },
            path.display(),
            self.format()
        );
        Ok(())
    }
}

fn write_file<S: Sitemap + ?Sized>(sitemap: &S, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    sitemap.write_to(&mut writer)?;

    let file = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush sitemap")?;
    file.sync_all().context("Failed to close sitemap file")?;
    Ok(())
}

/// Builds the serializer for `format` over a new collection of `urls`.
///
/// The format is resolved before the destination is touched, so an
/// unsupported format never creates a file.
///
/// # Errors
///
/// * `UnsupportedFormat` if `format` is not `json`, `xml` or `csv`
/// * any error of [`SitemapCollection::new`]
///
/// # Example
///
/// ```no_run
/// use serde_json::json;
/// use sitemap_gen::{make, RawEntry};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let entry = RawEntry::try_from(json!({
///     "url": "https://example.com/",
///     "lastMod": "2024-01-15",
///     "priority": 0.8,
///     "frequency": "daily"
/// }))?;
/// let sitemap = make(vec![entry], "public/sitemap.xml", "xml")?;
/// sitemap.generate()?;
/// # Ok(())
/// # }
/// ```
pub fn make<I, E>(
    urls: I,
    path: impl AsRef<Path>,
    format: impl IntoSitemapFormat,
) -> Result<Box<dyn Sitemap>, SitemapError>
where
    I: IntoIterator<Item = E>,
    E: Into<RawEntry>,
{
    let format = format.into_format()?;
    let collection = SitemapCollection::new(urls, path)?;
    Ok(format.factory()(collection))
}
