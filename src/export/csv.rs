//! CSV sitemap.
//!
//! A `loc,lastmod,changefreq,priority` header followed by one row per record.
//! Quoting follows the `csv` crate defaults (quote only when needed).

use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use super::{Sitemap, SitemapFormat};
use crate::collection::SitemapCollection;
use crate::config::CSV_COLUMNS;

/// Writes a collection as CSV rows.
#[derive(Debug, Clone)]
pub struct CsvSitemap {
    collection: SitemapCollection,
}

impl CsvSitemap {
    /// Wraps a collection for CSV output.
    pub fn new(collection: SitemapCollection) -> Self {
        Self { collection }
    }

    pub(crate) fn boxed(collection: SitemapCollection) -> Box<dyn Sitemap> {
        Box::new(Self::new(collection))
    }
}

impl Sitemap for CsvSitemap {
    fn format(&self) -> SitemapFormat {
        SitemapFormat::Csv
    }

    fn collection(&self) -> &SitemapCollection {
        &self.collection
    }

    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::from_writer(out);

        writer
            .write_record(CSV_COLUMNS)
            .context("Failed to write CSV header")?;

        for record in self.collection.urls() {
            writer
                .write_record([
                    record.url(),
                    record.last_modified(),
                    record.frequency().as_ref(),
                    record.priority_text().as_str(),
                ])
                .with_context(|| format!("Failed to write CSV row for {}", record.url()))?;
        }

        writer.flush()?;
        Ok(())
    }
}
