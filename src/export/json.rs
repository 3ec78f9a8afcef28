//! JSON sitemap.
//!
//! One compact JSON array; each record becomes
//! `{"loc", "lastmod", "priority", "changefreq"}` in collection order.

use std::io::Write;

use anyhow::{Context, Result};

use super::{Sitemap, SitemapFormat};
use crate::collection::SitemapCollection;

/// Writes a collection as a JSON array.
#[derive(Debug, Clone)]
pub struct JsonSitemap {
    collection: SitemapCollection,
}

impl JsonSitemap {
    /// Wraps a collection for JSON output.
    pub fn new(collection: SitemapCollection) -> Self {
        Self { collection }
    }

    pub(crate) fn boxed(collection: SitemapCollection) -> Box<dyn Sitemap> {
        Box::new(Self::new(collection))
    }
}

impl Sitemap for JsonSitemap {
    fn format(&self) -> SitemapFormat {
        SitemapFormat::Json
    }

    fn collection(&self) -> &SitemapCollection {
        &self.collection
    }

    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer(&mut *out, self.collection.urls())
            .context("Failed to serialize JSON sitemap")?;
        out.flush()?;
        Ok(())
    }
}
