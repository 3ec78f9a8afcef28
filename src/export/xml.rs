//! XML sitemap.
//!
//! Emits a compact sitemaps.org 0.9 document:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns:xsi="..." xmlns="..." xsi:schemaLocation="...">
//!   <url><loc/><lastmod/><changefreq/><priority/></url>
//! </urlset>
//! ```
//!
//! Element names and their order are what search engines expect; text is
//! entity-escaped by the writer.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{Sitemap, SitemapFormat};
use crate::collection::SitemapCollection;
use crate::config::XML_URLSET_ATTRIBUTES;
use crate::record::PageRecord;

/// Writes a collection as a `<urlset>` document.
#[derive(Debug, Clone)]
pub struct XmlSitemap {
    collection: SitemapCollection,
}

impl XmlSitemap {
    /// Wraps a collection for XML output.
    pub fn new(collection: SitemapCollection) -> Self {
        Self { collection }
    }

    pub(crate) fn boxed(collection: SitemapCollection) -> Box<dyn Sitemap> {
        Box::new(Self::new(collection))
    }
}

impl Sitemap for XmlSitemap {
    fn format(&self) -> SitemapFormat {
        SitemapFormat::Xml
    }

    fn collection(&self) -> &SitemapCollection {
        &self.collection
    }

    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::new(&mut *out);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .context("Failed to write XML declaration")?;
        writer.write_event(Event::Start(
            BytesStart::new("urlset").with_attributes(XML_URLSET_ATTRIBUTES),
        ))?;

        for record in self.collection.urls() {
            write_url(&mut writer, record)
                .with_context(|| format!("Failed to write <url> for {}", record.url()))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;
        out.flush()?;
        Ok(())
    }
}

fn write_url<W: Write>(writer: &mut Writer<W>, record: &PageRecord) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;
    write_text_element(writer, "loc", record.url())?;
    write_text_element(writer, "lastmod", record.last_modified())?;
    write_text_element(writer, "changefreq", record.frequency().as_ref())?;
    write_text_element(writer, "priority", &record.priority_text())?;
    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
