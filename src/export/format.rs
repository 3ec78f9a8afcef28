//! Output format selection.

use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString};

use super::{CsvSitemap, JsonSitemap, Sitemap, XmlSitemap};
use crate::collection::SitemapCollection;
use crate::error_handling::SitemapError;

/// Builds the serializer for a collection.
pub type SitemapFactory = fn(SitemapCollection) -> Box<dyn Sitemap>;

/// Sitemap output format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum SitemapFormat {
    /// JSON array of `{loc, lastmod, priority, changefreq}` objects
    #[default]
    Json,
    /// sitemaps.org 0.9 `<urlset>` document
    Xml,
    /// `loc,lastmod,changefreq,priority` rows
    Csv,
}

impl SitemapFormat {
    /// Parses a lowercase format token (`json`, `xml`, `csv`).
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::UnsupportedFormat` for any other token.
    pub fn from_token(token: &str) -> Result<Self, SitemapError> {
        token
            .parse()
            .map_err(|_| SitemapError::UnsupportedFormat(token.to_string()))
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            SitemapFormat::Json => "json",
            SitemapFormat::Xml => "xml",
            SitemapFormat::Csv => "csv",
        }
    }

    /// Serializer constructor for this format.
    pub fn factory(self) -> SitemapFactory {
        match self {
            SitemapFormat::Json => JsonSitemap::boxed,
            SitemapFormat::Xml => XmlSitemap::boxed,
            SitemapFormat::Csv => CsvSitemap::boxed,
        }
    }
}

/// Anything that names a sitemap format: the enum itself or a token.
pub trait IntoSitemapFormat {
    /// Resolves to a supported format.
    fn into_format(self) -> Result<SitemapFormat, SitemapError>;
}

impl IntoSitemapFormat for SitemapFormat {
    fn into_format(self) -> Result<SitemapFormat, SitemapError> {
        Ok(self)
    }
}

impl IntoSitemapFormat for &str {
    fn into_format(self) -> Result<SitemapFormat, SitemapError> {
        SitemapFormat::from_token(self)
    }
}

impl IntoSitemapFormat for String {
    fn into_format(self) -> Result<SitemapFormat, SitemapError> {
        SitemapFormat::from_token(&self)
    }
}
