//! Configuration constants.
//!
//! This module defines the constants of the sitemap protocol and the input
//! contract: accepted mapping keys, output column/element layout and limits.

/// Keys accepted in a mapping entry. Any other key rejects the entry.
pub const ALLOWED_ENTRY_KEYS: [&str; 4] = ["url", "lastMod", "priority", "frequency"];

/// Maximum `<loc>` length accepted by the sitemaps.org protocol.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum number of URLs a single sitemap file may list.
///
/// Larger collections are still written, but search engines will ignore the
/// overflow, so a warning is logged.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// Priority used when an entry does not provide one.
pub const DEFAULT_PRIORITY: f64 = 1.0;

/// CSV header row. Column order differs from the JSON key order.
pub const CSV_COLUMNS: [&str; 4] = ["loc", "lastmod", "changefreq", "priority"];

/// Attributes carried by the `<urlset>` root element, in emission order.
pub const XML_URLSET_ATTRIBUTES: [(&str, &str); 3] = [
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"),
    (
        "xsi:schemaLocation",
        "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd",
    ),
];

/// Default output path used by the CLI when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./sitemap.json";
