//! sitemap_gen library: validated page records to JSON, XML or CSV sitemaps
//!
//! This library validates page entries (URL, last-modified timestamp, priority,
//! change frequency), collects them in order, and writes the collection as a
//! sitemap in one of three formats.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_gen::{make, ChangeFrequency, PageRecord, SitemapFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let home = PageRecord::builder()
//!     .url("https://example.com/")
//!     .last_modified("2024-01-15")
//!     .priority(0.8)
//!     .frequency(ChangeFrequency::Daily)
//!     .build()?;
//!
//! let sitemap = make(vec![home], "public/sitemap.xml", SitemapFormat::Xml)?;
//! sitemap.generate()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod collection;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod record;

// Re-export public API
pub use collection::{RawEntry, SitemapCollection};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    GenerateError, InitializationError, RecordField, SitemapError, ValidationError,
};
pub use export::{
    make, CsvSitemap, IntoSitemapFormat, JsonSitemap, Sitemap, SitemapFactory, SitemapFormat,
    XmlSitemap,
};
pub use record::{ChangeFrequency, FrequencyInput, LastModified, PageRecord, PageRecordBuilder};
pub use run::{run_generate, GenerateReport};

// Internal run module (file-driven generation used by the CLI)
mod run {
    use std::fs;
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use serde_json::Value;

    use crate::collection::RawEntry;
    use crate::config::Config;
    use crate::export::{make, SitemapFormat};

    /// Results of a generation run.
    #[derive(Debug, Clone)]
    pub struct GenerateReport {
        /// Number of URLs written
        pub total_urls: usize,
        /// Path of the generated sitemap
        pub output: PathBuf,
        /// Format written
        pub format: SitemapFormat,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Generates a sitemap from a JSON file of entries.
    ///
    /// `config.input` must hold a JSON array whose items are mapping entries
    /// (`{"url", "lastMod", "priority", "frequency"}`). Every entry must
    /// validate before anything is written.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read or is not a JSON array
    /// - Any entry is rejected
    /// - The destination cannot be prepared or written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sitemap_gen::{run_generate, Config, SitemapFormat};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     input: PathBuf::from("pages.json"),
    ///     output: PathBuf::from("public/sitemap.csv"),
    ///     format: SitemapFormat::Csv,
    ///     ..Default::default()
    /// };
    /// let report = run_generate(config)?;
    /// println!("Wrote {} URLs", report.total_urls);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_generate(config: Config) -> Result<GenerateReport> {
        let start_time = Instant::now();

        let raw = fs::read_to_string(&config.input).with_context(|| {
            format!("Failed to read input file: {}", config.input.display())
        })?;
        let items: Vec<Value> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "Input file {} is not a JSON array of entries",
                config.input.display()
            )
        })?;
        info!(
            "Read {} entr{} from {}",
            items.len(),
            if items.len() == 1 { "y" } else { "ies" },
            config.input.display()
        );

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                RawEntry::try_from(item).with_context(|| format!("Entry #{index} is invalid"))
            })
            .collect::<Result<Vec<_>>>()?;

        let sitemap = make(entries, &config.output, config.format)
            .context("Failed to build sitemap")?;
        sitemap.generate().context("Failed to generate sitemap")?;

        Ok(GenerateReport {
            total_urls: sitemap.collection().len(),
            output: config.output.clone(),
            format: config.format,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
