//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_OUTPUT_PATH;
use crate::export::SitemapFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Drives [`run_generate`](crate::run_generate): entries are read from
/// `input` (a JSON array of mapping entries) and the sitemap is written to
/// `output`.
///
/// # Examples
///
/// ```no_run
/// use sitemap_gen::{Config, SitemapFormat};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("pages.json"),
///     output: PathBuf::from("public/sitemap.xml"),
///     format: SitemapFormat::Xml,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the page entries
    pub input: PathBuf,

    /// Destination of the generated sitemap
    pub output: PathBuf,

    /// Output format
    pub format: SitemapFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("pages.json"),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: SitemapFormat::Json,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options for the `sitemap_gen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sitemap_gen",
    about = "Validate page records and write a JSON, XML or CSV sitemap"
)]
pub struct Opt {
    /// JSON file containing an array of {url, lastMod, priority, frequency} entries
    pub input: PathBuf,

    /// Where to write the sitemap (parent directories are created)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = SitemapFormat::Json)]
    pub format: SitemapFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output: opt.output,
            format: opt.format,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
