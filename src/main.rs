//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitemap_gen` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sitemap_gen::config::Opt;
use sitemap_gen::initialization::init_logger_with;
use sitemap_gen::{run_generate, Config};

fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_generate(config) {
        Ok(report) => {
            println!(
                "✅ Wrote {} URL{} as {} in {:.3}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.format,
                report.elapsed_seconds
            );
            println!("Sitemap saved in {}", report.output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("sitemap_gen error: {:#}", e);
            process::exit(1);
        }
    }
}
