//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use sitemap_gen::RawEntry;
use std::path::Path;

/// Builds a mapping entry with all four keys.
pub fn mapping(url: &str, last_mod: &str, priority: f64, frequency: &str) -> RawEntry {
    RawEntry::try_from(json!({
        "url": url,
        "lastMod": last_mod,
        "priority": priority,
        "frequency": frequency
    }))
    .expect("Failed to build mapping entry")
}

/// Converts an arbitrary JSON object into an entry.
pub fn entry(value: Value) -> RawEntry {
    RawEntry::try_from(value).expect("Entry must be a JSON object")
}

/// The three entries used by the ordering tests: A, B, C.
pub fn ordered_entries() -> Vec<RawEntry> {
    vec![
        mapping("https://example.com/a", "2024-01-01", 1.0, "always"),
        mapping("https://example.com/b", "2024-01-02", 0.5, "monthly"),
        mapping("https://example.com/c", "2024-01-03", 0.0, "never"),
    ]
}

/// Reads a generated file as UTF-8.
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read generated sitemap")
}
