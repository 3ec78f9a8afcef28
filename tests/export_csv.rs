//! Tests for CSV sitemap generation.

use sitemap_gen::{make, SitemapFormat};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{mapping, ordered_entries, read};

#[test]
fn test_csv_single_entry_exact_output() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sitemap.csv");

    let sitemap = make(
        vec![mapping("https://example.com/", "2024-01-15", 0.8, "daily")],
        &path,
        "csv",
    )
    .expect("Failed to build sitemap");
    sitemap.generate().expect("Failed to generate CSV");

    let content = read(&path);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "loc,lastmod,changefreq,priority");
    assert_eq!(
        lines[1],
        "https://example.com/,2024-01-15T00:00:00+00:00,daily,0.8"
    );
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_csv_rows_follow_insertion_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sitemap.csv");

    make(ordered_entries(), &path, SitemapFormat::Csv)
        .expect("Failed to build sitemap")
        .generate()
        .expect("Failed to generate CSV");

    let mut reader = csv::Reader::from_path(&path).expect("Failed to open CSV");
    let headers = reader.headers().expect("Missing header").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["loc", "lastmod", "changefreq", "priority"]
    );

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("Failed to parse rows");
    let locs: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(
        locs,
        [
            "https://example.com/a",
            "https://example.com/b",
            "https://example.com/c"
        ]
    );
    assert_eq!(&rows[0][2], "always");
    assert_eq!(&rows[0][3], "1");
    assert_eq!(&rows[1][3], "0.5");
    assert_eq!(&rows[2][2], "never");
    assert_eq!(&rows[2][3], "0");
}

#[test]
fn test_csv_replaces_previous_content() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sitemap.csv");
    std::fs::write(&path, "stale content that is much longer than the new sitemap\n".repeat(10))
        .expect("Failed to seed file");

    make(
        vec![mapping("https://example.com/", "2024-01-15", 0.8, "daily")],
        &path,
        "csv",
    )
    .expect("Failed to build sitemap")
    .generate()
    .expect("Failed to generate CSV");

    assert!(!read(&path).contains("stale"));
}
