//! URL validation for page locations.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::{RecordField, ValidationError};

/// Validates a page location.
///
/// The URL must be absolute: it must parse, carry a scheme and a non-empty
/// host. No normalization is applied; on success the input is returned
/// unchanged so it appears verbatim in the sitemap.
///
/// Rejects URLs longer than `MAX_URL_LENGTH`, URLs with surrounding
/// whitespace, and URLs without a literal `//authority` after the scheme.
/// The parser would silently repair all of these, but the text is written
/// out as given.
///
/// # Errors
///
/// Returns a `ValidationError` for the `url` field describing the problem.
pub fn validate_location(raw: &str) -> Result<String, ValidationError> {
    let fail = |message: String| ValidationError::new(RecordField::Url, message);

    if raw.is_empty() {
        return Err(fail("URL is empty".to_string()));
    }

    if raw.len() > MAX_URL_LENGTH {
        return Err(fail(format!(
            "URL exceeds maximum length ({} > {}): {}...",
            raw.len(),
            MAX_URL_LENGTH,
            raw.chars().take(50).collect::<String>()
        )));
    }

    if raw.trim() != raw {
        return Err(fail(format!(
            "URL has leading or trailing whitespace: {raw:?}"
        )));
    }

    if raw.contains('\\') {
        return Err(fail(format!("{raw} contains a backslash")));
    }

    let parsed = url::Url::parse(raw).map_err(|e| fail(format!("{raw} is not a valid URL: {e}")))?;

    if !has_literal_authority(raw, parsed.scheme()) {
        return Err(fail(format!("{raw} has no authority after the scheme")));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(raw.to_string()),
        _ => Err(fail(format!("{raw} has no host"))),
    }
}

/// `scheme://` followed by something other than another slash.
fn has_literal_authority(raw: &str, scheme: &str) -> bool {
    raw.get(scheme.len()..)
        .and_then(|rest| rest.strip_prefix("://"))
        .is_some_and(|authority| !authority.is_empty() && !authority.starts_with('/'))
}
