//! Raw collection entries and their conversion to page records.

use serde_json::{Map, Value};

use crate::config::ALLOWED_ENTRY_KEYS;
use crate::error_handling::{RecordField, SitemapError, ValidationError};
use crate::record::PageRecord;

/// An entry handed to a collection: a record built by the caller, or a
/// mapping with exactly the keys `url`, `lastMod`, `priority`, `frequency`.
#[derive(Debug, Clone)]
pub enum RawEntry {
    /// A record that has already been validated
    Record(PageRecord),
    /// A mapping whose keys and fields are still to be checked
    Fields(Map<String, Value>),
}

impl From<PageRecord> for RawEntry {
    fn from(record: PageRecord) -> Self {
        RawEntry::Record(record)
    }
}

impl From<Map<String, Value>> for RawEntry {
    fn from(fields: Map<String, Value>) -> Self {
        RawEntry::Fields(fields)
    }
}

impl TryFrom<Value> for RawEntry {
    type Error = SitemapError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(RawEntry::Fields(fields)),
            other => Err(SitemapError::InvalidEntry(value_kind(&other))),
        }
    }
}

impl RawEntry {
    /// Turns the entry into a validated record.
    ///
    /// Mapping keys are checked before any field is looked at, so an entry with
    /// an unexpected key is rejected even when every field is valid.
    pub(crate) fn into_record(self) -> Result<PageRecord, SitemapError> {
        match self {
            RawEntry::Record(record) => Ok(record),
            RawEntry::Fields(fields) => {
                check_keys(&fields)?;
                record_from_fields(&fields).map_err(SitemapError::from)
            }
        }
    }
}

fn check_keys(fields: &Map<String, Value>) -> Result<(), SitemapError> {
    let unexpected: Vec<String> = fields
        .keys()
        .filter(|key| !ALLOWED_ENTRY_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    let missing: Vec<String> = ALLOWED_ENTRY_KEYS
        .iter()
        .filter(|key| !fields.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if unexpected.is_empty() && missing.is_empty() {
        Ok(())
    } else {
        Err(SitemapError::InvalidKeys {
            unexpected,
            missing,
        })
    }
}

fn record_from_fields(fields: &Map<String, Value>) -> Result<PageRecord, ValidationError> {
    let url = string_field(fields, RecordField::Url)?;
    let last_modified = string_field(fields, RecordField::LastMod)?;
    let priority = priority_field(fields)?;
    let frequency = string_field(fields, RecordField::Frequency)?;

    PageRecord::builder()
        .url(url)
        .last_modified(last_modified)
        .priority(priority)
        .frequency(frequency)
        .build()
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    field: RecordField,
) -> Result<&'a str, ValidationError> {
    match fields.get(field.key()) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ValidationError::new(
            field,
            format!("expected a string, found {}", value_kind(other)),
        )),
        None => Err(ValidationError::new(field, "value is missing")),
    }
}

/// Priorities may arrive as JSON numbers or numeric strings.
fn priority_field(fields: &Map<String, Value>) -> Result<f64, ValidationError> {
    let field = RecordField::Priority;
    match fields.get(field.key()) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ValidationError::new(field, format!("{n} is not representable"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::new(field, format!("'{s}' is not a number"))),
        Some(other) => Err(ValidationError::new(
            field,
            format!("expected a number, found {}", value_kind(other)),
        )),
        None => Err(ValidationError::new(field, "value is missing")),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> RawEntry {
        RawEntry::try_from(value).expect("object entry")
    }

    #[test]
    fn test_valid_mapping() {
        let record = entry(json!({
            "url": "https://example.com/",
            "lastMod": "2024-01-15",
            "priority": 0.8,
            "frequency": "daily"
        }))
        .into_record()
        .unwrap();
        assert_eq!(record.url(), "https://example.com/");
        assert_eq!(record.priority(), 0.8);
    }

    #[test]
    fn test_numeric_string_priority() {
        let record = entry(json!({
            "url": "https://example.com/",
            "lastMod": "2024-01-15",
            "priority": "0.3",
            "frequency": "monthly"
        }))
        .into_record()
        .unwrap();
        assert_eq!(record.priority(), 0.3);
    }

    #[test]
    fn test_unexpected_key_rejected_before_validation() {
        // The url is invalid too, but the key check comes first
        let err = entry(json!({
            "url": "not a url",
            "lastMod": "2024-01-15",
            "priority": 0.8,
            "frequency": "daily",
            "title": "Home"
        }))
        .into_record()
        .unwrap_err();
        match err {
            SitemapError::InvalidKeys {
                unexpected,
                missing,
            } => {
                assert_eq!(unexpected, vec!["title".to_string()]);
                assert!(missing.is_empty());
            }
            other => panic!("expected InvalidKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_rejected() {
        let err = entry(json!({
            "url": "https://example.com/",
            "lastMod": "2024-01-15"
        }))
        .into_record()
        .unwrap_err();
        match err {
            SitemapError::InvalidKeys {
                unexpected,
                missing,
            } => {
                assert!(unexpected.is_empty());
                assert_eq!(missing, vec!["priority".to_string(), "frequency".to_string()]);
            }
            other => panic!("expected InvalidKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_value_type_is_field_error() {
        let err = entry(json!({
            "url": 42,
            "lastMod": "2024-01-15",
            "priority": 0.8,
            "frequency": "daily"
        }))
        .into_record()
        .unwrap_err();
        assert!(matches!(
            err,
            SitemapError::Validation(ValidationError {
                field: RecordField::Url,
                ..
            })
        ));

        let err = entry(json!({
            "url": "https://example.com/",
            "lastMod": "2024-01-15",
            "priority": true,
            "frequency": "daily"
        }))
        .into_record()
        .unwrap_err();
        assert!(matches!(
            err,
            SitemapError::Validation(ValidationError {
                field: RecordField::Priority,
                ..
            })
        ));
    }

    #[test]
    fn test_non_object_value_is_rejected() {
        let err = RawEntry::try_from(json!(["https://example.com/"])).unwrap_err();
        assert!(matches!(err, SitemapError::InvalidEntry("an array")));
    }

    #[test]
    fn test_record_passes_through() {
        let record = PageRecord::new("https://example.com/a", "2024-02-01").unwrap();
        let same = RawEntry::from(record.clone()).into_record().unwrap();
        assert_eq!(same, record);
    }
}
