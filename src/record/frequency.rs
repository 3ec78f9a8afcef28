//! Change frequency tokens.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error_handling::{RecordField, ValidationError};

/// How often a page is expected to change.
///
/// Parsing is a case-sensitive exact match on the lowercase token.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChangeFrequency {
    /// Changes on every access
    Always,
    /// Hourly
    Hourly,
    /// Daily
    Daily,
    /// Weekly (default)
    #[default]
    Weekly,
    /// Monthly
    Monthly,
    /// Yearly
    Yearly,
    /// Archived content that never changes
    Never,
}

/// Raw frequency input: the enum itself, or a token to be matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyInput {
    /// A frequency chosen by the caller
    Known(ChangeFrequency),
    /// A token still to be matched
    Token(String),
}

impl From<ChangeFrequency> for FrequencyInput {
    fn from(value: ChangeFrequency) -> Self {
        FrequencyInput::Known(value)
    }
}

impl From<&str> for FrequencyInput {
    fn from(value: &str) -> Self {
        FrequencyInput::Token(value.to_string())
    }
}

impl From<String> for FrequencyInput {
    fn from(value: String) -> Self {
        FrequencyInput::Token(value)
    }
}

impl Default for FrequencyInput {
    fn default() -> Self {
        FrequencyInput::Known(ChangeFrequency::default())
    }
}

impl FrequencyInput {
    /// Matches the input against the known tokens.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for the `frequency` field on an unknown token.
    pub fn resolve(&self) -> Result<ChangeFrequency, ValidationError> {
        match self {
            FrequencyInput::Known(freq) => Ok(*freq),
            FrequencyInput::Token(token) => token.parse().map_err(|_| {
                ValidationError::new(
                    RecordField::Frequency,
                    format!(
                        "'{token}' is not one of always, hourly, daily, weekly, monthly, yearly, never"
                    ),
                )
            }),
        }
    }
}
