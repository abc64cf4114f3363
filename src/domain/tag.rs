//! Tag type for labelling notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A free-form label attached to a note.
///
/// Tags keep the spelling they were written with, so `Work` stays `Work` on
/// disk. Comparisons used for searching and filtering are case-insensitive;
/// see [`Tag::matches`]. Equality (`==`) is exact, which keeps round-trips
/// through the note file lossless.
///
/// # Validation Rules
/// - Surrounding whitespace is trimmed
/// - Must be non-empty after trimming
/// - Must fit on a single line
///
/// # Examples
///
/// ```
/// use memo::domain::Tag;
///
/// let tag = Tag::new(" Work ").unwrap();
/// assert_eq!(tag.as_str(), "Work");
/// assert!(tag.matches("work"));
/// assert!(!tag.matches("workshop"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if:
    /// - The tag is empty or whitespace-only
    /// - The tag contains a line break
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if trimmed.contains(['\n', '\r']) {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot span multiple lines",
                trimmed.escape_debug()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Parses a comma-separated list such as `"work, urgent"`.
    ///
    /// Empty entries (`"a,,b"`, trailing commas) are skipped.
    pub fn parse_list(input: &str) -> Result<Vec<Tag>, ParseTagError> {
        input
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Tag::new)
            .collect()
    }

    /// Returns the tag as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive exact comparison.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).map_err(serde::de::Error::custom)
    }
}
