//! Front matter codec: converts between note files and [`Note`] values.
//!
//! A note file is a YAML metadata block between two `---` lines, a blank
//! line, and the body:
//!
//! ```text
//! ---
//! title: Note Title
//! created: 2024-01-15T10:30:00Z
//! modified: 2024-01-15T10:30:00Z
//! tags: [work, urgent]
//! ---
//!
//! Body content here...
//! ```

use crate::domain::{Note, Tag};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// First line of every note file.
const OPENING: &str = "---\n";

/// Separator between the metadata block and the body.
const CLOSING: &str = "\n---\n";

/// Ways a file can fail to be a front matter document at all.
#[derive(Debug, Error)]
pub enum Malformation {
    #[error("note is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },

    #[error("missing opening front matter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing front matter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("invalid YAML: {0}")]
    InvalidYaml(serde_yaml::Error),

    #[error("front matter is not a key/value mapping")]
    NotAMapping,
}

/// Errors while decoding a note file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed front matter")]
    MalformedFrontMatter(#[from] Malformation),

    #[error("invalid metadata '{key}': {reason}")]
    InvalidMetadata { key: &'static str, reason: String },
}

impl DecodeError {
    /// Returns the metadata key at fault, if the error concerns one.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            DecodeError::InvalidMetadata { key, .. } => Some(key),
            DecodeError::MalformedFrontMatter(_) => None,
        }
    }
}

/// Errors while encoding a note.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize unrecognized front matter keys")]
    Extra(#[source] serde_yaml::Error),
}

fn invalid(key: &'static str, reason: impl Into<String>) -> DecodeError {
    DecodeError::InvalidMetadata {
        key,
        reason: reason.into(),
    }
}

/// Decodes raw file bytes into a note.
///
/// The returned note has no path; the store assigns it.
///
/// # Errors
///
/// Returns `DecodeError::MalformedFrontMatter` if:
/// - The bytes are not UTF-8
/// - The text doesn't start with `---` and a newline (this includes legacy
///   notes written without a header)
/// - There's no closing `---` line
/// - The metadata block is not a YAML mapping
///
/// Returns `DecodeError::InvalidMetadata` if `title`, `created` or `modified`
/// is missing or unparsable, or an optional field has the wrong type.
pub fn decode(raw: &[u8]) -> Result<Note, DecodeError> {
    let text = std::str::from_utf8(raw).map_err(|e| Malformation::InvalidEncoding {
        offset: e.valid_up_to(),
    })?;
    decode_str(text)
}

/// Decodes note text. See [`decode`].
pub fn decode_str(text: &str) -> Result<Note, DecodeError> {
    let (yaml, body) = split(text)?;
    let raw = RawFrontMatter::from_mapping(parse_mapping(yaml)?);

    let title = required_string("title", raw.title)?;
    let created = required_timestamp("created", raw.created)?;
    let modified = required_timestamp("modified", raw.modified)?;

    Note::builder(title, created, modified)
        .content(body)
        .tags(tag_list(raw.tags)?)
        .author(optional_string("author", raw.author)?)
        .status(optional_string("status", raw.status)?)
        .priority(priority(raw.priority)?)
        .extra(raw.extra)
        .build()
        .map_err(|e| invalid("title", e.to_string()))
}

/// Serializes a note, first stamping `modified` with the current time.
///
/// Saving a note therefore always marks it as touched, even when nothing else
/// changed. Use [`render`] to serialize without the side effect.
///
/// # Errors
///
/// See [`render`].
pub fn encode(note: &mut Note) -> Result<String, EncodeError> {
    note.touch();
    render(note)
}

/// Serializes a note as it currently is.
///
/// Field order is `title`, `created`, `modified`, `tags`, then `author`,
/// `status` and `priority` when set, then any unrecognized keys the note was
/// decoded with. Tags are always written, as `[]` when there are none.
///
/// # Errors
///
/// Returns `EncodeError::Extra` if the unrecognized keys can't be written
/// back as YAML.
pub fn render(note: &Note) -> Result<String, EncodeError> {
    let mut out = String::from(OPENING);

    push_entry(&mut out, "title", &scalar(note.title()));
    push_entry(&mut out, "created", &timestamp(note.created()));
    push_entry(&mut out, "modified", &timestamp(note.modified()));
    push_entry(&mut out, "tags", &flow_sequence(note.tags()));

    if !note.author().is_empty() {
        push_entry(&mut out, "author", &scalar(note.author()));
    }
    if !note.status().is_empty() {
        push_entry(&mut out, "status", &scalar(note.status()));
    }
    if note.priority() != 0 {
        push_entry(&mut out, "priority", &note.priority().to_string());
    }
    if !note.extra().is_empty() {
        let yaml = serde_yaml::to_string(note.extra()).map_err(EncodeError::Extra)?;
        out.push_str(&yaml);
    }

    out.push_str("---\n\n");
    if !note.content().is_empty() {
        out.push_str(note.content());
        out.push('\n');
    }
    Ok(out)
}

/// Splits text into the metadata block and the body.
fn split(text: &str) -> Result<(&str, &str), Malformation> {
    let rest = text
        .strip_prefix(OPENING)
        .ok_or(Malformation::MissingOpeningDelimiter)?;

    // `---\n---\n`: the block closes on the very next line
    if let Some(body) = rest.strip_prefix(OPENING) {
        return Ok(("", body));
    }

    let end = rest
        .find(CLOSING)
        .ok_or(Malformation::MissingClosingDelimiter)?;
    Ok((&rest[..end], &rest[end + CLOSING.len()..]))
}

fn parse_mapping(yaml: &str) -> Result<Mapping, Malformation> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str(yaml).map_err(Malformation::InvalidYaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(Malformation::NotAMapping),
    }
}

/// Front matter values sorted into known fields and everything else.
#[derive(Default)]
struct RawFrontMatter {
    title: Option<Value>,
    created: Option<Value>,
    modified: Option<Value>,
    tags: Option<Value>,
    author: Option<Value>,
    status: Option<Value>,
    priority: Option<Value>,
    extra: Mapping,
}

impl RawFrontMatter {
    fn from_mapping(mapping: Mapping) -> Self {
        let mut raw = Self::default();
        for (key, value) in mapping {
            let slot = match key.as_str() {
                Some("title") => &mut raw.title,
                Some("created") => &mut raw.created,
                Some("modified") => &mut raw.modified,
                Some("tags") => &mut raw.tags,
                Some("author") => &mut raw.author,
                Some("status") => &mut raw.status,
                Some("priority") => &mut raw.priority,
                _ => {
                    raw.extra.insert(key, value);
                    continue;
                }
            };
            *slot = Some(value);
        }
        raw
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Reads a scalar as text. Numbers and booleans are taken literally, the way
/// a hand-written `title: 2024` is meant.
fn scalar_text(key: &'static str, value: Value) -> Result<Option<String>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(invalid(
            key,
            format!("expected a string, found {}", describe(&other)),
        )),
    }
}

fn required_string(key: &'static str, value: Option<Value>) -> Result<String, DecodeError> {
    let text = match value {
        Some(value) => scalar_text(key, value)?,
        None => None,
    };
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(invalid(key, "value cannot be empty")),
        None => Err(invalid(key, "required field is missing")),
    }
}

fn optional_string(key: &'static str, value: Option<Value>) -> Result<String, DecodeError> {
    match value {
        Some(value) => Ok(scalar_text(key, value)?.unwrap_or_default()),
        None => Ok(String::new()),
    }
}

fn required_timestamp(
    key: &'static str,
    value: Option<Value>,
) -> Result<DateTime<Utc>, DecodeError> {
    let text = required_string(key, value)?;
    parse_timestamp(&text)
        .ok_or_else(|| invalid(key, format!("'{}' is not an ISO-8601 timestamp", text)))
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (any offset, normalized to UTC), a date-time without an
/// offset (taken as UTC) and a bare date (midnight UTC).
pub(crate) fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn tag_list(value: Option<Value>) -> Result<Vec<Tag>, DecodeError> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(items)) => items,
        Some(other) => {
            return Err(invalid(
                "tags",
                format!("expected a sequence, found {}", describe(&other)),
            ));
        }
    };

    items
        .into_iter()
        .map(|item| {
            let text = scalar_text("tags", item)?
                .ok_or_else(|| invalid("tags", "tag cannot be null"))?;
            Tag::new(&text).map_err(|e| invalid("tags", e.to_string()))
        })
        .collect()
}

fn priority(value: Option<Value>) -> Result<i64, DecodeError> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| invalid("priority", format!("'{}' is not an integer", n))),
        Some(other) => Err(invalid(
            "priority",
            format!("expected an integer, found {}", describe(&other)),
        )),
    }
}

fn push_entry(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}

fn timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn scalar(text: &str) -> String {
    if is_plain_safe(text, false) {
        text.to_string()
    } else {
        quoted(text)
    }
}

fn flow_sequence(tags: &[Tag]) -> String {
    let items: Vec<String> = tags
        .iter()
        .map(|tag| {
            if is_plain_safe(tag.as_str(), true) {
                tag.as_str().to_string()
            } else {
                quoted(tag.as_str())
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// Double-quoted YAML scalar. Characters YAML can't carry raw are escaped.
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if is_printable(c) => out.push(c),
            c if u32::from(c) <= 0xFF => out.push_str(&format!("\\x{:02X}", u32::from(c))),
            c => out.push_str(&format!("\\u{:04X}", u32::from(c))),
        }
    }
    out.push('"');
    out
}

/// YAML's printable set, minus the characters YAML 1.1 readers treat as line
/// breaks (NEL, LS, PS).
fn is_printable(c: char) -> bool {
    matches!(
        c,
        '\u{20}'..='\u{7E}'
            | '\u{A0}'..='\u{2027}'
            | '\u{202A}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Words YAML 1.1 readers load as booleans or null.
const RESERVED_WORDS: &[&str] = &["y", "n", "yes", "no", "on", "off", "true", "false", "null"];

/// Whether `text` reads back as the identical string when written unquoted.
fn is_plain_safe(text: &str, in_flow: bool) -> bool {
    if text.is_empty() || RESERVED_WORDS.contains(&text.to_lowercase().as_str()) {
        return false;
    }
    if in_flow && text.contains([',', '[', ']', '{', '}', ':', '#', '"', '\'']) {
        return false;
    }
    if !text.chars().all(is_printable) {
        return false;
    }
    matches!(serde_yaml::from_str::<Value>(text), Ok(Value::String(ref parsed)) if parsed == text)
}
