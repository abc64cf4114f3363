//! Output format types for CLI commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;
use crate::query::Stats;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    /// Position in the listing, usable in place of the id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<usize>,
    pub id: String,
    pub title: String,
    pub created: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl NoteListing {
    pub fn new(note: &Note, number: Option<usize>) -> Self {
        Self {
            number,
            id: note.id().map(|id| id.to_string()).unwrap_or_default(),
            title: note.title().to_string(),
            created: note.created(),
            tags: tag_names(note),
        }
    }
}

/// A full note.
#[derive(Debug, Serialize)]
pub struct NoteDetail {
    pub id: String,
    pub title: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: i64,
    pub content: String,
}

impl From<&Note> for NoteDetail {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().map(|id| id.to_string()).unwrap_or_default(),
            title: note.title().to_string(),
            created: note.created(),
            modified: note.modified(),
            tags: tag_names(note),
            author: note.author().to_string(),
            status: note.status().to_string(),
            priority: note.priority(),
            content: note.content().to_string(),
        }
    }
}

/// A tag with its number of occurrences.
#[derive(Debug, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Collection statistics.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub total_notes: usize,
    pub total_words: usize,
    pub average_words: Option<f64>,
    pub oldest: Option<NoteListing>,
    pub newest: Option<NoteListing>,
    pub tags: Vec<TagCount>,
}

impl From<&Stats<'_>> for StatsReport {
    fn from(stats: &Stats<'_>) -> Self {
        Self {
            total_notes: stats.total_notes,
            total_words: stats.total_words,
            average_words: stats.average_words(),
            oldest: stats.oldest.map(|n| NoteListing::new(n, None)),
            newest: stats.newest.map(|n| NoteListing::new(n, None)),
            tags: stats
                .tags_by_count()
                .into_iter()
                .map(|(name, count)| TagCount {
                    name: name.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

fn tag_names(note: &Note) -> Vec<String> {
    note.tags().iter().map(|t| t.to_string()).collect()
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// Prints a value as pretty JSON wrapped in `{"data": ...}`.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&Output::new(data))?);
    Ok(())
}
