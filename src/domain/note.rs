//! Note struct: front matter metadata, body and on-disk location.

use crate::domain::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde_yaml::Mapping;
use std::fmt;
use std::path::{Path, PathBuf};

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A note: metadata, body text and the file it lives in.
///
/// # Required Fields
/// - `title`: Human-readable title (non-empty, trimmed)
/// - `created`: When the note was created, fixed for the note's lifetime
/// - `modified`: When the note was last changed, never earlier than `created`
///
/// # Optional Fields
/// - `content`: Body text, stored trimmed
/// - `tags`: Labels in the order they were given; duplicates are kept
/// - `author`, `status`: Empty when unset
/// - `priority`: Zero when unset
/// - `extra`: Front matter keys this crate does not know about, kept so that
///   hand-added metadata survives a save
///
/// Every mutator restamps `modified`.
///
/// # Examples
///
/// ```
/// use memo::domain::{Note, Tag};
///
/// let mut note = Note::new("Groceries", "milk, eggs", vec![Tag::new("home").unwrap()]).unwrap();
/// assert_eq!(note.title(), "Groceries");
/// assert!(note.modified() >= note.created());
///
/// note.update_content("milk, eggs, bread");
/// assert_eq!(note.word_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    title: String,
    content: String,
    tags: Vec<Tag>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    author: String,
    status: String,
    priority: i64,
    extra: Mapping,
    path: Option<PathBuf>,
}

impl Note {
    /// Creates a new note stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Result<Self, ParseNoteError> {
        let now = Utc::now();
        Self::builder(title, now, now)
            .content(content)
            .tags(tags)
            .build()
    }

    /// Creates a builder for constructing a Note with explicit timestamps.
    pub fn builder(
        title: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder::new(title, created, modified)
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Returns the author, or an empty string.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the status, or an empty string.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the priority, or zero.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Returns unrecognized front matter entries.
    pub fn extra(&self) -> &Mapping {
        &self.extra
    }

    /// Returns the file backing this note, if it has been placed in a store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the id encoded in the file name, if the note has a path.
    pub fn id(&self) -> Option<NoteId> {
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse().ok())
    }

    /// Number of whitespace-separated words in the body.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Replaces the body.
    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into().trim().to_string();
        self.touch();
    }

    /// Replaces the tag list.
    pub fn update_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
        self.touch();
    }

    /// Sets the author; an empty string clears it.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into().trim().to_string();
        self.touch();
    }

    /// Sets the status; an empty string clears it.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into().trim().to_string();
        self.touch();
    }

    /// Sets the priority; zero clears it.
    pub fn set_priority(&mut self, priority: i64) {
        self.priority = priority;
        self.touch();
    }

    /// Stamps `modified` with the current time.
    pub fn touch(&mut self) {
        self.touch_at(Utc::now());
    }

    /// Stamps `modified` with `now`, clamped so it never precedes `created`.
    pub fn touch_at(&mut self, now: DateTime<Utc>) {
        self.modified = now.max(self.created);
    }

    /// Records where the note is stored. Only the store assigns paths.
    pub(crate) fn assign_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "{} [{}]", self.title, id.prefix()),
            None => write!(f, "{}", self.title),
        }
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    title: String,
    content: String,
    tags: Vec<Tag>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    author: String,
    status: String,
    priority: i64,
    extra: Mapping,
}

impl NoteBuilder {
    fn new(title: impl Into<String>, created: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            created,
            modified,
            author: String::new(),
            status: String::new(),
            priority: 0,
            extra: Mapping::new(),
        }
    }

    /// Sets the body. Surrounding whitespace is trimmed.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into().trim().to_string();
        self
    }

    /// Sets the note's tags.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into().trim().to_string();
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into().trim().to_string();
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets unrecognized front matter entries.
    pub fn extra(mut self, extra: Mapping) -> Self {
        self.extra = extra;
        self
    }

    /// Builds the Note.
    ///
    /// A `modified` earlier than `created` is raised to `created`.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        let trimmed = self.title.trim();

        if trimmed.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }

        Ok(Note {
            title: trimmed.to_string(),
            content: self.content,
            tags: self.tags,
            created: self.created,
            modified: self.modified.max(self.created),
            author: self.author,
            status: self.status,
            priority: self.priority,
            extra: self.extra,
            path: None,
        })
    }
}
