//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Utc};
use memo::domain::{Note, NoteId, Tag};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an ID and timestamps, with a fluent API
/// for setting optional fields.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    title: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    tags: Vec<Tag>,
    content: String,
    author: String,
    status: String,
    priority: i64,
}

#[allow(dead_code)]
impl TestNote {
    /// Creates a new test note with the given title.
    ///
    /// Automatically generates a unique ID and sets timestamps to now.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::generate(),
            title: title.into(),
            created: now,
            modified: now,
            tags: Vec::new(),
            content: String::new(),
            author: String::new(),
            status: String::new(),
            priority: 0,
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets both timestamps from an RFC 3339 string.
    pub fn created(mut self, timestamp: &str) -> Self {
        let at = DateTime::parse_from_rfc3339(timestamp)
            .expect("Invalid timestamp")
            .with_timezone(&Utc);
        self.created = at;
        self.modified = at;
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.push(Tag::new(tag.as_ref()).expect("Invalid tag"));
        self
    }

    /// Sets the body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> &str {
        self.id.prefix()
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ID.
    pub fn note_id(&self) -> &NoteId {
        &self.id
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::builder(&self.title, self.created, self.modified)
            .content(&self.content)
            .tags(self.tags.clone())
            .author(&self.author)
            .status(&self.status)
            .priority(self.priority)
            .build()
            .expect("TestNote should always produce valid Note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Phase 2: TestNote Builder
    // ===========================================

    #[test]
    fn test_note_new_with_title() {
        let note = TestNote::new("My Test Note");
        assert_eq!(note.title(), "My Test Note");
    }

    #[test]
    fn test_note_generates_id() {
        let note = TestNote::new("Test");
        assert_eq!(note.note_id().as_str().len(), 26, "Should generate a valid ULID");
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Architecture Decisions")
            .tag("adr")
            .status("accepted")
            .priority(3)
            .content("We chose Rust.");

        let domain_note = note.to_note();
        assert_eq!(domain_note.title(), "Architecture Decisions");
        assert_eq!(domain_note.content(), "We chose Rust.");
        assert_eq!(domain_note.status(), "accepted");
        assert_eq!(domain_note.priority(), 3);
        assert_eq!(domain_note.tags()[0].as_str(), "adr");
    }

    #[test]
    fn test_note_custom_id_and_timestamp() {
        let note = TestNote::new("Test")
            .id("01HQ3K5M7NXJK4QZPW8V2R6T9Y")
            .created("2024-01-15T10:30:00Z");
        assert_eq!(note.id_prefix(), "01HQ3K5M7N");
        assert_eq!(note.to_note().created().to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }
}
