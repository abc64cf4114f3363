//! Directory-backed note storage with atomic writes.

use crate::domain::{Note, NoteId, ParseNoteError, Tag};
use crate::infra::frontmatter::{self, DecodeError, EncodeError};
use log::debug;
use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Notes directory used when none is configured, relative to the working
/// directory.
pub const DEFAULT_DIR: &str = ".memo-notes";

/// File extension of note files.
pub const DEFAULT_EXTENSION: &str = "note";

/// Errors during note storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    #[error("I/O error for {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode note at {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("failed to encode note for {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },

    #[error("file name is not a valid note id: {path}")]
    InvalidFileName { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("{0}")]
    InvalidNote(#[from] ParseNoteError),
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result of reading every note in the store.
///
/// Files that could not be read or decoded don't abort the load; each one is
/// reported in `warnings` instead.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub notes: Vec<Note>,
    pub warnings: Vec<StoreError>,
}

/// Field changes applied by [`NoteStore::update`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteUpdate {
    pub content: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub priority: Option<i64>,
}

impl NoteUpdate {
    /// Returns true if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(self, note: &mut Note) {
        if let Some(content) = self.content {
            note.update_content(content);
        }
        if let Some(tags) = self.tags {
            note.update_tags(tags);
        }
        if let Some(author) = self.author {
            note.set_author(author);
        }
        if let Some(status) = self.status {
            note.set_status(status);
        }
        if let Some(priority) = self.priority {
            note.set_priority(priority);
        }
    }
}

/// A directory of note files, one note per `<id>.note` file.
///
/// The store is the only place that assigns paths to notes: a note decoded
/// elsewhere has none until it is saved here.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
    extension: String,
}

impl NoteStore {
    /// Creates a store over `dir`. Nothing is touched on disk until the first
    /// write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Returns the notes directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the notes directory and its parents if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotADirectory` if the path exists but is a file.
    /// Returns `StoreError::Io` if the directory can't be created.
    pub fn ensure_directory(&self) -> Result<(), StoreError> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(StoreError::NotADirectory {
                path: self.dir.clone(),
            });
        }
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))
    }

    /// Returns the file path for a note id.
    pub fn path_for(&self, id: &NoteId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, self.extension))
    }

    /// Generates an id not used by any file in the store.
    pub fn generate_id(&self) -> NoteId {
        loop {
            let id = NoteId::generate();
            if !self.path_for(&id).exists() {
                return id;
            }
            debug!("note id {} already taken, generating another", id);
        }
    }

    /// Writes a note to disk, returning its id.
    ///
    /// A note without a path gets a fresh id first. The file is written to a
    /// temporary file in the notes directory and renamed over the target, so
    /// a failed write never leaves a truncated note behind. Saving stamps
    /// `modified` with the current time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or temp file can't be created.
    /// Returns `StoreError::AtomicWrite` if the final rename fails.
    /// Returns `StoreError::Encode` if the note can't be serialized.
    pub fn save(&self, note: &mut Note) -> Result<NoteId, StoreError> {
        self.ensure_directory()?;

        let id = match note.id() {
            Some(id) => id,
            None => {
                let id = self.generate_id();
                note.assign_path(self.path_for(&id));
                id
            }
        };
        let path = self.path_for(&id);

        let content = frontmatter::encode(note).map_err(|source| StoreError::Encode {
            path: path.clone(),
            source,
        })?;
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::io(&path, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| StoreError::io(&path, e))?;
        temp.persist(&path).map_err(|e| StoreError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        debug!("saved note {} to {}", id, path.display());
        Ok(id)
    }

    /// Creates and saves a new note.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidNote` if the title is empty, or any error
    /// from [`NoteStore::save`].
    pub fn create(
        &self,
        title: &str,
        content: &str,
        tags: Vec<Tag>,
    ) -> Result<(NoteId, Note), StoreError> {
        let mut note = Note::new(title, content, tags)?;
        let id = self.save(&mut note)?;
        Ok((id, note))
    }

    /// Reads every note in the store, in file name order.
    ///
    /// Only regular, non-hidden files directly inside the notes directory with
    /// the note extension are considered. A missing directory holds no notes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotADirectory` if the notes path is a file. Problems
    /// with individual files are reported in [`LoadReport::warnings`].
    pub fn load_all(&self) -> Result<LoadReport, StoreError> {
        let mut report = LoadReport::default();

        if !self.dir.exists() {
            return Ok(report);
        }
        if !self.dir.is_dir() {
            return Err(StoreError::NotADirectory {
                path: self.dir.clone(),
            });
        }

        let entries = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in entries {
            let result = match entry {
                Ok(entry) if entry.file_type().is_file() && self.has_extension(&entry) => {
                    self.read_note(entry.path())
                }
                Ok(_) => continue,
                Err(e) => {
                    let path = e.path().unwrap_or(&self.dir).to_path_buf();
                    Err(StoreError::Io {
                        path,
                        source: e.into(),
                    })
                }
            };

            match result {
                Ok(note) => report.notes.push(note),
                Err(e) => {
                    debug!("skipping {}", e);
                    report.warnings.push(e);
                }
            }
        }

        debug!(
            "loaded {} notes from {} ({} skipped)",
            report.notes.len(),
            self.dir.display(),
            report.warnings.len()
        );
        Ok(report)
    }

    /// Reads a single note.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no file has this id.
    /// Returns `StoreError::Decode` if the file exists but isn't a valid note.
    pub fn find_by_id(&self, id: &NoteId) -> Result<Note, StoreError> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(StoreError::NotFound { id: id.clone() });
        }
        self.read_note(&path)
    }

    /// Removes a note's file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no file has this id.
    pub fn delete(&self, id: &NoteId) -> Result<(), StoreError> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(StoreError::NotFound { id: id.clone() });
        }
        fs::remove_file(&path).map_err(|e| StoreError::io(&path, e))?;
        debug!("deleted note {} at {}", id, path.display());
        Ok(())
    }

    /// Applies field changes to a stored note and saves it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`NoteStore::find_by_id`] or [`NoteStore::save`].
    pub fn update(&self, id: &NoteId, update: NoteUpdate) -> Result<Note, StoreError> {
        let mut note = self.find_by_id(id)?;
        update.apply(&mut note);
        self.save(&mut note)?;
        Ok(note)
    }

    /// Re-reads a note and saves it again, stamping `modified`.
    ///
    /// Used after the file was edited outside the store.
    ///
    /// # Errors
    ///
    /// Returns any error from [`NoteStore::find_by_id`] or [`NoteStore::save`].
    pub fn touch(&self, id: &NoteId) -> Result<Note, StoreError> {
        let mut note = self.find_by_id(id)?;
        self.save(&mut note)?;
        Ok(note)
    }

    fn read_note(&self, path: &Path) -> Result<Note, StoreError> {
        let stem_is_id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.parse::<NoteId>().is_ok());
        if !stem_is_id {
            return Err(StoreError::InvalidFileName { path: path.into() });
        }

        let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
        let mut note = frontmatter::decode(&bytes).map_err(|e| StoreError::Decode {
            path: path.into(),
            source: e,
        })?;
        note.assign_path(path.to_path_buf());
        Ok(note)
    }

    fn has_extension(&self, entry: &DirEntry) -> bool {
        entry
            .path()
            .extension()
            .is_some_and(|e| e == self.extension.as_str())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}
