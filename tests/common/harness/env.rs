//! Isolated test environment with temp directory.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use super::{MemoCommand, TestNote};
use memo::infra::{NoteStore, render};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// The temp directory doubles as `HOME`, so commands never see the real
/// user's config. It is cleaned up on drop.
pub struct TestEnv {
    temp_dir: TempDir,
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        std::fs::create_dir(&notes_dir).expect("Failed to create notes directory");
        Self {
            temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the directory used as `HOME` for spawned commands.
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns a store over the notes directory.
    pub fn store(&self) -> NoteStore {
        NoteStore::new(&self.notes_dir)
    }

    /// Writes a test note into the notes directory and returns its path.
    ///
    /// The file is rendered as-is, so the note keeps the timestamps set on
    /// the builder.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        let path = self.store().path_for(test_note.note_id());
        let text = render(&test_note.to_note()).expect("Failed to render test note");
        std::fs::write(&path, text).expect("Failed to write test note");
        path
    }

    /// Creates a MemoCommand configured for this test environment.
    pub fn cmd(&self) -> MemoCommand {
        MemoCommand::new().home(self.home()).dir(&self.notes_dir)
    }

    /// Writes a file to the notes directory and returns its path.
    ///
    /// Useful for planting files the store should skip or reject.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the ids of all `.note` files in the notes directory.
    pub fn note_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = std::fs::read_dir(&self.notes_dir)
            .expect("Failed to read notes directory")
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? != "note" {
                    return None;
                }
                Some(path.file_stem()?.to_string_lossy().into_owned())
            })
            .collect();
        ids.sort();
        ids
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Phase 1: TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir(), "notes directory should exist");
        assert!(env.notes_dir().starts_with(env.home()));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.home().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }

    // ===========================================
    // Phase 3: TestEnv Note Addition
    // ===========================================

    #[test]
    fn test_env_add_note_creates_file() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("Test Note"));

        assert!(path.is_file(), "note should be a file");
        assert!(path.extension().is_some_and(|ext| ext == "note"));
    }

    #[test]
    fn test_env_add_note_loadable() {
        let env = TestEnv::new();
        let note = TestNote::new("Loadable Note")
            .tag("integration")
            .author("Ada")
            .content("This is a test.");

        env.add_note(&note);
        let loaded = env
            .store()
            .find_by_id(note.note_id())
            .expect("Should load the note");

        assert_eq!(loaded.title(), "Loadable Note");
        assert_eq!(loaded.tags()[0].as_str(), "integration");
        assert_eq!(loaded.author(), "Ada");
        assert_eq!(loaded.content(), "This is a test.");
    }

    #[test]
    fn test_env_add_multiple_notes() {
        let env = TestEnv::new();

        env.add_note(&TestNote::new("First Note"));
        env.add_note(&TestNote::new("Second Note"));
        env.add_note(&TestNote::new("Third Note"));

        assert_eq!(env.note_ids().len(), 3);
    }
}
