//! Command handlers for the CLI.

mod create;
mod delete;
mod edit;
mod list;
mod read;
mod search;
mod stats;


use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io;

use crate::cli::{Cli, CompletionsArgs};
use crate::domain::{Note, NoteId};
use crate::infra::{NoteStore, StoreError};

// Re-export public items
pub use create::handle_create;
pub use delete::handle_delete;
pub use edit::{EditorLauncher, SystemEditor, handle_edit};
pub use list::handle_list;
pub use read::handle_read;
pub use search::handle_search;
pub use stats::handle_stats;

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

// ===========================================
// Shared Utilities
// ===========================================

/// Loads every readable note, reporting skipped files on stderr.
pub(crate) fn load_notes(store: &NoteStore) -> Result<Vec<Note>> {
    let report = store
        .load_all()
        .with_context(|| format!("failed to load notes from {}", store.dir().display()))?;

    for warning in report.warnings {
        eprintln!("warning: {}", warning_message(warning));
    }
    Ok(report.notes)
}

/// One-line rendering of a skipped file's error, causes included.
pub(crate) fn warning_message(warning: StoreError) -> String {
    format!("{:#}", anyhow::Error::new(warning))
}

/// Loads a single note by id with a user-facing error.
pub(crate) fn find_note(store: &NoteStore, id: &NoteId) -> Result<Note> {
    store
        .find_by_id(id)
        .with_context(|| format!("failed to read note {}", id))
}

/// Id of a note that came from the store.
pub(crate) fn note_id(note: &Note) -> String {
    note.id().map(|id| id.to_string()).unwrap_or_default()
}

/// Comma-separated tag names.
pub(crate) fn join_tags(note: &Note) -> String {
    let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
    tags.join(", ")
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
