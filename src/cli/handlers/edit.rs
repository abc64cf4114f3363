//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

use super::create::parse_tags;
use super::{find_note, join_tags};
use crate::cli::EditArgs;
use crate::cli::config::Config;
use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::domain::Note;
use crate::infra::{NoteStore, NoteUpdate};

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Runs the editor command from the config or environment.
pub struct SystemEditor<'a>(pub &'a Config);

impl EditorLauncher for SystemEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        open_in_editor(path, &self.0.editor())
    }
}

/// Opens a file with an editor command, which may include arguments
/// (e.g. `code --wait`).
fn open_in_editor(path: &Path, editor: &str) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let Some(cmd) = parts.next() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

/// Edits a note.
///
/// Field options apply directly. `--editor` opens the file and restamps
/// `modified` afterwards. With neither, the user is prompted for new content
/// and tags, where an empty answer keeps the current value.
pub fn handle_edit<P: Prompter, E: EditorLauncher>(
    args: &EditArgs,
    store: &NoteStore,
    session: &Session,
    prompter: &mut P,
    editor: &E,
) -> Result<()> {
    let id = session.resolve(&args.note)?;
    let note = find_note(store, &id)?;

    if args.editor {
        editor.open(&store.path_for(&id))?;
        let note = store
            .touch(&id)
            .with_context(|| format!("note {} is not valid after editing", id))?;
        println!("Edited: {}", note);
        return Ok(());
    }

    let mut update = update_from_args(args)?;
    if update.is_empty() {
        update = prompt_for_update(&note, prompter)?;
    }
    if update.is_empty() {
        println!("No changes made.");
        return Ok(());
    }

    store
        .update(&id, update)
        .with_context(|| format!("failed to update note {}", id))?;
    println!("Note updated successfully!");
    Ok(())
}

fn update_from_args(args: &EditArgs) -> Result<NoteUpdate> {
    Ok(NoteUpdate {
        content: args.content.clone(),
        tags: args.tags.as_deref().map(parse_tags).transpose()?,
        author: args.author.clone(),
        status: args.status.clone(),
        priority: args.priority,
    })
}

fn prompt_for_update<P: Prompter>(note: &Note, prompter: &mut P) -> Result<NoteUpdate> {
    println!("Editing note: {}", note.title());
    println!("Current content:");
    println!("{}", note.content());
    println!();

    let content = prompter.ask("Enter new content (leave empty to keep current): ")?;

    println!("Current tags: {}", join_tags(note));
    let tags = prompter.ask("Enter new tags (comma-separated, leave empty to keep current): ")?;

    Ok(NoteUpdate {
        content: non_empty(content),
        tags: non_empty(tags).as_deref().map(parse_tags).transpose()?,
        ..NoteUpdate::default()
    })
}

fn non_empty(answer: String) -> Option<String> {
    if answer.trim().is_empty() {
        None
    } else {
        Some(answer)
    }
}
