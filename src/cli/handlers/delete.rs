//! Delete command handler.

use anyhow::{Context, Result};
use log::{info, warn};

use crate::cli::DeleteArgs;
use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::domain::NoteId;
use crate::infra::{NoteStore, StoreError};

/// Deletes a note after confirmation (skipped with `--yes`).
///
/// Notes that no longer decode can still be deleted; the prompt names them by
/// id instead of title.
pub fn handle_delete<P: Prompter>(
    args: &DeleteArgs,
    store: &NoteStore,
    session: &Session,
    prompter: &mut P,
) -> Result<()> {
    let id = session.resolve(&args.note)?;

    if !args.yes {
        let question = format!(
            "Are you sure you want to delete '{}'? (y/N): ",
            describe(store, &id)?
        );
        if !prompter.confirm(&question)? {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    store
        .delete(&id)
        .with_context(|| format!("failed to delete note {}", id))?;

    info!("deleted note {}", id);
    println!("Note deleted successfully!");
    Ok(())
}

/// Title of the note, or its id when the file can't be decoded.
fn describe(store: &NoteStore, id: &NoteId) -> Result<String> {
    match store.find_by_id(id) {
        Ok(note) => Ok(note.title().to_string()),
        Err(err @ StoreError::Decode { .. }) => {
            warn!("{:#}", anyhow::Error::new(err));
            Ok(format!("{} (unreadable)", id))
        }
        Err(err) => Err(err).with_context(|| format!("failed to read note {}", id)),
    }
}
