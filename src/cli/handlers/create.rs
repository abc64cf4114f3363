//! Create command handler.

use anyhow::{Context, Result, bail};
use log::info;

use crate::cli::CreateArgs;
use crate::cli::prompt::Prompter;
use crate::domain::{Note, NoteId, Tag};
use crate::infra::NoteStore;

/// Creates a note from the arguments, prompting for title, content and tags
/// when no title was given.
pub fn handle_create<P: Prompter>(
    args: &CreateArgs,
    store: &NoteStore,
    prompter: &mut P,
) -> Result<NoteId> {
    let (title, content, tags) = match &args.title {
        Some(title) => (
            title.clone(),
            args.content.clone().unwrap_or_default(),
            parse_tags(&args.tags.join(","))?,
        ),
        None => {
            let title = prompter.ask("Enter note title: ")?;
            if title.trim().is_empty() {
                bail!("title cannot be empty");
            }
            let content = match &args.content {
                Some(content) => content.clone(),
                None => prompter.ask("Enter note content: ")?,
            };
            let tags = if args.tags.is_empty() {
                parse_tags(&prompter.ask("Enter tags (comma-separated): ")?)?
            } else {
                parse_tags(&args.tags.join(","))?
            };
            (title, content, tags)
        }
    };

    let mut note = Note::new(title, content, tags).context("failed to create note")?;
    if let Some(author) = &args.author {
        note.set_author(author.as_str());
    }
    if let Some(status) = &args.status {
        note.set_status(status.as_str());
    }
    if let Some(priority) = args.priority {
        note.set_priority(priority);
    }

    let id = store
        .save(&mut note)
        .with_context(|| format!("failed to save note to {}", store.dir().display()))?;

    info!("created note {} in {}", id, store.dir().display());
    println!("Note created successfully! ID: {}", id);
    Ok(id)
}

/// Parses comma-separated tags, skipping empty entries.
pub(crate) fn parse_tags(input: &str) -> Result<Vec<Tag>> {
    Tag::parse_list(input).with_context(|| format!("invalid tags: '{}'", input))
}
