//! Search command handler.

use anyhow::{Result, bail};

use super::{load_notes, note_id, truncate_str};
use crate::cli::SearchArgs;
use crate::cli::output::{NoteListing, OutputFormat, print_json};
use crate::infra::NoteStore;
use crate::query::search;

/// Characters of body text shown under each hit.
const PREVIEW_WIDTH: usize = 100;

pub fn handle_search(args: &SearchArgs, store: &NoteStore) -> Result<()> {
    if args.query.trim().is_empty() {
        bail!("search query cannot be empty");
    }

    let notes = load_notes(store)?;
    let hits = search(&notes, &args.query);

    match args.format {
        OutputFormat::Human => {
            if hits.is_empty() {
                println!("No notes found matching '{}'", args.query);
                return Ok(());
            }

            println!("Found {} note(s) matching '{}':", hits.len(), args.query);
            println!();
            for note in &hits {
                println!("ID: {} | Title: {}", note_id(note), note.title());
                let preview = note.content().replace('\n', " ");
                println!("Preview: {}", truncate_str(&preview, PREVIEW_WIDTH));
                println!("--------");
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> =
                hits.iter().map(|n| NoteListing::new(n, None)).collect();
            print_json(listings)?;
        }
    }

    Ok(())
}
