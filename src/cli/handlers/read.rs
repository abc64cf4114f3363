//! Read command handler.

use anyhow::Result;

use super::{find_note, join_tags, note_id};
use crate::cli::ReadArgs;
use crate::cli::output::{NoteDetail, OutputFormat, print_json};
use crate::cli::session::Session;
use crate::infra::NoteStore;

pub fn handle_read(args: &ReadArgs, store: &NoteStore, session: &Session) -> Result<()> {
    let id = session.resolve(&args.note)?;
    let note = find_note(store, &id)?;

    match args.format {
        OutputFormat::Human => {
            println!("Title: {}", note.title());
            println!("ID: {}", note_id(&note));
            println!("Created: {}", note.created().format("%Y-%m-%d %H:%M:%S"));
            println!("Modified: {}", note.modified().format("%Y-%m-%d %H:%M:%S"));

            if !note.tags().is_empty() {
                println!("Tags: {}", join_tags(&note));
            }
            if !note.author().is_empty() {
                println!("Author: {}", note.author());
            }
            if !note.status().is_empty() {
                println!("Status: {}", note.status());
            }
            if note.priority() != 0 {
                println!("Priority: {}", note.priority());
            }

            println!();
            println!("Content:");
            println!("--------");
            println!("{}", note.content());
        }
        OutputFormat::Json => print_json(NoteDetail::from(&note))?,
    }

    Ok(())
}
