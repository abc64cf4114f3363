//! List command handler.

use anyhow::Result;

use super::{join_tags, load_notes, note_id};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, OutputFormat, print_json};
use crate::cli::prompt::Prompter;
use crate::cli::session::Session;
use crate::domain::{Note, NoteId};
use crate::infra::NoteStore;
use crate::query::filter_by_tag;

/// Lists notes with 1-based numbers and records them as the current listing.
pub fn handle_list<P: Prompter>(
    args: &ListArgs,
    store: &NoteStore,
    session: &mut Session,
    prompter: &mut P,
) -> Result<()> {
    let notes = load_notes(store)?;
    let shown: Vec<&Note> = match &args.tag {
        Some(tag) => filter_by_tag(&notes, tag),
        None => notes.iter().collect(),
    };

    let ids: Vec<NoteId> = shown.iter().filter_map(|n| n.id()).collect();
    session.record(ids)?;

    match args.format {
        OutputFormat::Human => {
            if shown.is_empty() {
                match &args.tag {
                    Some(tag) => println!("No notes found with tag '{}'.", tag),
                    None => println!("No notes found."),
                }
                return Ok(());
            }
            print_pages(&shown, usize::from(args.page_size), prompter)?;
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = shown
                .iter()
                .enumerate()
                .map(|(i, n)| NoteListing::new(n, Some(i + 1)))
                .collect();
            print_json(listings)?;
        }
    }

    Ok(())
}

/// Prints notes a page at a time. Between pages an interactive user is asked
/// whether to go on; otherwise everything is printed.
fn print_pages<P: Prompter>(notes: &[&Note], page_size: usize, prompter: &mut P) -> Result<()> {
    let total = notes.len();
    let mut start = 0;

    loop {
        let end = (start + page_size).min(total);

        println!();
        println!("Showing notes {}-{} of {}:", start + 1, end, total);
        println!("========================================");

        for (i, note) in notes[start..end].iter().enumerate() {
            println!(
                "{:2}. {} | Created: {}",
                start + i + 1,
                note.title(),
                note.created().format("%Y-%m-%d %H:%M")
            );
            if !note.tags().is_empty() {
                println!("    Tags: {}", join_tags(note));
            }
            println!("    ID: {}", note_id(note));
            println!();
        }

        if end >= total {
            println!("End of notes.");
            break;
        }

        if prompter.is_interactive()
            && !prompter.confirm(&format!("Show next {} notes? (y/N): ", page_size))?
        {
            break;
        }

        start = end;
    }

    println!();
    println!(
        "Tip: use 'memo read <number>' or 'memo edit <number>' with numbers 1-{} from this listing.",
        total
    );
    Ok(())
}
