//! Stats command handler.

use anyhow::Result;

use super::load_notes;
use crate::cli::StatsArgs;
use crate::cli::output::{OutputFormat, StatsReport, print_json};
use crate::infra::NoteStore;
use crate::query::compute_stats;

pub fn handle_stats(args: &StatsArgs, store: &NoteStore) -> Result<()> {
    let notes = load_notes(store)?;
    let stats = compute_stats(&notes);

    match args.format {
        OutputFormat::Human => {
            let Some(average) = stats.average_words() else {
                println!("No notes found.");
                return Ok(());
            };

            println!("Note Statistics:");
            println!("Total notes: {}", stats.total_notes);
            println!("Total words: {}", stats.total_words);
            println!("Average words per note: {:.1}", average);

            if let Some(oldest) = stats.oldest {
                println!(
                    "Oldest note: {} ({})",
                    oldest.title(),
                    oldest.created().format("%Y-%m-%d")
                );
            }
            if let Some(newest) = stats.newest {
                println!(
                    "Newest note: {} ({})",
                    newest.title(),
                    newest.created().format("%Y-%m-%d")
                );
            }

            let tags = stats.tags_by_count();
            if !tags.is_empty() {
                println!();
                println!("Tag usage:");
                for (tag, count) in tags {
                    println!("  {}: {}", tag, count);
                }
            }
        }
        OutputFormat::Json => print_json(StatsReport::from(&stats))?,
    }

    Ok(())
}
