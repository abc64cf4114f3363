//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;
pub mod prompt;
pub mod session;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// memo - personal notes in plain files
#[derive(Parser, Debug)]
#[command(name = "memo", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note (prompts for anything not given)
    Create(CreateArgs),

    /// List notes with numbered references
    List(ListArgs),

    /// Display a note
    Read(ReadArgs),

    /// Edit a note's content, tags or metadata
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Search titles, content and tags
    Search(SearchArgs),

    /// Show statistics about your notes
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create` command
#[derive(Parser, Debug, Default)]
pub struct CreateArgs {
    /// Note title; without it, title, content and tags are prompted for
    pub title: Option<String>,

    /// Note body
    #[arg(short, long)]
    pub content: Option<String>,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Author
    #[arg(long)]
    pub author: Option<String>,

    /// Status, e.g. "draft"
    #[arg(long)]
    pub status: Option<String>,

    /// Priority
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i64>,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list notes with this tag (case-insensitive)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Notes shown per page when running in a terminal
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: u16,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            tag: None,
            format: OutputFormat::Human,
            page_size: 10,
        }
    }
}

/// Arguments for the `read` command
#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// Note ID, or number from the last `memo list`
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug, Default)]
pub struct EditArgs {
    /// Note ID, or number from the last `memo list`
    pub note: String,

    /// Replace the body
    #[arg(short, long)]
    pub content: Option<String>,

    /// Replace the tags (comma-separated)
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Set the author (empty clears it)
    #[arg(long)]
    pub author: Option<String>,

    /// Set the status (empty clears it)
    #[arg(long)]
    pub status: Option<String>,

    /// Set the priority (0 clears it)
    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i64>,

    /// Open the note file in your editor instead
    #[arg(
        short,
        long,
        conflicts_with_all = ["content", "tags", "author", "status", "priority"]
    )]
    pub editor: bool,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug, Default)]
pub struct DeleteArgs {
    /// Note ID, or number from the last `memo list`
    pub note: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles, content and tags
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug, Default)]
pub struct StatsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
