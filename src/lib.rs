//! memo - personal notes kept as front matter files

pub mod cli;
pub mod domain;
pub mod infra;
pub mod query;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        SystemEditor, handle_completions, handle_create, handle_delete, handle_edit, handle_list,
        handle_read, handle_search, handle_stats,
    },
    prompt::StdinPrompter,
    session::Session,
};
use infra::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let store = NoteStore::new(config.notes_dir(cli.dir.as_ref()));
    let mut session = Session::load(store.dir());
    let mut prompter = StdinPrompter;

    log::debug!("using notes directory {}", store.dir().display());

    match &cli.command {
        Command::Create(args) => handle_create(args, &store, &mut prompter).map(|_| ()),
        Command::List(args) => handle_list(args, &store, &mut session, &mut prompter),
        Command::Read(args) => handle_read(args, &store, &session),
        Command::Edit(args) => handle_edit(
            args,
            &store,
            &session,
            &mut prompter,
            &SystemEditor(&config),
        ),
        Command::Delete(args) => handle_delete(args, &store, &session, &mut prompter),
        Command::Search(args) => handle_search(args, &store),
        Command::Stats(args) => handle_stats(args, &store),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Sends log output to stderr. `-v` flags raise the default level; `RUST_LOG`
/// overrides it.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
