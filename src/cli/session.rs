//! The "current listing": note ids in the order `memo list` last showed them.
//!
//! Each invocation is a separate process, so the listing is kept in a small
//! JSON file inside the notes directory. `read`, `edit` and `delete` accept a
//! listing number in place of an id.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::NoteId;

/// File name of the persisted listing, inside the notes directory.
pub const SESSION_FILE: &str = ".listing.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Listing {
    ids: Vec<NoteId>,
}

/// State carried between invocations.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    listing: Vec<NoteId>,
}

impl Session {
    /// Loads the listing saved in `notes_dir`.
    ///
    /// A missing or unreadable file is an empty listing; it only holds
    /// convenience state.
    pub fn load(notes_dir: &Path) -> Self {
        let path = notes_dir.join(SESSION_FILE);
        let listing = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Listing>(&contents) {
                Ok(listing) => listing.ids,
                Err(e) => {
                    log::warn!("ignoring corrupt listing file {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, listing }
    }

    /// Replaces the listing and writes it to disk.
    ///
    /// Nothing is written if the notes directory doesn't exist yet, since
    /// there can be no notes to refer to.
    pub fn record(&mut self, ids: Vec<NoteId>) -> Result<()> {
        self.listing = ids;

        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        if !dir.is_dir() {
            return Ok(());
        }

        let listing = Listing {
            ids: self.listing.clone(),
        };
        let json = serde_json::to_string(&listing)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to save listing to {}", self.path.display()))
    }

    /// Returns the ids of the current listing.
    pub fn listing(&self) -> &[NoteId] {
        &self.listing
    }

    /// Turns user input into a note id.
    ///
    /// A positive number selects from the current listing (1-based); anything
    /// else must be a note id.
    pub fn resolve(&self, identifier: &str) -> Result<NoteId> {
        let identifier = identifier.trim();

        if let Ok(number) = identifier.parse::<usize>() {
            if self.listing.is_empty() {
                bail!("no current note listing; run 'memo list' first");
            }
            if number < 1 || number > self.listing.len() {
                bail!(
                    "number {} is out of range; valid range: 1-{}",
                    number,
                    self.listing.len()
                );
            }
            return Ok(self.listing[number - 1].clone());
        }

        identifier
            .parse()
            .with_context(|| format!("'{}' is neither a listing number nor a note id", identifier))
    }
}
