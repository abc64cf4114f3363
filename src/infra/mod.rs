//! Front matter codec and note storage

pub mod frontmatter;
mod store;

pub use frontmatter::{DecodeError, EncodeError, Malformation, decode, encode, render};
pub use store::{DEFAULT_DIR, DEFAULT_EXTENSION, LoadReport, NoteStore, NoteUpdate, StoreError};
