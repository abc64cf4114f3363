//! In-memory queries over loaded notes: search, tag filter, statistics.
//!
//! Everything here is a pure function of its input. Callers load notes through
//! the store and pass them in.

mod search;
mod stats;

pub use search::{filter_by_tag, search};
pub use stats::{Stats, compute_stats};
