use crate::domain::Note;
use std::collections::BTreeMap;

/// Aggregate figures for a collection of notes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats<'a> {
    pub total_notes: usize,
    pub total_words: usize,
    /// Earliest `created`; the first such note on ties.
    pub oldest: Option<&'a Note>,
    /// Latest `created`; the first such note on ties.
    pub newest: Option<&'a Note>,
    /// Occurrences per tag, keyed by the tag's stored spelling.
    pub tag_counts: BTreeMap<&'a str, usize>,
}

impl Stats<'_> {
    /// Mean words per note, or `None` for an empty collection.
    pub fn average_words(&self) -> Option<f64> {
        if self.total_notes == 0 {
            None
        } else {
            Some(self.total_words as f64 / self.total_notes as f64)
        }
    }

    /// Tags ordered by descending count, then by name.
    pub fn tags_by_count(&self) -> Vec<(&str, usize)> {
        let mut tags: Vec<_> = self.tag_counts.iter().map(|(t, c)| (*t, *c)).collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        tags
    }
}

/// Computes totals, word counts, age extremes and tag frequencies.
pub fn compute_stats(notes: &[Note]) -> Stats<'_> {
    let mut stats = Stats {
        total_notes: notes.len(),
        total_words: 0,
        oldest: None,
        newest: None,
        tag_counts: BTreeMap::new(),
    };

    for note in notes {
        stats.total_words += note.word_count();

        if stats.oldest.is_none_or(|o| note.created() < o.created()) {
            stats.oldest = Some(note);
        }
        if stats.newest.is_none_or(|n| note.created() > n.created()) {
            stats.newest = Some(note);
        }

        for tag in note.tags() {
            *stats.tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    stats
}
