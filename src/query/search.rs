use crate::domain::Note;

/// Finds notes whose title, content or any tag contains `query`, ignoring case.
///
/// Each note appears at most once and input order is kept. An empty query
/// matches nothing.
pub fn search<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| matches_text(note, &needle))
        .collect()
}

/// Returns the notes carrying `tag`, compared case-insensitively but otherwise
/// exactly: `work` matches `Work` and not `workshop`.
pub fn filter_by_tag<'a>(notes: &'a [Note], tag: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| note.tags().iter().any(|t| t.matches(tag)))
        .collect()
}

fn matches_text(note: &Note, needle: &str) -> bool {
    note.title().to_lowercase().contains(needle)
        || note.content().to_lowercase().contains(needle)
        || note
            .tags()
            .iter()
            .any(|tag| tag.as_str().to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tag;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn note(title: &str, content: &str, tags: &[&str]) -> Note {
        let t = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Note::builder(title, t, t)
            .content(content)
            .tags(tags.iter().map(|n| Tag::new(n).unwrap()).collect())
            .build()
            .unwrap()
    }

    fn titles<'a>(notes: &[&'a Note]) -> Vec<&'a str> {
        notes.iter().map(|n| n.title()).collect()
    }

    fn sample() -> Vec<Note> {
        vec![
            note("Rust Ownership", "borrowing rules", &["lang"]),
            note("Groceries", "milk and RUST remover", &["home"]),
            note("Standup", "nothing relevant", &["Rustacean"]),
            note("Travel", "pack bags", &["home", "Work"]),
        ]
    }

    // ===========================================
    // search
    // ===========================================

    #[test]
    fn search_matches_title_content_and_tags() {
        let notes = sample();
        let found = search(&notes, "rust");
        assert_eq!(titles(&found), vec!["Rust Ownership", "Groceries", "Standup"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let notes = sample();
        assert_eq!(search(&notes, "PACK").len(), 1);
        assert_eq!(search(&notes, "groceries").len(), 1);
    }

    #[test]
    fn search_returns_each_note_once() {
        let notes = vec![note("rust", "rust rust", &["rust"])];
        assert_eq!(search(&notes, "rust").len(), 1);
    }

    #[test]
    fn search_empty_query_matches_nothing() {
        assert!(search(&sample(), "").is_empty());
    }

    #[test]
    fn search_without_hits_is_empty() {
        assert!(search(&sample(), "kubernetes").is_empty());
    }

    #[test]
    fn search_includes_everything_filter_finds() {
        let notes = sample();
        let by_tag = filter_by_tag(&notes, "home");
        let by_search = search(&notes, "home");
        assert!(by_tag.iter().all(|n| by_search.contains(n)));
    }

    // ===========================================
    // filter_by_tag
    // ===========================================

    #[test]
    fn filter_by_tag_ignores_case() {
        let notes = sample();
        assert_eq!(titles(&filter_by_tag(&notes, "work")), vec!["Travel"]);
        assert_eq!(titles(&filter_by_tag(&notes, "HOME")), vec!["Groceries", "Travel"]);
    }

    #[test]
    fn filter_by_tag_is_not_substring() {
        let notes = sample();
        assert!(filter_by_tag(&notes, "rust").is_empty());
        assert!(filter_by_tag(&notes, "wor").is_empty());
    }

    #[test]
    fn filter_by_tag_on_empty_collection() {
        assert!(filter_by_tag(&[], "work").is_empty());
    }
}
