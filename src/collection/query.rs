//! Derived queries over a collection snapshot.
//!
//! Everything here is a pure function recomputed per call: no index, no
//! cache, no mutation. Display ordering is always derived and never
//! persisted.

use crate::collection::entry::{GalleryEntry, RankedEntry};

/// The category filter sentinel matching every entry.
pub const ALL_CATEGORIES: &str = "all";

/// Active sort key; exactly one at a time, ties keep their prior relative
/// order (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Vote count, descending.
    MostVoted,
    /// Name, case-folded lexicographic.
    Name,
    /// Creation time, descending (the default).
    Newest,
}

/// Case-insensitive substring search over name and description, combined
/// with a category filter (`ALL_CATEGORIES` matches everything).
pub fn search<'a>(
    entries: &'a [RankedEntry],
    term: &str,
    category: &str,
) -> Vec<&'a RankedEntry> {
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            let text_hit = needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.description.to_lowercase().contains(&needle);
            let category_hit = category == ALL_CATEGORIES || e.category == category;
            text_hit && category_hit
        })
        .collect()
}

/// Case-insensitive label search for the card gallery.
pub fn search_labels<'a>(entries: &'a [GalleryEntry], term: &str) -> Vec<&'a GalleryEntry> {
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|e| needle.is_empty() || e.label.to_lowercase().contains(&needle))
        .collect()
}

/// Sort a snapshot by one key. The input order (insertion order) is the
/// tie-break by virtue of sort stability.
///
/// Name ordering is a case-folded code-point comparison, not locale
/// collation: accented letters sort after "z" (a name starting with "Ñ"
/// lands after one starting with "Z").
pub fn sorted<'a>(entries: &'a [RankedEntry], key: SortKey) -> Vec<&'a RankedEntry> {
    let mut out: Vec<&RankedEntry> = entries.iter().collect();
    match key {
        SortKey::MostVoted => out.sort_by(|a, b| b.vote_count.cmp(&a.vote_count)),
        SortKey::Name => out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    out
}

/// Ids of every entry holding the collection's maximum vote count, when
/// that maximum is positive. Ties are ALL flagged; an all-zero collection
/// flags nothing.
pub fn most_voted_ids(entries: &[RankedEntry]) -> Vec<i64> {
    let max = entries.iter().map(|e| e.vote_count).max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|e| e.vote_count == max)
        .map(|e| e.id)
        .collect()
}

/// Distinct categories in first-seen order, with the `"all"` sentinel
/// always first.
pub fn categories(entries: &[RankedEntry]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for entry in entries {
        if !out.iter().any(|c| c == &entry.category) {
            out.push(entry.category.clone());
        }
    }
    out
}
