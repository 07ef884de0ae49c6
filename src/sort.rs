use std::cmp::Ordering;

use crate::models::SavedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Alphabetical by the short form of the qualified name.
    Name,
    /// Descending by star count; ties keep their prior relative order.
    Stars,
}

/// The segment of a qualified name after the last `/`, or the whole name if
/// no separator is present.
pub fn process_short_name(full_name: &str) -> &str {
    match full_name.rfind('/') {
        Some(idx) => &full_name[idx + 1..],
        None => full_name,
    }
}

/// Produce a sorted copy of the saved list; the source is never mutated.
/// Both orderings use a stable sort.
pub fn sorted_entries(entries: &[SavedEntry], key: SortKey) -> Vec<SavedEntry> {
    let mut sorted = entries.to_vec();
    match key {
        SortKey::Name => {
            sorted.sort_by(|a, b| {
                compare_names(
                    process_short_name(&a.full_name),
                    process_short_name(&b.full_name),
                )
            });
        }
        SortKey::Stars => {
            sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        }
    }
    sorted
}

// Case-insensitive comparison, with a case-sensitive tiebreak so equal-modulo-
// case names still order deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}
