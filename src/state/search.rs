//! Client-side result filtering.
//!
//! Narrows an already-fetched page to the rows matching a free-text search
//! term. This runs on top of whatever the remote query returned and never
//! triggers a fetch, so pagination keeps showing the server's total even
//! when fewer rows are visible.

use crate::model::{Column, Record};

/// Keep the records where any column contains `search_term`.
///
/// Matching is a case-insensitive substring test against the string form of
/// each column's dot-path value. Missing and null values never match. An
/// empty term keeps every record, in order.
pub fn filter_records<'a>(
    items: &'a [Record],
    search_term: &str,
    columns: &[Column],
) -> Vec<&'a Record> {
    if search_term.is_empty() {
        return items.iter().collect();
    }

    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|record| record_matches(record, &needle, columns))
        .collect()
}

/// Whether any column of `record` contains the lowercased `needle`.
fn record_matches(record: &Record, needle: &str, columns: &[Column]) -> bool {
    columns.iter().any(|column| {
        record
            .display(column.key)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
