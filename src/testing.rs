//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::types::Entry;

/// Fixed timestamp used for every test entry.
pub fn sample_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 22, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Create an unscored entry with an empty abstract.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(id: &str, title: &str, authors: &[&str]) -> Entry {
    make_entry_with_abstract(id, title, authors, "")
}

/// Create an unscored entry with an abstract.
pub fn make_entry_with_abstract(
    id: &str,
    title: &str,
    authors: &[&str],
    abstract_text: &str,
) -> Entry {
    Entry::new(
        id,
        title,
        authors.iter().map(|a| a.to_string()).collect(),
        abstract_text,
        "cs.LG",
        sample_date(),
        sample_date(),
    )
}

/// Create entries that already carry the given ratings, ids "0", "1", ...
pub fn make_rated_entries(ratings: &[i64]) -> Vec<Entry> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &rating)| {
            let mut entry = make_entry(&i.to_string(), &format!("Paper {}", i), &[]);
            entry.rating = Some(rating);
            entry
        })
        .collect()
}
