// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how evaluated entries get filtered, ordered and cut.
//!
//! Three steps, always in this order:
//!
//! 1. **Filter** - drop entries rated below `rating_min` (inclusive bound).
//! 2. **Sort** - by rating only. Default is most relevant first; `reverse`
//!    flips to ascending. The sort is stable, so equal ratings keep their
//!    input order. There is no secondary key.
//! 3. **Truncate** - keep the first `length` entries. A negative or absent
//!    length means no limit.
//!
//! Ranking never touches entry annotations.

use crate::types::Entry;
use std::cmp::Ordering;

/// Compare two ratings for ranking.
///
/// `reverse == false` puts the higher rating first.
pub fn compare_ratings(a: i64, b: i64, reverse: bool) -> Ordering {
    if reverse {
        a.cmp(&b)
    } else {
        b.cmp(&a)
    }
}

/// Turn the signed length convention into an optional limit.
///
/// ```text
/// None      → unbounded
/// Some(-n)  → unbounded
/// Some(n)   → at most n entries
/// ```
pub fn effective_length(length: Option<i64>) -> Option<usize> {
    length.filter(|&n| n >= 0).map(|n| n as usize)
}

/// Filter, stable-sort and truncate any list whose items carry a rating.
fn filter_sort_truncate<T>(
    mut items: Vec<T>,
    rating_of: impl Fn(&T) -> i64,
    rating_min: i64,
    reverse: bool,
    length: Option<i64>,
) -> Vec<T> {
    items.retain(|item| rating_of(item) >= rating_min);
    items.sort_by(|a, b| compare_ratings(rating_of(a), rating_of(b), reverse));
    if let Some(limit) = effective_length(length) {
        items.truncate(limit);
    }
    items
}

/// Rank evaluated entries without taking ownership.
///
/// # Example
///
/// ```ignore
/// // ratings [5, 1, 4, 3], rating_min 3, length 2
/// let top = sort_entries(&entries, 3, false, Some(2));
/// // → ratings [5, 4]
/// ```
pub fn sort_entries(
    entries: &[Entry],
    rating_min: i64,
    reverse: bool,
    length: Option<i64>,
) -> Vec<&Entry> {
    filter_sort_truncate(
        entries.iter().collect(),
        |e| e.rating(),
        rating_min,
        reverse,
        length,
    )
}

/// Owning variant of [`sort_entries`], for handing entries on to a renderer.
pub fn rank_entries(
    entries: Vec<Entry>,
    rating_min: i64,
    reverse: bool,
    length: Option<i64>,
) -> Vec<Entry> {
    filter_sort_truncate(entries, Entry::rating, rating_min, reverse, length)
}
