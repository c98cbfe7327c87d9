//! Utility functions for case-insensitive substring scanning.
//!
//! Matching works on characters, not bytes: every offset handed out here is a
//! character offset, so it can be used directly as a title mark.

use std::ops::Range;

/// Fold one character for case-insensitive comparison.
///
/// Takes the first character of the lowercase mapping. Full lowercasing can
/// change the length of a string ('İ' lowercases to two characters), which
/// would shift every offset after it. A one-to-one fold keeps offsets into
/// the folded text valid for the original text.
///
/// Greek sigma has two lowercase forms; 'Σ', 'σ' and final 'ς' all fold to 'σ'.
#[inline]
pub fn fold_char(c: char) -> char {
    match c {
        'Σ' | 'ς' => 'σ',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Fold a whole string character by character.
pub fn fold_case(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}

/// Find all non-overlapping occurrences of `needle` in `haystack`.
///
/// Scans left to right once; after a hit the scan resumes at the end of that
/// hit, which is the standard substring-count contract. Both inputs must
/// already be folded. An empty needle never matches.
pub fn find_folded(haystack: &[char], needle: &[char]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return spans;
    }

    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == *needle {
            spans.push(start..start + needle.len());
            start += needle.len();
        } else {
            start += 1;
        }
    }
    spans
}

/// Case-insensitive occurrence spans of `needle` in `haystack`, as character ranges.
pub fn find_occurrences(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    find_folded(&fold_case(haystack), &fold_case(needle))
}

/// Case-insensitive count of non-overlapping occurrences.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    find_occurrences(haystack, needle).len()
}
