// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The listing entry: bibliographic fields plus relevance annotations.
//!
//! Bibliographic fields are fixed at construction. Annotation state
//! (`title_marks`, `author_marks`, `rating`) is only touched by the marking
//! operations in [`crate::marking`] and by the evaluator.
//!
//! # Invariants
//!
//! - `author_marks.len() == authors.len()`, always. Every constructor,
//!   including deserialization, goes through [`Entry::new`].
//! - Every offset in `title_marks` is a valid character offset into `title`.
//! - `rating` is `None` until the entry has been evaluated. The public
//!   accessor reports that as [`UNRATED`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Rating reported for an entry that has not been evaluated yet.
pub const UNRATED: i64 = -1;

/// One listing entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "EntryRecord")]
pub struct Entry {
    id: String,
    title: String,
    authors: Vec<String>,
    #[serde(rename = "abstract")]
    abstract_text: String,
    category: String,
    date_submitted: DateTime<Utc>,
    date_updated: DateTime<Utc>,

    pub(crate) title_marks: BTreeSet<usize>,
    pub(crate) author_marks: Vec<bool>,
    pub(crate) rating: Option<i64>,
}

/// Wire shape of an unscored entry as supplied by the fetch layer.
///
/// Annotation fields present in the input are ignored: a loaded entry always
/// starts unscored.
#[derive(Deserialize)]
struct EntryRecord {
    id: String,
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(rename = "abstract", default)]
    abstract_text: String,
    #[serde(default)]
    category: String,
    date_submitted: DateTime<Utc>,
    date_updated: DateTime<Utc>,
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Entry::new(
            record.id,
            record.title,
            record.authors,
            record.abstract_text,
            record.category,
            record.date_submitted,
            record.date_updated,
        )
    }
}

impl Entry {
    /// Create an unscored entry: no title marks, every author unmarked.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        authors: Vec<String>,
        abstract_text: impl Into<String>,
        category: impl Into<String>,
        date_submitted: DateTime<Utc>,
        date_updated: DateTime<Utc>,
    ) -> Self {
        let author_marks = vec![false; authors.len()];
        Self {
            id: id.into(),
            title: title.into(),
            authors,
            abstract_text: abstract_text.into(),
            category: category.into(),
            date_submitted,
            date_updated,
            title_marks: BTreeSet::new(),
            author_marks,
            rating: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date_submitted(&self) -> DateTime<Utc> {
        self.date_submitted
    }

    pub fn date_updated(&self) -> DateTime<Utc> {
        self.date_updated
    }

    /// Character offsets of `title` highlighted as keyword matches.
    pub fn title_marks(&self) -> &BTreeSet<usize> {
        &self.title_marks
    }

    /// One flag per author, `true` if that author matched an author rating.
    pub fn author_marks(&self) -> &[bool] {
        &self.author_marks
    }

    /// Is the character at `position` of the title highlighted?
    pub fn is_title_marked(&self, position: usize) -> bool {
        self.title_marks.contains(&position)
    }

    /// Did the author at `index` match an author rating?
    pub fn is_author_marked(&self, index: usize) -> bool {
        self.author_marks.get(index).copied().unwrap_or(false)
    }

    /// The computed rating, or [`UNRATED`] if the entry was never evaluated.
    pub fn rating(&self) -> i64 {
        self.rating.unwrap_or(UNRATED)
    }

    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Number of characters in the title. Mark offsets are below this.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Drop all annotation state, returning the entry to its unscored form.
    pub fn reset(&mut self) {
        self.title_marks.clear();
        self.author_marks.iter_mut().for_each(|m| *m = false);
        self.rating = None;
    }
}
