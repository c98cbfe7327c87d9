// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Marking: recording which parts of an entry contributed to its rating.
//!
//! Marks are what the renderer highlights. Title marks are character offsets,
//! author marks are one flag per author. Both only ever grow between resets:
//! marking a keyword never removes marks left by an earlier keyword.

use crate::types::Entry;
use crate::utils::{find_folded, fold_case};

impl Entry {
    /// Highlight the title character at `position`.
    ///
    /// Marks live in a set, so marking the same offset twice is a no-op.
    /// Offsets past the end of the title are dropped.
    pub fn mark_title_position(&mut self, position: usize) {
        if position < self.title_len() {
            self.title_marks.insert(position);
        }
    }

    /// Highlight every character covered by every case-insensitive
    /// occurrence of `keyword` in the title.
    ///
    /// One forward scan collects all spans, then their offsets are unioned
    /// into the mark set. Returns the number of occurrences found.
    pub fn mark_title_keyword(&mut self, keyword: &str) -> usize {
        let spans = find_folded(&fold_case(self.title()), &fold_case(keyword));
        for span in &spans {
            self.title_marks.extend(span.clone());
        }
        spans.len()
    }

    /// Flag the author at `index` as matched. Out-of-range indices are ignored.
    pub fn mark_author(&mut self, index: usize) {
        if let Some(mark) = self.author_marks.get_mut(index) {
            *mark = true;
        }
    }
}
