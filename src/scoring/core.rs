// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind entry ratings.
//!
//! A rating is a plain integer sum:
//!
//! ```text
//! rating = Σ keywords  count_in_title(k)    × weight(k)
//!        + Σ keywords  count_in_abstract(k) × weight(k)   (only if rate_abstract)
//!        + Σ fragments Σ authors [fragment matches author] × weight(fragment)
//! ```
//!
//! Keyword counts are case-insensitive and non-overlapping. Author fragments
//! are regular expressions matched as whole words, case-insensitively. A
//! fragment that matches three authors of one entry adds its weight three
//! times.
//!
//! Evaluation clears every mark before scoring, so evaluating the same entry
//! twice with the same tables gives the same rating and the same marks.

use regex::{Regex, RegexBuilder};
use tracing::{debug, info, warn};

use crate::error::RatingError;
use crate::types::Entry;
use crate::utils::{find_folded, fold_case};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =============================================================================
// RATING TABLES
// =============================================================================

/// A keyword with its pre-folded form and per-occurrence weight.
#[derive(Clone, Debug)]
pub struct KeywordRating {
    pub keyword: String,
    folded: Vec<char>,
    pub weight: i64,
}

/// Keyword → weight table, folded once up front.
///
/// Keywords are kept sorted so that evaluation order (and therefore debug
/// output) does not depend on the hash order of the source map.
#[derive(Clone, Debug, Default)]
pub struct KeywordRatings {
    ratings: Vec<KeywordRating>,
}

impl KeywordRatings {
    /// Build the table. Empty keywords are dropped: they have no span to mark.
    pub fn new<I, S>(ratings: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut ratings: Vec<KeywordRating> = ratings
            .into_iter()
            .filter_map(|(keyword, weight)| {
                let keyword = keyword.into();
                if keyword.is_empty() {
                    warn!("ignoring empty keyword (weight {})", weight);
                    return None;
                }
                let folded = fold_case(&keyword);
                Some(KeywordRating {
                    keyword,
                    folded,
                    weight,
                })
            })
            .collect();
        ratings.sort_by(|a, b| a.keyword.cmp(&b.keyword));
        Self { ratings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordRating> {
        self.ratings.iter()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// An author-name fragment compiled into a whole-word matcher.
#[derive(Clone, Debug)]
pub struct AuthorRating {
    pub fragment: String,
    matcher: Regex,
    pub weight: i64,
}

impl AuthorRating {
    /// Compile `fragment` as `\b(?:fragment)\b`, case-insensitive.
    ///
    /// The fragment is a regular expression, so `J(ohn|\.) Smith` works. An
    /// invalid expression is reported here, never during scoring.
    pub fn new(fragment: impl Into<String>, weight: i64) -> Result<Self, RatingError> {
        let fragment = fragment.into();
        let matcher = RegexBuilder::new(&format!(r"\b(?:{})\b", fragment))
            .case_insensitive(true)
            .build()
            .map_err(|source| RatingError::InvalidAuthorPattern {
                pattern: fragment.clone(),
                source,
            })?;
        Ok(Self {
            fragment,
            matcher,
            weight,
        })
    }

    /// Does this fragment occur as a whole word in `author`?
    pub fn matches(&self, author: &str) -> bool {
        self.matcher.is_match(author)
    }
}

/// Author fragment → weight table.
#[derive(Clone, Debug, Default)]
pub struct AuthorRatings {
    ratings: Vec<AuthorRating>,
}

impl AuthorRatings {
    /// Compile every fragment. Fails on the first invalid pattern.
    pub fn new<I, S>(ratings: I) -> Result<Self, RatingError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut compiled = Vec::new();
        for (fragment, weight) in ratings {
            let fragment = fragment.into();
            if fragment.is_empty() {
                warn!("ignoring empty author fragment (weight {})", weight);
                continue;
            }
            compiled.push(AuthorRating::new(fragment, weight)?);
        }
        compiled.sort_by(|a, b| a.fragment.cmp(&b.fragment));
        Ok(Self { ratings: compiled })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuthorRating> {
        self.ratings.iter()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// Both rating tables plus the abstract switch, ready for batch evaluation.
#[derive(Clone, Debug, Default)]
pub struct RatingTables {
    pub keywords: KeywordRatings,
    pub authors: AuthorRatings,
    pub rate_abstract: bool,
}

impl RatingTables {
    pub fn evaluate<'a>(&self, entries: &'a mut [Entry]) -> &'a mut [Entry] {
        evaluate_entries(entries, &self.keywords, &self.authors, self.rate_abstract)
    }

    #[cfg(feature = "parallel")]
    pub fn evaluate_parallel<'a>(&self, entries: &'a mut [Entry]) -> &'a mut [Entry] {
        evaluate_entries_parallel(entries, &self.keywords, &self.authors, self.rate_abstract)
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Score one entry, marking the title spans and authors that contributed.
///
/// Annotation state is reset first. Returns the new rating, which is also
/// stored on the entry.
pub fn evaluate(
    entry: &mut Entry,
    keywords: &KeywordRatings,
    authors: &AuthorRatings,
    rate_abstract: bool,
) -> i64 {
    entry.reset();
    let mut rating: i64 = 0;

    let abstract_folded = if rate_abstract {
        Some(fold_case(entry.abstract_text()))
    } else {
        None
    };

    for kw in keywords.iter() {
        // Marking and counting share one scan of the title.
        let title_hits = entry.mark_title_keyword(&kw.keyword);
        if title_hits > 0 {
            rating = rating.saturating_add((title_hits as i64).saturating_mul(kw.weight));
        }

        if let Some(ref text) = abstract_folded {
            let abstract_hits = find_folded(text, &kw.folded).len();
            rating = rating.saturating_add((abstract_hits as i64).saturating_mul(kw.weight));
        }
    }

    for author in authors.iter() {
        let matched: Vec<usize> = entry
            .authors()
            .iter()
            .enumerate()
            .filter(|(_, name)| author.matches(name))
            .map(|(i, _)| i)
            .collect();
        for i in matched {
            entry.mark_author(i);
            rating = rating.saturating_add(author.weight);
        }
    }

    entry.rating = Some(rating);
    debug!(
        id = entry.id(),
        rating,
        title_marks = entry.title_marks().len(),
        "evaluated entry"
    );
    rating
}

/// Evaluate every entry in order, in place. Returns the same slice for chaining.
pub fn evaluate_entries<'a>(
    entries: &'a mut [Entry],
    keywords: &KeywordRatings,
    authors: &AuthorRatings,
    rate_abstract: bool,
) -> &'a mut [Entry] {
    for entry in entries.iter_mut() {
        evaluate(entry, keywords, authors, rate_abstract);
    }
    info!(
        entries = entries.len(),
        keywords = keywords.len(),
        authors = authors.len(),
        "evaluated batch"
    );
    entries
}

/// Parallel version of [`evaluate_entries`].
///
/// Entries share no state, so each one goes to exactly one rayon worker.
/// Ratings and marks are identical to the sequential version.
#[cfg(feature = "parallel")]
pub fn evaluate_entries_parallel<'a>(
    entries: &'a mut [Entry],
    keywords: &KeywordRatings,
    authors: &AuthorRatings,
    rate_abstract: bool,
) -> &'a mut [Entry] {
    entries.par_iter_mut().for_each(|entry| {
        evaluate(entry, keywords, authors, rate_abstract);
    });
    info!(
        entries = entries.len(),
        keywords = keywords.len(),
        authors = authors.len(),
        "evaluated batch (parallel)"
    );
    entries
}
