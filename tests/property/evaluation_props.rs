//! Evaluation property tests.
//!
//! - Re-evaluating an entry gives the same rating and the same marks
//! - `author_marks.len() == authors.len()` before and after evaluation
//! - Every title occurrence of a scored keyword is fully marked
//! - The parallel batch evaluator agrees with the sequential one

use proptest::prelude::*;

use super::common::make_entry_with_abstract;
use arxiv_scan::{find_occurrences, AuthorRatings, Entry, KeywordRatings, RatingTables};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Vocabulary small enough that keywords actually hit.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "graph", "Graph", "neural", "NETWORK", "quantum", "ai", "AI", "learning", "of", "a",
    ])
    .prop_map(str::to_string)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn author_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "John Smith", "Jane Doe", "Ada Lovelace", "Goldsmith Jones", "SMITH Anna",
    ])
    .prop_map(str::to_string)
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    (
        text_strategy(),
        text_strategy(),
        prop::collection::vec(author_strategy(), 0..5),
    )
        .prop_map(|(title, abstract_text, authors)| {
            let refs: Vec<&str> = authors.iter().map(String::as_str).collect();
            make_entry_with_abstract("p", &title, &refs, &abstract_text)
        })
}

fn tables_strategy() -> impl Strategy<Value = RatingTables> {
    (
        prop::collection::hash_map(word_strategy(), -5i64..10, 0..4),
        prop::collection::hash_map(
            prop::sample::select(vec!["Smith", "Doe", "Ada"]).prop_map(str::to_string),
            -5i64..10,
            0..3,
        ),
        any::<bool>(),
    )
        .prop_map(|(keywords, authors, rate_abstract)| RatingTables {
            keywords: KeywordRatings::new(keywords),
            authors: AuthorRatings::new(authors).unwrap(),
            rate_abstract,
        })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_evaluation_is_idempotent(entry in entry_strategy(), tables in tables_strategy()) {
        let mut once = vec![entry];
        tables.evaluate(&mut once);
        let mut twice = once.clone();
        tables.evaluate(&mut twice);

        prop_assert_eq!(once[0].rating(), twice[0].rating());
        prop_assert_eq!(once[0].title_marks(), twice[0].title_marks());
        prop_assert_eq!(once[0].author_marks(), twice[0].author_marks());
    }

    #[test]
    fn prop_author_marks_match_authors(entry in entry_strategy(), tables in tables_strategy()) {
        prop_assert_eq!(entry.author_marks().len(), entry.authors().len());
        let mut entries = vec![entry];
        tables.evaluate(&mut entries);
        prop_assert_eq!(entries[0].author_marks().len(), entries[0].authors().len());
    }

    #[test]
    fn prop_title_occurrences_fully_marked(entry in entry_strategy(), tables in tables_strategy()) {
        let mut entries = vec![entry];
        tables.evaluate(&mut entries);
        let entry = &entries[0];

        for kw in tables.keywords.iter() {
            for span in find_occurrences(entry.title(), &kw.keyword) {
                for pos in span {
                    prop_assert!(entry.is_title_marked(pos), "offset {} of '{}' unmarked", pos, kw.keyword);
                }
            }
        }
        let len = entry.title_len();
        prop_assert!(entry.title_marks().iter().all(|&p| p < len));
    }

    #[test]
    fn prop_marked_authors_have_positive_match(entry in entry_strategy(), tables in tables_strategy()) {
        let mut entries = vec![entry];
        tables.evaluate(&mut entries);
        let entry = &entries[0];

        for (i, name) in entry.authors().iter().enumerate() {
            let matched = tables.authors.iter().any(|a| a.matches(name));
            prop_assert_eq!(entry.is_author_marked(i), matched);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn prop_parallel_agrees_with_sequential(
        entries in prop::collection::vec(entry_strategy(), 0..20),
        tables in tables_strategy(),
    ) {
        let mut sequential = entries.clone();
        let mut parallel = entries;
        tables.evaluate(&mut sequential);
        tables.evaluate_parallel(&mut parallel);
        prop_assert_eq!(sequential, parallel);
    }
}
