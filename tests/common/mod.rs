//! Shared test utilities and fixtures.

#![allow(dead_code)]
#![allow(unused_imports)]

use arxiv_scan::{AuthorRatings, KeywordRatings, RatingTables};

// Re-export canonical test utilities from arxiv_scan::testing
pub use arxiv_scan::testing::{make_entry, make_entry_with_abstract, make_rated_entries};

/// A small listing as the fetch layer would hand it over.
pub const LISTING_JSON: &str = r#"[
    {
        "id": "2401.00001",
        "title": "Graph Neural Networks for Molecule Generation",
        "authors": ["Ada Lovelace", "John Smith"],
        "abstract": "We apply graph neural networks to molecules. Graph methods win.",
        "category": "cs.LG",
        "date_submitted": "2024-01-22T18:00:00Z",
        "date_updated": "2024-01-22T18:00:00Z"
    },
    {
        "id": "2401.00002",
        "title": "A Survey of Quantum Error Correction",
        "authors": ["Alan Turing"],
        "abstract": "Quantum codes are surveyed.",
        "category": "quant-ph",
        "date_submitted": "2024-01-22T19:00:00Z",
        "date_updated": "2024-01-23T08:00:00Z"
    },
    {
        "id": "2401.00003",
        "title": "Transformers Are Graph Neural Networks",
        "authors": ["Grace Hopper", "Jane Smithson"],
        "abstract": "Attention is message passing on a complete graph.",
        "category": "cs.LG",
        "date_submitted": "2024-01-22T20:00:00Z",
        "date_updated": "2024-01-22T20:00:00Z"
    }
]"#;

/// Build tables from literal pairs; panics on invalid author patterns.
pub fn tables(keywords: &[(&str, i64)], authors: &[(&str, i64)], rate_abstract: bool) -> RatingTables {
    RatingTables {
        keywords: KeywordRatings::new(keywords.iter().copied()),
        authors: AuthorRatings::new(authors.iter().copied()).expect("valid author patterns"),
        rate_abstract,
    }
}
