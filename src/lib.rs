//! Keyword and author based relevance ranking for arXiv listings.
//!
//! Entries come in from a fetch layer, get rated against user-supplied
//! keyword and author tables, and go out in relevance order with the title
//! spans and authors that earned the rating marked for highlighting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  marking.rs  │────▶│ scoring/core │────▶│  ranking.rs │
//! │  (Entry)    │     │ (title/author│     │  (evaluate,  │     │(sort_entries│
//! │             │     │   marks)     │     │   batches)   │     │ rank_entries│
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!        ▲                                        ▲
//!        │                                        │
//! ┌─────────────┐                          ┌──────────────┐
//! │  loader.rs  │                          │  config.rs   │
//! │ (JSON in)   │                          │ (ScanConfig) │
//! └─────────────┘                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use arxiv_scan::{load_entries, sort_entries, ScanConfig};
//!
//! let config = ScanConfig::load(Path::new("ratings.json"))?;
//! let tables = config.rating_tables()?;
//! let mut entries = load_entries(Path::new("listing.json"))?;
//!
//! tables.evaluate(&mut entries);
//! let ranked = sort_entries(&entries, config.rating_min, config.reverse, config.length);
//! ```

pub mod config;
pub mod error;
pub mod loader;
mod marking;
pub mod scoring;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::ScanConfig;
pub use error::RatingError;
pub use loader::{load_entries, parse_entries};
pub use scoring::ranking::{compare_ratings, effective_length, rank_entries, sort_entries};
pub use scoring::{
    evaluate, evaluate_entries, AuthorRating, AuthorRatings, KeywordRating, KeywordRatings,
    RatingTables,
};
#[cfg(feature = "parallel")]
pub use scoring::evaluate_entries_parallel;
pub use types::{Entry, UNRATED};
pub use utils::{count_occurrences, find_occurrences};
