// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scan configuration: rating tables plus ranking parameters.
//!
//! Read from a JSON file:
//!
//! ```json
//! {
//!   "keywords": { "transformer": 3, "graph neural": 5 },
//!   "authors": { "Hinton": 10, "J(ohn|\\.) Smith": 4 },
//!   "rate_abstract": true,
//!   "rating_min": 2,
//!   "reverse": false,
//!   "length": 20
//! }
//! ```
//!
//! Every field is optional. Unknown fields are rejected so that typos like
//! `"keyword"` don't silently produce an empty table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::RatingError;
use crate::scoring::ranking::sort_entries;
use crate::scoring::{AuthorRatings, KeywordRatings, RatingTables};
use crate::types::Entry;

fn default_rate_abstract() -> bool {
    true
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Keyword → weight per occurrence.
    #[serde(default)]
    pub keywords: HashMap<String, i64>,
    /// Author fragment (regular expression) → weight per matching author.
    #[serde(default)]
    pub authors: HashMap<String, i64>,
    #[serde(default = "default_rate_abstract")]
    pub rate_abstract: bool,
    #[serde(default)]
    pub rating_min: i64,
    #[serde(default)]
    pub reverse: bool,
    /// Maximum number of entries to show. Negative or absent means all.
    #[serde(default)]
    pub length: Option<i64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            keywords: HashMap::new(),
            authors: HashMap::new(),
            rate_abstract: default_rate_abstract(),
            rating_min: 0,
            reverse: false,
            length: None,
        }
    }
}

impl ScanConfig {
    pub fn from_json(json: &str) -> Result<Self, RatingError> {
        serde_json::from_str(json).map_err(|source| RatingError::Json {
            origin: "config".to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, RatingError> {
        let content = fs::read_to_string(path).map_err(|source| RatingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| RatingError::Json {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Compile both tables. Invalid author patterns surface here.
    pub fn rating_tables(&self) -> Result<RatingTables, RatingError> {
        Ok(RatingTables {
            keywords: KeywordRatings::new(self.keywords.iter().map(|(k, &w)| (k.as_str(), w))),
            authors: AuthorRatings::new(self.authors.iter().map(|(a, &w)| (a.as_str(), w)))?,
            rate_abstract: self.rate_abstract,
        })
    }

    /// Rank already evaluated entries with this config's parameters.
    pub fn rank<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        sort_entries(entries, self.rating_min, self.reverse, self.length)
    }
}
