// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entry loading from the JSON handed over by the fetch layer.
//!
//! The input is a JSON array of entry objects. Annotation fields are never
//! read from input, so every loaded entry starts unscored.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::RatingError;
use crate::types::Entry;

/// Parse a JSON array of entries.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>, RatingError> {
    serde_json::from_str(json).map_err(|source| RatingError::Json {
        origin: "entries".to_string(),
        source,
    })
}

/// Read and parse a JSON array of entries from disk.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, RatingError> {
    let content = fs::read_to_string(path).map_err(|source| RatingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<Entry> =
        serde_json::from_str(&content).map_err(|source| RatingError::Json {
            origin: path.display().to_string(),
            source,
        })?;
    info!(path = %path.display(), entries = entries.len(), "loaded entries");
    Ok(entries)
}
