// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors raised while building rating tables or loading inputs.
///
/// Scoring and ranking themselves never fail; everything that can go wrong
/// is caught when tables are compiled or files are read.
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("invalid author pattern {pattern:?}: {source}")]
    InvalidAuthorPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
