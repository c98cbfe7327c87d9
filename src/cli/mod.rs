// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the arxiv-scan command-line interface.
//!
//! Two subcommands: `rank` to rate and order a listing, `check-config` to
//! validate a ratings file before using it. Table entries given on the
//! command line are merged over the config file, flag by flag.

pub mod display;

use std::path::PathBuf;

use arxiv_scan::ScanConfig;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arxiv-scan",
    about = "Rank arXiv listings by keyword and author relevance",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rate entries from a JSON listing and print them in relevance order
    Rank(RankArgs),

    /// Validate a ratings config file
    CheckConfig {
        /// Path to the JSON config
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// JSON file holding an array of entries
    #[arg(short, long)]
    pub entries: PathBuf,

    /// JSON config with keyword/author tables and ranking defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra keyword rating, as KEYWORD=WEIGHT (repeatable)
    #[arg(short = 'k', long = "keyword", value_parser = parse_weight)]
    pub keywords: Vec<(String, i64)>,

    /// Extra author rating, as FRAGMENT=WEIGHT (repeatable)
    #[arg(short = 'a', long = "author", value_parser = parse_weight)]
    pub authors: Vec<(String, i64)>,

    /// Hide entries rated below this
    #[arg(long, allow_negative_numbers = true)]
    pub rating_min: Option<i64>,

    /// Least relevant first
    #[arg(long)]
    pub reverse: bool,

    /// Show at most this many entries (negative means all)
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Ignore keyword hits in abstracts
    #[arg(long)]
    pub no_abstract: bool,

    /// Print ranked entries as JSON instead of the highlighted listing
    #[arg(long)]
    pub json: bool,
}

impl RankArgs {
    /// Layer command-line values over a config loaded from file.
    ///
    /// Table entries given here replace same-named entries from the file.
    /// Boolean flags can only switch behavior on, never back off.
    pub fn apply_to(&self, config: &mut ScanConfig) {
        for (keyword, weight) in &self.keywords {
            config.keywords.insert(keyword.clone(), *weight);
        }
        for (author, weight) in &self.authors {
            config.authors.insert(author.clone(), *weight);
        }
        if let Some(min) = self.rating_min {
            config.rating_min = min;
        }
        if self.reverse {
            config.reverse = true;
        }
        if self.length.is_some() {
            config.length = self.length;
        }
        if self.no_abstract {
            config.rate_abstract = false;
        }
    }
}

/// Parse `NAME=WEIGHT`. Splits on the last `=` so names may contain one.
fn parse_weight(value: &str) -> Result<(String, i64), String> {
    let (name, weight) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got '{}'", value))?;
    if name.is_empty() {
        return Err(format!("empty name in '{}'", value));
    }
    let weight = weight
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid weight in '{}': {}", value, e))?;
    Ok((name.to_string(), weight))
}
