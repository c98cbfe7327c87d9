// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use arxiv_scan::{load_entries, sort_entries, ScanConfig};

mod cli;
use cli::display::print_entries;
use cli::{Cli, Commands, RankArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Rank(args) => run_rank(&args),
        Commands::CheckConfig { file } => run_check_config(&file),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so that `--json` output on stdout stays clean.
/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_rank(args: &RankArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    args.apply_to(&mut config);

    if config.keywords.is_empty() && config.authors.is_empty() {
        warn!("no keyword or author ratings configured; every entry will rate 0");
    }

    let tables = config
        .rating_tables()
        .context("compiling rating tables")?;
    let mut entries = load_entries(&args.entries)
        .with_context(|| format!("loading entries {}", args.entries.display()))?;

    #[cfg(feature = "parallel")]
    tables.evaluate_parallel(&mut entries);
    #[cfg(not(feature = "parallel"))]
    tables.evaluate(&mut entries);

    let ranked = sort_entries(&entries, config.rating_min, config.reverse, config.length);
    info!(
        total = entries.len(),
        shown = ranked.len(),
        rating_min = config.rating_min,
        "ranked entries"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&ranked).context("serializing ranked entries")?;
        println!("{}", json);
    } else {
        print_entries(&ranked);
    }
    Ok(())
}

fn run_check_config(file: &Path) -> Result<()> {
    let config =
        ScanConfig::load(file).with_context(|| format!("loading config {}", file.display()))?;
    let tables = config.rating_tables().context("compiling rating tables")?;

    eprintln!("✅ {} is valid", file.display());
    eprintln!(
        "   {} keywords │ {} author patterns │ rating_min {} │ abstract {}",
        tables.keywords.len(),
        tables.authors.len(),
        config.rating_min,
        if config.rate_abstract { "on" } else { "off" }
    );
    Ok(())
}
