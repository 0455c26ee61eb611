// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `wordfind`: print the most frequent words of a word stream in a grid.
//!
//! With no arguments the built-in sample grid and word stream are used.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_search::{sample, Grid, Scan, Searcher, GRID_SIDE, MAX_RESULTS};

/// Find the most repeated words of a word stream in a 64x64 character grid
#[derive(Parser, Debug)]
#[command(name = "wordfind")]
#[command(version)]
struct Args {
    /// Words to search for (default: the built-in sample stream)
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// File with the grid, one row per line (default: the built-in sample grid)
    #[arg(long, value_name = "PATH")]
    grid: Option<PathBuf>,

    /// Scan grid rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Print each ranked word with its number of occurrences
    #[arg(long)]
    counts: bool,

    /// Log scan details to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_grid(path: Option<&PathBuf>) -> Result<Grid> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid file {}", path.display()))?;
            text.parse::<Grid>()
                .with_context(|| format!("Invalid grid in {}", path.display()))
        }
        None => Grid::from_rows(sample::grid_rows()).context("Invalid built-in sample grid"),
    }
}

#[cfg(feature = "parallel")]
fn run_scan(searcher: &Searcher, words: &[String], parallel: bool) -> Scan {
    if parallel {
        searcher.scan_parallel(words)
    } else {
        searcher.scan(words)
    }
}

#[cfg(not(feature = "parallel"))]
fn run_scan(searcher: &Searcher, words: &[String], parallel: bool) -> Scan {
    if parallel {
        tracing::warn!("built without the `parallel` feature; scanning sequentially");
    }
    searcher.scan(words)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let grid = load_grid(args.grid.as_ref())?;
    tracing::debug!("loaded {}x{} grid", GRID_SIDE, GRID_SIDE);

    let words: Vec<String> = if args.words.is_empty() {
        sample::WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words
    };

    let searcher = Searcher::new(grid);
    let scan = run_scan(&searcher, &words, args.parallel);

    println!("Word stream:");
    for word in &words {
        println!("{}", word);
    }
    println!();
    println!();

    println!("Top {} most repeated words were:", MAX_RESULTS);
    for word in scan.top() {
        if args.counts {
            println!("{} ({})", word, scan.count(&word));
        } else {
            println!("{}", word);
        }
    }
    Ok(())
}
