// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use helpdex::build::{CorpusOptions, LoadedCorpus};
use helpdex::SearchIndex;

mod cli;
use cli::{display, Cli, Commands, CorpusArgs};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Index { corpus } => run_index(&corpus),
        Commands::Search {
            corpus,
            query,
            limit,
            json,
        } => run_search(&corpus, &query, limit, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("helpdex=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

impl From<&CorpusArgs> for CorpusOptions {
    fn from(args: &CorpusArgs) -> Self {
        CorpusOptions {
            stopwords: args.stopwords.clone(),
            title_weight: args.title_weight,
        }
    }
}

/// Load every document listed in the corpus manifest, with a progress bar on
/// interactive terminals.
fn load(args: &CorpusArgs, show_progress: bool) -> Result<LoadedCorpus> {
    let options = CorpusOptions::from(args);
    let input: &Path = &args.input;

    #[cfg(feature = "parallel")]
    let loaded = {
        use indicatif::ProgressBar;

        let progress = if show_progress && atty::is(atty::Stream::Stderr) {
            let pb = ProgressBar::new(0);
            pb.set_style(helpdex::build::create_progress_style());
            pb.set_prefix("Loading");
            pb
        } else {
            ProgressBar::hidden()
        };
        let loaded = helpdex::build::load_corpus_with_progress(input, &options, &progress);
        progress.finish_and_clear();
        loaded
    };

    #[cfg(not(feature = "parallel"))]
    let loaded = {
        let _ = show_progress;
        helpdex::build::load_corpus(input, &options)
    };

    loaded.with_context(|| format!("failed to load corpus from {}", input.display()))
}

fn run_index(args: &CorpusArgs) -> Result<()> {
    let start = Instant::now();
    let loaded = load(args, true)?;
    let title_weight = loaded.config.title_weight;
    let index = loaded.into_index();
    index.verify().context("index failed verification")?;
    let elapsed = start.elapsed();

    let stats = index.stats();
    info!(
        documents = stats.documents,
        keywords = stats.keywords,
        elapsed_ms = elapsed.as_millis() as u64,
        "index built"
    );
    display::print_index_summary(&stats, index.stopwords().len(), title_weight, elapsed);
    Ok(())
}

fn run_search(args: &CorpusArgs, query: &str, limit: usize, json: bool) -> Result<()> {
    let loaded = load(args, !json)?;
    let index: SearchIndex = loaded.into_index();

    let start = Instant::now();
    let results = index.search_scored(query);
    let elapsed = start.elapsed();

    if json {
        let shown: Vec<_> = results.iter().take(limit).collect();
        let out = serde_json::to_string_pretty(&shown).context("failed to serialize results")?;
        println!("{}", out);
    } else {
        display::print_search_results(query, &results, limit, elapsed);
    }
    Ok(())
}
