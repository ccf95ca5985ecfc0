// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the helpdex command-line interface.
//!
//! Two subcommands over a corpus directory: `index` builds and verifies the
//! keyword index and prints its size, `search` rebuilds it and ranks documents
//! for a query. Nothing is written to disk; every run indexes from scratch.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "helpdex",
    about = "Keyword-frequency search over structured help articles",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the corpus lives and how to index it.
#[derive(Args, Clone, Debug)]
pub struct CorpusArgs {
    /// Corpus directory containing manifest.json and document files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Stopword file (JSON array or one word per line); overrides the manifest
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Times each title is repeated ahead of the body; overrides the manifest
    #[arg(long)]
    pub title_weight: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the keyword index for a corpus and report its size
    Index {
        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Rank the corpus documents for a query
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
