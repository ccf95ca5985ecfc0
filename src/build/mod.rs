// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a corpus directory from disk.
//!
//! A corpus directory holds a `manifest.json`, the article files it lists and
//! optionally a stopword file. Loading resolves the effective stopwords and
//! build settings (CLI overrides beat manifest values beat defaults) and
//! hands back everything [`SearchIndex::build`] needs.

pub mod document;
pub mod manifest;
pub mod parallel;

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::index::SearchIndex;
use crate::stopwords::Stopwords;
use crate::types::Corpus;

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// Values that override what the manifest says.
#[derive(Clone, Debug, Default)]
pub struct CorpusOptions {
    pub stopwords: Option<PathBuf>,
    pub title_weight: Option<usize>,
}

/// A corpus plus the stopwords and settings it should be indexed with.
#[derive(Clone, Debug)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub stopwords: Stopwords,
    pub config: IndexConfig,
}

impl LoadedCorpus {
    pub fn into_index(self) -> SearchIndex {
        SearchIndex::build(&self.corpus, self.stopwords, self.config)
    }
}

/// Create a progress style for the loading progress bar
#[cfg(feature = "parallel")]
pub fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Load a corpus directory.
pub fn load_corpus(
    input_dir: &Path,
    options: &CorpusOptions,
) -> Result<LoadedCorpus, IndexError> {
    let manifest = read_manifest(input_dir)?;
    let corpus = load_documents(input_dir, &manifest)?;
    finish_loading(input_dir, &manifest, options, corpus)
}

/// Load a corpus directory, reporting per-document progress.
#[cfg(feature = "parallel")]
pub fn load_corpus_with_progress(
    input_dir: &Path,
    options: &CorpusOptions,
    progress: &ProgressBar,
) -> Result<LoadedCorpus, IndexError> {
    let manifest = read_manifest(input_dir)?;
    progress.set_length(manifest.documents.len() as u64);
    let corpus = load_documents_with_progress(input_dir, &manifest, progress)?;
    finish_loading(input_dir, &manifest, options, corpus)
}

fn finish_loading(
    input_dir: &Path,
    manifest: &InputManifest,
    options: &CorpusOptions,
    corpus: Corpus,
) -> Result<LoadedCorpus, IndexError> {
    let stopwords_path = options
        .stopwords
        .clone()
        .or_else(|| manifest.stopwords.as_ref().map(|file| input_dir.join(file)));

    let stopwords = match stopwords_path {
        Some(path) => Stopwords::load(&path)?,
        None => {
            warn!(
                dir = %input_dir.display(),
                "no stopword list configured; indexing every word"
            );
            Stopwords::default()
        }
    };

    let mut config = IndexConfig::default();
    if let Some(weight) = options.title_weight.or(manifest.title_weight) {
        config = config.with_title_weight(weight);
    }

    debug!(
        documents = corpus.len(),
        stopwords = stopwords.len(),
        title_weight = config.title_weight,
        "loaded corpus"
    );

    Ok(LoadedCorpus {
        corpus,
        stopwords,
        config,
    })
}
