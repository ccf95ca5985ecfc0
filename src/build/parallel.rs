// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading and parsing article files is the slow part of a build and every
//! file is independent, so the manifest is walked with `par_iter()`. Results
//! are collected in manifest order before they go into the corpus map, which
//! keeps error reporting deterministic: the first failing entry in manifest
//! order wins.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::Path;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::IndexError;
use crate::types::{Corpus, Document};

use super::document::load_document;
use super::manifest::InputManifest;

/// Load all documents listed in the manifest.
pub fn load_documents(input_dir: &Path, manifest: &InputManifest) -> Result<Corpus, IndexError> {
    #[cfg(feature = "parallel")]
    let loaded = manifest
        .documents
        .par_iter()
        .map(|filename| load_document(input_dir, filename))
        .collect::<Vec<_>>();

    #[cfg(not(feature = "parallel"))]
    let loaded = manifest
        .documents
        .iter()
        .map(|filename| load_document(input_dir, filename))
        .collect::<Vec<_>>();

    into_corpus(loaded)
}

/// Load all documents listed in the manifest, ticking `progress` per file.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Corpus, IndexError> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    let loaded = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let result = load_document(input_dir, filename);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect::<Vec<_>>();

    into_corpus(loaded)
}

fn into_corpus(
    loaded: Vec<Result<(String, Document), IndexError>>,
) -> Result<Corpus, IndexError> {
    let mut corpus = Corpus::new();
    for result in loaded {
        let (doc_id, doc) = result?;
        if corpus.insert(doc_id.clone(), doc).is_some() {
            return Err(IndexError::InvalidManifest(format!(
                "document id '{}' is listed more than once",
                doc_id
            )));
        }
    }
    Ok(corpus)
}
