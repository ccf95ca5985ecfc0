// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword counting and corpus indexing.
//!
//! Each document is flattened, tokenized and counted on its own, which makes
//! corpus indexing embarrassingly parallel. With the `parallel` feature the
//! per-document work fans out over rayon and the partial maps are collected
//! into one `BTreeMap`; the result is identical to the sequential build.
//!
//! [`SearchIndex`] owns everything a query needs: stopwords, build settings,
//! and the document and inverted indexes. The two indexes are only ever
//! replaced together.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::flatten::flatten_document_weighted;
use crate::inverted::invert;
use crate::stopwords::Stopwords;
use crate::tokenizer::tokenize;
use crate::types::{
    Corpus, Document, DocumentIndex, IndexStats, InvertedIndex, KeywordCounts, RankedDocument,
};
use crate::verify::{verify_index, InvariantError};

/// Count keyword occurrences in one document using the default title weight.
pub fn count_keywords(doc: &Document, stopwords: &Stopwords) -> KeywordCounts {
    count_keywords_with(doc, stopwords, &IndexConfig::default())
}

pub fn count_keywords_with(
    doc: &Document,
    stopwords: &Stopwords,
    config: &IndexConfig,
) -> KeywordCounts {
    let text = flatten_document_weighted(doc, config.title_weight);
    let mut counts = KeywordCounts::new();
    for word in tokenize(&text, stopwords) {
        let count = counts.entry(word).or_insert(0);
        *count = count.saturating_add(1);
    }
    counts
}

/// Index every document of an already-parsed corpus.
pub fn index_documents(corpus: &Corpus, stopwords: &Stopwords) -> DocumentIndex {
    index_documents_with(corpus, stopwords, &IndexConfig::default())
}

pub fn index_documents_with(
    corpus: &Corpus,
    stopwords: &Stopwords,
    config: &IndexConfig,
) -> DocumentIndex {
    corpus
        .iter()
        .map(|(doc_id, doc)| (doc_id.clone(), count_keywords_with(doc, stopwords, config)))
        .collect()
}

/// Parallel corpus indexing. Produces exactly what [`index_documents_with`] does.
#[cfg(feature = "parallel")]
pub fn index_documents_parallel(
    corpus: &Corpus,
    stopwords: &Stopwords,
    config: &IndexConfig,
) -> DocumentIndex {
    corpus
        .par_iter()
        .map(|(doc_id, doc)| (doc_id.clone(), count_keywords_with(doc, stopwords, config)))
        .collect()
}

/// Parse raw JSON documents, failing on the first malformed content tree.
pub fn parse_corpus(documents: &BTreeMap<String, Value>) -> Result<Corpus, IndexError> {
    documents
        .iter()
        .map(|(doc_id, value)| Document::from_value(doc_id, value).map(|doc| (doc_id.clone(), doc)))
        .collect()
}

/// Index raw JSON documents.
///
/// Fails with [`IndexError::InvalidDocument`] if any body node is neither a
/// text leaf nor a branch. Nothing is returned for the documents that did
/// parse: a partial index would silently rank against missing content.
pub fn index_corpus(
    documents: &BTreeMap<String, Value>,
    stopwords: &Stopwords,
) -> Result<DocumentIndex, IndexError> {
    let corpus = parse_corpus(documents)?;
    Ok(index_documents(&corpus, stopwords))
}

fn build_document_index(
    corpus: &Corpus,
    stopwords: &Stopwords,
    config: &IndexConfig,
) -> DocumentIndex {
    #[cfg(feature = "parallel")]
    {
        index_documents_parallel(corpus, stopwords, config)
    }
    #[cfg(not(feature = "parallel"))]
    {
        index_documents_with(corpus, stopwords, config)
    }
}

/// The document index, its inversion, and the settings they were built with.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    config: IndexConfig,
    stopwords: Stopwords,
    documents: DocumentIndex,
    keywords: InvertedIndex,
}

impl SearchIndex {
    /// An empty index that answers every query with no results.
    pub fn new(stopwords: Stopwords, config: IndexConfig) -> Self {
        Self {
            config,
            stopwords,
            documents: DocumentIndex::new(),
            keywords: InvertedIndex::new(),
        }
    }

    pub fn build(corpus: &Corpus, stopwords: Stopwords, config: IndexConfig) -> Self {
        let mut index = Self::new(stopwords, config);
        index.reindex(corpus);
        index
    }

    /// Build from raw JSON documents, validating every content tree first.
    pub fn from_json(
        documents: &BTreeMap<String, Value>,
        stopwords: Stopwords,
        config: IndexConfig,
    ) -> Result<Self, IndexError> {
        let corpus = parse_corpus(documents)?;
        Ok(Self::build(&corpus, stopwords, config))
    }

    /// Replace both indexes with ones built from `corpus` and `stopwords`.
    pub fn rebuild(&mut self, corpus: &Corpus, stopwords: Stopwords) {
        self.stopwords = stopwords;
        self.reindex(corpus);
    }

    fn reindex(&mut self, corpus: &Corpus) {
        let documents = build_document_index(corpus, &self.stopwords, &self.config);
        let keywords = invert(&documents);
        debug_assert_eq!(verify_index(&documents, &keywords), Ok(()));
        debug!(
            documents = documents.len(),
            keywords = keywords.len(),
            title_weight = self.config.title_weight,
            "built keyword index"
        );
        self.documents = documents;
        self.keywords = keywords;
    }

    /// Ranked document ids for a free-text query.
    pub fn search(&self, query: &str) -> Vec<String> {
        crate::search::search(query, &self.stopwords, &self.keywords)
    }

    /// Ranked documents with their scores.
    pub fn search_scored(&self, query: &str) -> Vec<RankedDocument> {
        crate::search::search_scored(query, &self.stopwords, &self.keywords)
    }

    pub fn documents(&self) -> &DocumentIndex {
        &self.documents
    }

    pub fn keywords(&self) -> &InvertedIndex {
        &self.keywords
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            keywords: self.keywords.len(),
            postings: self.keywords.values().map(BTreeMap::len).sum(),
            total_occurrences: self
                .keywords
                .values()
                .flat_map(BTreeMap::values)
                .sum(),
        }
    }

    /// Check that the two indexes mirror each other exactly.
    pub fn verify(&self) -> Result<(), InvariantError> {
        verify_index(&self.documents, &self.keywords)
    }
}
