// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query entry point.
//!
//! ```text
//! query ──tokenize──▶ words ──select──▶ entries ──score──▶ scores ──rank──▶ doc ids
//! ```
//!
//! The query goes through the same [`tokenize`] as the indexed text, so a
//! query word matches a keyword exactly when both normalize to the same
//! string.

use tracing::debug;

use crate::scoring::{rank_scored, score_documents};
use crate::stopwords::Stopwords;
use crate::tokenizer::tokenize;
use crate::types::{InvertedIndex, RankedDocument, SelectedEntries};

/// Restrict the inverted index to the query's words, in query order.
///
/// Words without an entry are dropped silently. A word repeated in the query
/// selects its entry once, at its first position.
pub fn select_keyword_entries(words: &[String], keywords: &InvertedIndex) -> SelectedEntries {
    words
        .iter()
        .filter_map(|word| keywords.get_key_value(word.as_str()))
        .map(|(keyword, postings)| (keyword.clone(), postings.clone()))
        .collect()
}

/// Ranked document ids for `query`.
pub fn search(query: &str, stopwords: &Stopwords, keywords: &InvertedIndex) -> Vec<String> {
    search_scored(query, stopwords, keywords)
        .into_iter()
        .map(|ranked| ranked.doc_id)
        .collect()
}

/// Ranked documents with their scores for `query`.
pub fn search_scored(
    query: &str,
    stopwords: &Stopwords,
    keywords: &InvertedIndex,
) -> Vec<RankedDocument> {
    let words = tokenize(query, stopwords);
    let selected = select_keyword_entries(&words, keywords);
    let scores = score_documents(&selected);
    debug!(
        query,
        words = words.len(),
        matched_keywords = selected.len(),
        matched_documents = scores.len(),
        "scored query"
    );
    rank_scored(&scores)
}
