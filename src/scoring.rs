// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring and ranking.
//!
//! A document's score is the plain sum of its counts for the selected
//! keywords. No length normalization, no inverse document frequency: the only
//! bias is the title repetition baked in at index time.
//!
//! Ranking is a stable descending sort over the score map, so equal scores
//! keep the map's insertion order: the document first scored by an earlier
//! query word ranks ahead. Within one keyword, documents are visited in index
//! (document-id) order.

use std::cmp::Ordering;

use crate::types::{RankedDocument, ScoreMap, SelectedEntries};

/// Sum each document's counts across the selected keywords.
pub fn score_documents(selected: &SelectedEntries) -> ScoreMap {
    let mut scores = ScoreMap::new();

    for postings in selected.values() {
        for (doc_id, &count) in postings {
            let score = scores.entry(doc_id.clone()).or_insert(0);
            *score = score.saturating_add(count);
        }
    }

    scores
}

/// Higher score first. Equal scores compare `Equal` so a stable sort keeps
/// their incoming order.
pub fn compare_ranked(a: &RankedDocument, b: &RankedDocument) -> Ordering {
    b.score.cmp(&a.score)
}

/// Scored documents, best first. Does not drop zero scores.
pub fn rank_scored(scores: &ScoreMap) -> Vec<RankedDocument> {
    let mut ranked: Vec<RankedDocument> = scores
        .iter()
        .map(|(doc_id, &score)| RankedDocument {
            doc_id: doc_id.clone(),
            score,
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked
}

/// Document ids, best first.
pub fn rank(scores: &ScoreMap) -> Vec<String> {
    rank_scored(scores)
        .into_iter()
        .map(|ranked| ranked.doc_id)
        .collect()
}
