// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! # Invariants
//!
//! 1. **SPARSE**: a document absent from a keyword's map has count zero; zero
//!    counts are never stored
//! 2. **MIRRORED**: `documents[d][k] == keywords[k][d]` for every stored pair
//! 3. **NON_EMPTY**: every keyword maps to at least one document
//!
//! [`crate::verify::verify_index`] checks all three.

use crate::types::{DocumentIndex, InvertedIndex};

/// Transpose doc → keyword → count into keyword → doc → count.
pub fn invert(documents: &DocumentIndex) -> InvertedIndex {
    let mut keywords = InvertedIndex::new();

    for (doc_id, counts) in documents {
        for (keyword, &count) in counts {
            // INVARIANT: SPARSE
            if count == 0 {
                continue;
            }
            keywords
                .entry(keyword.clone())
                .or_default()
                .insert(doc_id.clone(), count);
        }
    }

    keywords
}

/// Transpose back to doc → keyword → count.
///
/// Documents that had no keywords at all cannot be recovered; everything
/// else round-trips exactly.
pub fn uninvert(keywords: &InvertedIndex) -> DocumentIndex {
    let mut documents = DocumentIndex::new();

    for (keyword, postings) in keywords {
        for (doc_id, &count) in postings {
            if count == 0 {
                continue;
            }
            documents
                .entry(doc_id.clone())
                .or_default()
                .insert(keyword.clone(), count);
        }
    }

    documents
}
