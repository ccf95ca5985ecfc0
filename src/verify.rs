// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime checks for the document/inverted index pair.
//!
//! Both indexes come out of the same build, so in a correct build they are
//! exact transposes of each other. [`verify_index`] walks both directions and
//! reports the first disagreement. `SearchIndex` runs it as a debug assertion
//! after every rebuild; the CLI runs it after `helpdex index`.

use thiserror::Error;

use crate::types::{DocumentIndex, InvertedIndex};

/// A violation of the mirrored-index invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A stored count of zero (absence is the only way to say zero).
    #[error("zero count stored for '{keyword}' in '{doc_id}'")]
    ZeroCount { keyword: String, doc_id: String },

    /// A keyword in the inverted index with no documents.
    #[error("keyword '{keyword}' has no documents")]
    EmptyKeyword { keyword: String },

    /// A (document, keyword) pair present on one side only.
    #[error("'{keyword}' in '{doc_id}' missing from the {missing_from} index")]
    MissingPair {
        keyword: String,
        doc_id: String,
        missing_from: IndexSide,
    },

    /// Both sides store the pair but disagree on the count.
    #[error(
        "'{keyword}' in '{doc_id}': document index has {document_count}, \
         inverted index has {keyword_count}"
    )]
    CountMismatch {
        keyword: String,
        doc_id: String,
        document_count: u64,
        keyword_count: u64,
    },
}

/// Which of the two indexes a pair is missing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSide {
    Document,
    Inverted,
}

impl std::fmt::Display for IndexSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexSide::Document => f.write_str("document"),
            IndexSide::Inverted => f.write_str("inverted"),
        }
    }
}

/// Check that `keywords` is exactly the sparse transpose of `documents`.
pub fn verify_index(
    documents: &DocumentIndex,
    keywords: &InvertedIndex,
) -> Result<(), InvariantError> {
    for (doc_id, counts) in documents {
        for (keyword, &document_count) in counts {
            if document_count == 0 {
                return Err(InvariantError::ZeroCount {
                    keyword: keyword.clone(),
                    doc_id: doc_id.clone(),
                });
            }
            match keywords.get(keyword).and_then(|postings| postings.get(doc_id)) {
                None => {
                    return Err(InvariantError::MissingPair {
                        keyword: keyword.clone(),
                        doc_id: doc_id.clone(),
                        missing_from: IndexSide::Inverted,
                    })
                }
                Some(&keyword_count) if keyword_count != document_count => {
                    return Err(InvariantError::CountMismatch {
                        keyword: keyword.clone(),
                        doc_id: doc_id.clone(),
                        document_count,
                        keyword_count,
                    })
                }
                Some(_) => {}
            }
        }
    }

    for (keyword, postings) in keywords {
        if postings.is_empty() {
            return Err(InvariantError::EmptyKeyword {
                keyword: keyword.clone(),
            });
        }
        for (doc_id, &count) in postings {
            if count == 0 {
                return Err(InvariantError::ZeroCount {
                    keyword: keyword.clone(),
                    doc_id: doc_id.clone(),
                });
            }
            let present = documents
                .get(doc_id)
                .is_some_and(|counts| counts.contains_key(keyword));
            if !present {
                return Err(InvariantError::MissingPair {
                    keyword: keyword.clone(),
                    doc_id: doc_id.clone(),
                    missing_from: IndexSide::Document,
                });
            }
        }
    }

    Ok(())
}
