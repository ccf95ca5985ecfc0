// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types surfaced by indexing and corpus loading.
//!
//! Indexing is all-or-nothing: a single malformed document aborts the run and
//! no partial index is handed back. Query-time problems do not exist; unknown
//! words simply score nothing.

use std::path::PathBuf;
use thiserror::Error;

/// A content node that is neither a text leaf nor a branch.
///
/// `path` locates the node inside its document, e.g. `body[1].content[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct ShapeError {
    pub path: String,
    pub reason: String,
}

impl ShapeError {
    pub(crate) fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by the indexing pipeline and the corpus loader.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A document's content tree violates the text/branch node shape.
    #[error("invalid document '{doc_id}' at {path}: {reason}")]
    InvalidDocument {
        doc_id: String,
        path: String,
        reason: String,
    },

    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),
}

impl IndexError {
    /// Attach a document id to a shape error.
    pub fn invalid_document(doc_id: impl Into<String>, err: ShapeError) -> Self {
        IndexError::InvalidDocument {
            doc_id: doc_id.into(),
            path: err.path,
            reason: err.reason,
        }
    }

    pub fn is_invalid_document(&self) -> bool {
        matches!(self, IndexError::InvalidDocument { .. })
    }
}
