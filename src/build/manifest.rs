// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::IndexError;

/// The only manifest layout this loader understands.
pub const MANIFEST_VERSION: u32 = 1;

pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json` at the root of a corpus directory.
///
/// ```json
/// {
///   "version": 1,
///   "documents": ["billing.json", "accounts/reset-password.json"],
///   "stopwords": "stopwords.txt",
///   "titleWeight": 5
/// }
/// ```
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
    /// Stopword file, relative to the corpus directory.
    #[serde(default)]
    pub stopwords: Option<String>,
    #[serde(default)]
    pub title_weight: Option<usize>,
}

impl InputManifest {
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.version != MANIFEST_VERSION {
            return Err(IndexError::InvalidManifest(format!(
                "unsupported version {} (expected {})",
                self.version, MANIFEST_VERSION
            )));
        }
        Ok(())
    }
}

/// Read and validate `<input_dir>/manifest.json`.
pub fn read_manifest(input_dir: &Path) -> Result<InputManifest, IndexError> {
    let path = input_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|source| IndexError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest: InputManifest =
        serde_json::from_str(&content).map_err(|source| IndexError::Json { path, source })?;
    manifest.validate()?;
    Ok(manifest)
}
