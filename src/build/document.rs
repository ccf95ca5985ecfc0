// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;
use std::fs;
use std::path::{Component, Path};

use crate::error::IndexError;
use crate::types::Document;

/// Document id for a manifest entry: the relative path without its extension,
/// with `/` separators. `accounts/reset-password.json` → `accounts/reset-password`.
pub fn doc_id_for(filename: &str) -> String {
    let path = Path::new(filename).with_extension("");
    path.components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Read and parse one document file listed in the manifest.
pub fn load_document(
    input_dir: &Path,
    filename: &str,
) -> Result<(String, Document), IndexError> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| IndexError::Io {
        path: path.clone(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&content).map_err(|source| IndexError::Json { path, source })?;

    let doc_id = doc_id_for(filename);
    let doc = Document::from_value(&doc_id, &value)?;
    Ok((doc_id, doc))
}
