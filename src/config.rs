// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index build settings.

use serde::{Deserialize, Serialize};

use crate::flatten::TITLE_WEIGHT;

/// Knobs applied when a document is turned into keyword counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexConfig {
    /// Times the title is repeated ahead of the body.
    pub title_weight: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title_weight: TITLE_WEIGHT,
        }
    }
}

impl IndexConfig {
    pub fn with_title_weight(mut self, title_weight: usize) -> Self {
        self.title_weight = title_weight;
        self
    }
}
