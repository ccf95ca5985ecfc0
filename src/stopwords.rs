// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stopword sets.
//!
//! Stopwords are supplied per call and never owned by an index build, so the
//! same corpus can be indexed against different lists. Matching is exact and
//! case-sensitive against already-lowercased tokens: callers are expected to
//! hand in lowercase words.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::IndexError;

/// A set of words excluded from every token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Build a set from words, stored exactly as given.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a JSON array of strings: `["a", "the", "how"]`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(words))
    }

    /// Parse one word per line. Blank lines and `#` comments are skipped.
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Load a stopword file, JSON if it opens with `[`, line-based otherwise.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim_start().starts_with('[') {
            Self::from_json(&content).map_err(|source| IndexError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Ok(Self::from_lines(&content))
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
