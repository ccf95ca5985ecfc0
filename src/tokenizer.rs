// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by indexing and querying.
//!
//! Both sides of the engine go through [`tokenize`]; if a query were
//! normalized differently from the indexed text its words would never line up
//! with the stored keywords.
//!
//! # Algorithm
//!
//! 1. Replace every run of separator characters (see [`is_separator`]) with a
//!    single space
//! 2. Lowercase
//! 3. Split on whitespace (leading and trailing whitespace disappear here)
//! 4. Drop stopwords

use crate::stopwords::Stopwords;

/// Characters that break words apart besides whitespace.
///
/// Punctuation common in help content, straight and curly quotes, and ASCII
/// digits. Hyphens, underscores, `!`, `&` and `#` are deliberately absent:
/// they stay glued to the surrounding word.
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '/' | '\n'
            | '('
            | ')'
            | '+'
            | '?'
            | '@'
            | '*'
            | '"'
            | '\''
            | '\u{201C}' // “
            | '\u{201D}' // ”
            | '\u{2019}' // ’
            | ','
            | '.'
            | ':'
            | ';'
    ) || c.is_ascii_digit()
}

/// Collapse every run of separators into one space, leaving other text intact.
pub fn strip_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if is_separator(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Split text into lowercase keywords, excluding stopwords.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn tokenize(text: &str, stopwords: &Stopwords) -> Vec<String> {
    strip_separators(text)
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !stopwords.contains(word))
        .map(str::to_owned)
        .collect()
}
