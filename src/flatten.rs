// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content tree flattening.
//!
//! Ranking has no separate title term. Instead the title is written
//! `TITLE_WEIGHT` times in front of the body text, so each title word counts
//! five times in the keyword index.

use crate::types::{ContentNode, Document};

/// How many times the title is repeated ahead of the body.
pub const TITLE_WEIGHT: usize = 5;

/// `(title + " ")` repeated [`TITLE_WEIGHT`] times.
pub fn weighted_title(title: &str) -> String {
    weighted_title_with(title, TITLE_WEIGHT)
}

pub fn weighted_title_with(title: &str, weight: usize) -> String {
    format!("{} ", title).repeat(weight)
}

/// Flatten one node: text as-is, branches as their children joined by spaces.
pub fn flatten_node(node: &ContentNode) -> String {
    match node {
        ContentNode::Text { content } => content.clone(),
        ContentNode::Branch { content, .. } => flatten_nodes(content),
    }
}

fn flatten_nodes(nodes: &[ContentNode]) -> String {
    nodes.iter().map(flatten_node).collect::<Vec<_>>().join(" ")
}

/// Weighted title followed by the flattened body.
pub fn flatten_document(doc: &Document) -> String {
    flatten_document_weighted(doc, TITLE_WEIGHT)
}

pub fn flatten_document_weighted(doc: &Document, title_weight: usize) -> String {
    let mut text = weighted_title_with(&doc.title, title_weight);
    text.push_str(&flatten_nodes(&doc.body));
    text
}
