// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a keyword index.
//!
//! A help article is a title plus a tree of content nodes. Leaves carry text;
//! branches carry an element tag (`h2`, `p`, `li`, ...) and child nodes. The
//! tag is kept for round-tripping but never weights or filters content.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "title": "Paying your bill",
//!   "body": [
//!     { "element": "h2", "content": [ { "element": "text", "content": "Direct debit" } ] }
//!   ]
//! }
//! ```
//!
//! A node whose `element` is `"text"` must carry scalar `content` (strings are
//! taken as-is; numbers and booleans are coerced to their string form). Any
//! other node, including one with no `element` at all, is a branch and must
//! carry an array of child nodes. An untagged branch gets the empty tag.
//!
//! # Index shapes
//!
//! | Alias             | Shape                                       |
//! |-------------------|---------------------------------------------|
//! | `KeywordCounts`   | keyword → count                             |
//! | `DocumentIndex`   | doc id → keyword → count                    |
//! | `InvertedIndex`   | keyword → doc id → count                    |
//! | `SelectedEntries` | keyword → doc id → count, query order       |
//! | `ScoreMap`        | doc id → cumulative score, first-seen order |
//!
//! The index maps are `BTreeMap`s so iteration order is the key order on
//! every run. The per-query maps keep insertion order instead: ranking ties
//! fall back to the order in which documents were first scored.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IndexError, ShapeError};

/// Element tag that marks a text leaf.
pub const TEXT_ELEMENT: &str = "text";

/// keyword → occurrence count for one document.
pub type KeywordCounts = BTreeMap<String, u64>;

/// doc id → keyword counts.
pub type DocumentIndex = BTreeMap<String, KeywordCounts>;

/// keyword → doc id → occurrence count. Sparse: absent means zero.
pub type InvertedIndex = BTreeMap<String, BTreeMap<String, u64>>;

/// The inverted index restricted to one query's words, in query order.
pub type SelectedEntries = IndexMap<String, BTreeMap<String, u64>>;

/// doc id → cumulative relevance score for a single query, in the order
/// documents were first scored.
pub type ScoreMap = IndexMap<String, u64>;

/// doc id → parsed document.
pub type Corpus = BTreeMap<String, Document>;

/// One node of a document's content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// Leaf holding plain text.
    Text { content: String },
    /// Internal node; `element` is the markup tag and carries no weight.
    Branch {
        element: String,
        content: Vec<ContentNode>,
    },
}

impl ContentNode {
    pub fn text(content: impl Into<String>) -> Self {
        ContentNode::Text {
            content: content.into(),
        }
    }

    pub fn branch(element: impl Into<String>, content: Vec<ContentNode>) -> Self {
        ContentNode::Branch {
            element: element.into(),
            content,
        }
    }

    /// Parse a node from raw JSON, reporting shape violations against `path`.
    pub fn from_value(value: &Value, path: &str) -> Result<Self, ShapeError> {
        let object = value.as_object().ok_or_else(|| {
            ShapeError::new(path, format!("expected a node object, found {}", kind_of(value)))
        })?;

        let content = object
            .get("content")
            .ok_or_else(|| ShapeError::new(path, "missing field `content`"))?;

        // Only an explicit "text" tag makes a leaf; anything else is a branch.
        let element = match object.get("element") {
            Some(Value::String(element)) => element.as_str(),
            _ => "",
        };

        if element == TEXT_ELEMENT {
            let text = match content {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(ShapeError::new(
                        path,
                        format!("text node content must be a scalar, found {}", kind_of(other)),
                    ))
                }
            };
            return Ok(ContentNode::Text { content: text });
        }

        let children = content.as_array().ok_or_else(|| {
            ShapeError::new(
                path,
                format!(
                    "branch node `{}` content must be an array of nodes, found {}",
                    element,
                    kind_of(content)
                ),
            )
        })?;

        let content = children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                ContentNode::from_value(child, &format!("{}.content[{}]", path, i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ContentNode::Branch {
            element: element.to_string(),
            content,
        })
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ContentNode::from_value(&value, "node").map_err(de::Error::custom)
    }
}

impl Serialize for ContentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("ContentNode", 2)?;
        match self {
            ContentNode::Text { content } => {
                node.serialize_field("element", TEXT_ELEMENT)?;
                node.serialize_field("content", content)?;
            }
            ContentNode::Branch { element, content } => {
                node.serialize_field("element", element)?;
                node.serialize_field("content", content)?;
            }
        }
        node.end()
    }
}

/// A help article: title plus an ordered body of content nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub title: String,
    pub body: Vec<ContentNode>,
}

impl Document {
    pub fn new(title: impl Into<String>, body: Vec<ContentNode>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// Parse a raw JSON document, tagging shape errors with `doc_id`.
    pub fn from_value(doc_id: &str, value: &Value) -> Result<Self, IndexError> {
        parse_document(value).map_err(|err| IndexError::invalid_document(doc_id, err))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        parse_document(&value).map_err(de::Error::custom)
    }
}

fn parse_document(value: &Value) -> Result<Document, ShapeError> {
    let object = value.as_object().ok_or_else(|| {
        ShapeError::new("$", format!("expected a document object, found {}", kind_of(value)))
    })?;

    // An absent title contributes nothing to the weighted prefix.
    let title = match object.get("title") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(ShapeError::new(
                "title",
                format!("title must be a string, found {}", kind_of(other)),
            ))
        }
    };

    let body = match object.get("body") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(nodes)) => nodes
            .iter()
            .enumerate()
            .map(|(i, node)| ContentNode::from_value(node, &format!("body[{}]", i)))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(ShapeError::new(
                "body",
                format!("body must be an array of nodes, found {}", kind_of(other)),
            ))
        }
    };

    Ok(Document { title, body })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDocument {
    pub doc_id: String,
    pub score: u64,
}

impl fmt::Display for RankedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.doc_id, self.score)
    }
}

/// Size summary of a built index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Documents indexed, including ones with no keywords.
    pub documents: usize,
    /// Distinct keywords.
    pub keywords: usize,
    /// (keyword, document) pairs.
    pub postings: usize,
    /// Sum of every count in the index.
    pub total_occurrences: u64,
}
