//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so unit tests, integration tests and
//! benchmarks agree on what "the example corpus" is.

#![doc(hidden)]

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::types::{ContentNode, Corpus, Document};

/// A text leaf.
pub fn text(content: &str) -> ContentNode {
    ContentNode::text(content)
}

/// A branch node with the given children.
pub fn branch(element: &str, children: Vec<ContentNode>) -> ContentNode {
    ContentNode::branch(element, children)
}

/// A document whose body is one `<p>` per paragraph.
pub fn make_doc(title: &str, paragraphs: &[&str]) -> Document {
    Document::new(
        title,
        paragraphs
            .iter()
            .map(|paragraph| branch("p", vec![text(paragraph)]))
            .collect(),
    )
}

/// Three untitled documents: "lamb" in doc1 (×1) and doc2 (×2), "apples"
/// in doc2 (×1) and doc3 (×3).
pub fn example_corpus_json() -> BTreeMap<String, Value> {
    let mut documents = BTreeMap::new();
    documents.insert(
        "doc1".to_string(),
        json!({
            "body": [
                {"element": "h2", "content": [
                    {"element": "text", "content": "keep calm,,, and Carry on, MY old lamb"}
                ]}
            ]
        }),
    );
    documents.insert(
        "doc2".to_string(),
        json!({
            "body": [
                {"element": "h2", "content": [{"element": "text", "content": "Mary"}]},
                {"element": "h2", "content": [
                    {"element": "text", "content": "haD\n\t\n\n a little\n lamb"}
                ]},
                {"element": "h2", "content": [
                    {"element": "text", "content": "had a liTTle\t\tlamb     that Ate all the apples"}
                ]}
            ]
        }),
    );
    documents.insert(
        "doc3".to_string(),
        json!({
            "body": [
                {"element": "h2", "content": [{"element": "text", "content": "apples"}]},
                {"element": "h2", "content": [{"element": "text", "content": "pears"}]},
                {"element": "h2", "content": [{"element": "text", "content": "bananas and apples"}]},
                {"element": "h2", "content": [
                    {"element": "text", "content": "but apples are best, pears next"}
                ]}
            ]
        }),
    );
    documents
}

/// [`example_corpus_json`], parsed.
pub fn example_corpus() -> Corpus {
    example_corpus_json()
        .iter()
        .map(|(doc_id, value)| {
            let doc = Document::from_value(doc_id, value).expect("example corpus is well-formed");
            (doc_id.clone(), doc)
        })
        .collect()
}
