//! Tests for loading individual documents and whole manifests.

use std::fs;

use helpdex::build::{load_document, load_documents, read_manifest, InputManifest};

use crate::common::fixture;

#[test]
fn test_load_nested_document() {
    let (doc_id, doc) = load_document(&fixture("valid"), "billing/refunds.json").unwrap();
    assert_eq!(doc_id, "billing/refunds");
    assert_eq!(doc.title, "Refunds");
    assert_eq!(doc.body.len(), 3);
}

#[test]
fn test_load_all_fixture_documents() {
    let dir = fixture("valid");
    let manifest = read_manifest(&dir).unwrap();
    let corpus = load_documents(&dir, &manifest).unwrap();

    let ids: Vec<&str> = corpus.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["accounts/reset-password", "billing/refunds", "shipping"]);
}

#[test]
fn test_invalid_node_names_document_and_path() {
    let dir = fixture("invalid-node");
    let manifest = read_manifest(&dir).unwrap();
    let err = load_documents(&dir, &manifest).unwrap_err();

    assert!(err.is_invalid_document());
    let message = err.to_string();
    assert!(message.contains("'broken'"), "{}", message);
    assert!(message.contains("body[0].content[0]"), "{}", message);
}

#[test]
fn test_missing_document_is_io_error() {
    let dir = fixture("missing-doc");
    let manifest = read_manifest(&dir).unwrap();
    let err = load_documents(&dir, &manifest).unwrap_err();

    assert!(!err.is_invalid_document());
    assert!(err.to_string().contains("absent.json"), "{}", err);
}

#[test]
fn test_unparseable_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("bad.json"), "{ not json").unwrap();

    let manifest = InputManifest {
        version: 1,
        documents: vec!["bad.json".to_string()],
        stopwords: None,
        title_weight: None,
    };
    let err = load_documents(temp_dir.path(), &manifest).unwrap_err();
    assert!(err.to_string().contains("bad.json"), "{}", err);
}

#[test]
fn test_untitled_document_loads() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("plain.json"),
        r#"{"body": [{"element": "text", "content": 404}]}"#,
    )
    .unwrap();

    let (_, doc) = load_document(temp_dir.path(), "plain.json").unwrap();
    assert_eq!(doc.title, "");
    assert_eq!(doc.body, vec![helpdex::ContentNode::text("404")]);
}
