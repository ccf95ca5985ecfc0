//! Tests for manifest parsing.

use helpdex::build::{read_manifest, InputManifest, MANIFEST_VERSION};

use crate::common::fixture;

#[test]
fn test_parse_manifest_with_settings() {
    let json = r#"{
        "version": 1,
        "documents": ["0.json", "1.json"],
        "stopwords": "stop.txt",
        "titleWeight": 3
    }"#;
    let manifest: InputManifest = serde_json::from_str(json).unwrap();
    assert_eq!(manifest.version, MANIFEST_VERSION);
    assert_eq!(manifest.documents.len(), 2);
    assert_eq!(manifest.stopwords.as_deref(), Some("stop.txt"));
    assert_eq!(manifest.title_weight, Some(3));
}

#[test]
fn test_parse_manifest_empty_documents() {
    let json = r#"{"version": 1, "documents": []}"#;
    let manifest: InputManifest = serde_json::from_str(json).unwrap();
    assert!(manifest.documents.is_empty());
    assert!(manifest.validate().is_ok());
}

#[test]
fn test_parse_manifest_missing_documents_field() {
    let json = r#"{"version": 1}"#;
    assert!(serde_json::from_str::<InputManifest>(json).is_err());
}

#[test]
fn test_read_manifest_fixture() {
    let manifest = read_manifest(&fixture("valid")).unwrap();
    assert_eq!(manifest.documents.len(), 3);
    assert_eq!(manifest.stopwords.as_deref(), Some("stopwords.txt"));
    assert_eq!(manifest.title_weight, None);
}

#[test]
fn test_read_manifest_rejects_unknown_version() {
    let err = read_manifest(&fixture("bad-version")).unwrap_err();
    assert!(err.to_string().contains("unsupported version 2"), "{}", err);
}

#[test]
fn test_read_manifest_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = read_manifest(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("manifest.json"), "{}", err);
}
