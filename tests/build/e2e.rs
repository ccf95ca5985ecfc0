//! End-to-end tests: corpus directory in, ranked results out.

use helpdex::build::{load_corpus, CorpusOptions};

use crate::common::{assert_index_well_formed, fixture, fixture_index, score_of};

#[test]
fn test_fixture_index_is_well_formed() {
    let index = fixture_index();
    assert_index_well_formed(&index);
    assert_eq!(index.stats().documents, 3);
    assert!(index.verify().is_ok());
}

#[test]
fn test_manifest_stopwords_are_applied() {
    let index = fixture_index();
    assert!(index.stopwords().contains("your"));
    assert!(!index.keywords().contains_key("your"));
    assert!(!index.keywords().contains_key("the"));
}

#[test]
fn test_title_weight_from_defaults() {
    let index = fixture_index();
    let results = index.search_scored("card refunds");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id, "billing/refunds");
    // "refunds" ×5 from the title plus twice in the body, "card" twice
    assert_eq!(results[0].score, 9);
}

#[test]
fn test_ranking_across_documents() {
    let index = fixture_index();
    let results = index.search_scored("business days");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, "billing/refunds");
    assert_eq!(results[0].score, 3);
    assert_eq!(results[1].doc_id, "shipping");
    assert_eq!(results[1].score, 2);
}

#[test]
fn test_single_word_ties_rank_in_index_order() {
    let index = fixture_index();
    assert_eq!(index.search("page"), vec!["accounts/reset-password", "shipping"]);
}

#[test]
fn test_ties_rank_by_query_word_order() {
    let index = fixture_index();
    // one occurrence each: "track" only in shipping, "forgot" only in reset-password
    assert_eq!(index.search("track forgot"), vec!["shipping", "accounts/reset-password"]);
    assert_eq!(index.search("forgot track"), vec!["accounts/reset-password", "shipping"]);
}

#[test]
fn test_hyphenated_words_stay_whole() {
    let index = fixture_index();
    assert_eq!(index.search("sign-in"), vec!["accounts/reset-password"]);
    assert!(index.search("sign").is_empty());
}

#[test]
fn test_cli_overrides_beat_manifest() {
    let options = CorpusOptions {
        stopwords: None,
        title_weight: Some(1),
    };
    let index = load_corpus(&fixture("valid"), &options).unwrap().into_index();
    let results = index.search_scored("reset password");

    assert_eq!(index.config().title_weight, 1);
    assert_eq!(score_of(&results, "accounts/reset-password"), Some(4));
}

#[test]
fn test_stopwords_override_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("stop.json");
    std::fs::write(&path, r#"["refunds"]"#).unwrap();

    let options = CorpusOptions {
        stopwords: Some(path),
        title_weight: None,
    };
    let index = load_corpus(&fixture("valid"), &options).unwrap().into_index();

    assert!(index.search("refunds").is_empty());
    // manifest list is replaced, not merged
    assert!(index.keywords().contains_key("your"));
}

#[test]
fn test_missing_corpus_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = load_corpus(&temp_dir.path().join("nope"), &CorpusOptions::default());
    assert!(result.is_err());
}
