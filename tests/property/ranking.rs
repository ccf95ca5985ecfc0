//! Scoring and ranking properties.

use helpdex::{rank_scored, score_documents, search_scored, tokenize, ScoreMap, Stopwords};
use proptest::prelude::*;

use crate::common::{build_test_index, score_of};
use crate::{corpus_strategy, word_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_ranking_is_non_increasing(
        corpus in corpus_strategy(),
        query in prop::collection::vec(word_strategy(), 0..5),
    ) {
        let index = build_test_index(&corpus);
        let results = index.search_scored(&query.join(" "));

        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_equal_scores_keep_first_seen_order(
        pairs in prop::collection::vec(("[a-z]{1,5}", 0u64..4), 0..20),
    ) {
        let scores: ScoreMap = pairs.into_iter().collect();
        let ranked = rank_scored(&scores);
        prop_assert_eq!(ranked.len(), scores.len());

        for pair in ranked.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(
                    scores.get_index_of(&pair[0].doc_id) < scores.get_index_of(&pair[1].doc_id)
                );
            }
        }
    }

    #[test]
    fn prop_ties_follow_query_word_order(
        corpus in corpus_strategy(),
        query in prop::collection::vec(word_strategy(), 1..5),
    ) {
        let index = build_test_index(&corpus);
        let query = query.join(" ");

        // Documents in the order the query words first reach them
        let mut first_seen: Vec<String> = Vec::new();
        for word in tokenize(&query, index.stopwords()) {
            if let Some(postings) = index.keywords().get(&word) {
                for doc_id in postings.keys() {
                    if !first_seen.contains(doc_id) {
                        first_seen.push(doc_id.clone());
                    }
                }
            }
        }

        let results = index.search_scored(&query);
        prop_assert_eq!(results.len(), first_seen.len());

        let position = |doc: &String| first_seen.iter().position(|d| d == doc);
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(position(&pair[0].doc_id) < position(&pair[1].doc_id));
            }
        }
    }

    #[test]
    fn prop_score_is_sum_of_counts(
        corpus in corpus_strategy(),
        query in prop::collection::vec(word_strategy(), 1..5),
    ) {
        let index = build_test_index(&corpus);
        let results = index.search_scored(&query.join(" "));

        let mut words = tokenize(&query.join(" "), &Stopwords::default());
        words.sort();
        words.dedup();

        for (doc_id, counts) in index.documents() {
            let expected: u64 = words
                .iter()
                .map(|w| counts.get(w).copied().unwrap_or(0))
                .sum();
            let expected = (expected > 0).then_some(expected);
            prop_assert_eq!(score_of(&results, doc_id), expected);
        }
    }

    #[test]
    fn prop_only_matching_documents_returned(
        corpus in corpus_strategy(),
        query in word_strategy(),
    ) {
        let index = build_test_index(&corpus);
        for result in index.search_scored(&query) {
            prop_assert!(index.documents()[&result.doc_id].contains_key(&query));
            prop_assert!(result.score > 0);
        }
    }

    #[test]
    fn prop_search_matches_free_function(
        corpus in corpus_strategy(),
        query in "[a-zA-Z ,.]{0,30}",
    ) {
        let index = build_test_index(&corpus);
        prop_assert_eq!(
            index.search_scored(&query),
            search_scored(&query, index.stopwords(), index.keywords())
        );
    }

    #[test]
    fn prop_rank_keeps_every_score(
        scores in prop::collection::btree_map("[a-z]{1,5}", 1u64..100, 0..10),
    ) {
        let scores: ScoreMap = scores.into_iter().collect();
        let ranked = rank_scored(&scores);
        let back: ScoreMap = ranked.into_iter().map(|r| (r.doc_id, r.score)).collect();
        prop_assert_eq!(back, scores);
    }
}

#[test]
fn test_score_documents_empty_selection() {
    assert!(score_documents(&Default::default()).is_empty());
}
