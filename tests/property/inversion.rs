//! Inverted index properties.

use std::collections::BTreeMap;

use helpdex::{
    index_documents, invert, uninvert, verify_index, DocumentIndex, IndexConfig, KeywordCounts,
    Stopwords,
};
use proptest::prelude::*;

use crate::common::build_test_index;
use crate::{corpus_strategy, word_strategy};

/// Document indexes with no zero counts and no empty documents.
fn document_index_strategy() -> impl Strategy<Value = DocumentIndex> {
    let counts = prop::collection::btree_map(word_strategy(), 1u64..50, 1..8);
    prop::collection::btree_map("[a-z]{1,4}/[a-z]{1,6}", counts, 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_index_always_well_formed(corpus in corpus_strategy()) {
        let index = build_test_index(&corpus);
        prop_assert_eq!(index.verify(), Ok(()));
        prop_assert_eq!(index.documents().len(), corpus.len());
    }

    #[test]
    fn prop_round_trip(documents in document_index_strategy()) {
        prop_assert_eq!(uninvert(&invert(&documents)), documents);
    }

    #[test]
    fn prop_inverted_mirrors_document_index(documents in document_index_strategy()) {
        let keywords = invert(&documents);
        prop_assert_eq!(verify_index(&documents, &keywords), Ok(()));

        for (doc_id, counts) in &documents {
            for (keyword, count) in counts {
                prop_assert_eq!(keywords[keyword].get(doc_id), Some(count));
            }
        }
    }

    #[test]
    fn prop_zero_counts_never_stored(
        documents in document_index_strategy(),
        ghost in "[0-9]{3}",
    ) {
        let mut with_zeros = documents.clone();
        for counts in with_zeros.values_mut() {
            counts.insert(ghost.clone(), 0);
        }
        prop_assert_eq!(invert(&with_zeros), invert(&documents));
    }

    #[test]
    fn prop_indexing_is_deterministic(corpus in corpus_strategy()) {
        let first = index_documents(&corpus, &Stopwords::default());
        let second = index_documents(&corpus, &Stopwords::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_total_occurrences_preserved(documents in document_index_strategy()) {
        let keywords = invert(&documents);
        let sum = |m: &BTreeMap<String, KeywordCounts>| -> u64 {
            m.values().flat_map(|c| c.values()).sum()
        };
        prop_assert_eq!(sum(&documents), sum(&keywords));
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn prop_parallel_matches_sequential(corpus in corpus_strategy()) {
        let stopwords = Stopwords::new(["and", "the"]);
        prop_assert_eq!(
            helpdex::index_documents_parallel(&corpus, &stopwords, &IndexConfig::default()),
            index_documents(&corpus, &stopwords)
        );
    }
}
