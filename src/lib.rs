//! Keyword-frequency indexing and relevance ranking for structured help articles.
//!
//! Articles arrive as a title plus a tree of content nodes. Each one is
//! flattened to plain text (title repeated five times up front), tokenized,
//! and counted into a per-document keyword index. That index is transposed
//! into an inverted index, which answers free-text queries by summing each
//! document's counts for the query words.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌────────────┐   ┌─────────────┐
//! │ flatten.rs │──▶│ tokenizer.rs│──▶│  index.rs  │──▶│ inverted.rs │
//! │ (title ×5, │   │ (separators,│   │ (counts per│   │ (keyword →  │
//! │  node tree)│   │  stopwords) │   │  document) │   │  doc → n)   │
//! └────────────┘   └─────────────┘   └────────────┘   └─────────────┘
//!                         │                                  │
//!                         ▼                                  ▼
//!                  ┌─────────────┐                    ┌─────────────┐
//!                  │  search.rs  │───────────────────▶│ scoring.rs  │
//!                  │ (select)    │                    │ (sum, rank) │
//!                  └─────────────┘                    └─────────────┘
//! ```
//!
//! Indexing and querying share one tokenizer, so scores are comparable. There
//! is no persisted format: [`SearchIndex`] is rebuilt wholesale from the full
//! corpus whenever the corpus changes.
//!
//! # Usage
//!
//! ```
//! use helpdex::{ContentNode, Corpus, Document, IndexConfig, SearchIndex, Stopwords};
//!
//! let mut corpus = Corpus::new();
//! corpus.insert(
//!     "refunds".to_string(),
//!     Document::new(
//!         "Refunds",
//!         vec![ContentNode::branch(
//!             "p",
//!             vec![ContentNode::text("How refunds reach your card.")],
//!         )],
//!     ),
//! );
//!
//! let index = SearchIndex::build(&corpus, Stopwords::new(["how", "your"]), IndexConfig::default());
//! assert_eq!(index.search("card refunds"), vec!["refunds"]);
//! ```

// Module declarations
pub mod build;
mod config;
mod error;
mod flatten;
mod index;
mod inverted;
mod scoring;
mod search;
mod stopwords;
#[doc(hidden)]
pub mod testing;
mod tokenizer;
mod types;
mod verify;

// Re-exports for public API
pub use config::IndexConfig;
pub use error::{IndexError, ShapeError};
pub use flatten::{
    flatten_document, flatten_document_weighted, flatten_node, weighted_title,
    weighted_title_with, TITLE_WEIGHT,
};
pub use index::{
    count_keywords, count_keywords_with, index_corpus, index_documents, index_documents_with,
    parse_corpus, SearchIndex,
};
#[cfg(feature = "parallel")]
pub use index::index_documents_parallel;
pub use inverted::{invert, uninvert};
pub use scoring::{compare_ranked, rank, rank_scored, score_documents};
pub use search::{search, search_scored, select_keyword_entries};
pub use stopwords::Stopwords;
pub use tokenizer::{is_separator, strip_separators, tokenize};
pub use types::{
    ContentNode, Corpus, Document, DocumentIndex, IndexStats, InvertedIndex, KeywordCounts,
    RankedDocument, ScoreMap, SelectedEntries, TEXT_ELEMENT,
};
pub use verify::{verify_index, IndexSide, InvariantError};
