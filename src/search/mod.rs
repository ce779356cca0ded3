//! Relevance-ranked search over the content catalog.
//!
//! Fixed-weight substring and word-boundary scoring; the corpus is small
//! and in memory, so there is no index and no tokenization.

pub mod engine;

pub use engine::{
    filter_by_category, result_categories, ResultKind, ResultPayload, ScoreWeights, SearchEngine,
    SearchHit, MIN_QUERY_LEN,
};
