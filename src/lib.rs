//! learning-hub library
//!
//! Searchable AI learning catalog: lessons, glossary, quizzes, and
//! achievement tracking over a static in-memory corpus.
//!
//! # Modules
//!
//! - `catalog`: Content records (modules, lessons, glossary, exercises)
//! - `search`: Relevance-ranked content search engine
//! - `progress`: Completion tracking and achievement evaluation

pub mod catalog;
pub mod progress;
pub mod search;

// Re-exports for convenience
pub use catalog::glossary::GlossaryTerm;
pub use catalog::module::{Lesson, LessonBody, Module, QuizQuestion};
pub use catalog::validate::{CatalogError, CatalogViolation};
pub use catalog::Catalog;
pub use progress::achievements::{evaluate, Achievement, EvaluatedAchievement};
pub use progress::tracker::ProgressState;
pub use search::engine::{ResultKind, ResultPayload, ScoreWeights, SearchEngine, SearchHit};
