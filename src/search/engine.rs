//! Content search engine.
//!
//! Scans glossary terms, then modules, then each module's lessons in
//! catalog order, scoring every candidate against the query. Scoring is
//! additive over independent components, so a title that is both an exact
//! token and a substring collects both bonuses. The sort is stable and
//! descending; ties keep scan order.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::catalog::glossary::GlossaryTerm;
use crate::catalog::module::{Lesson, Module};
use crate::catalog::Catalog;

/// Queries shorter than this return no results. Callers gate keystroke
/// input on the same bound; the engine enforces it regardless.
pub const MIN_QUERY_LEN: usize = 2;

/// Category label attached to module hits.
const MODULE_CATEGORY: &str = "Learning Module";

/// Description fallback for lessons without an overview (quiz lessons).
const LESSON_FALLBACK_DESCRIPTION: &str = "Lesson content";

/// Relevance weights. The defaults are inherited constants with no deeper
/// rationale than their relative ordering, so they stay tunable.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreWeights {
    pub title_exact: u32,
    pub title_contains: u32,
    pub body_contains: u32,
    pub title_word_boundary: u32,
    pub body_word_boundary: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_exact: 100,
            title_contains: 50,
            body_contains: 25,
            title_word_boundary: 30,
            body_word_boundary: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Glossary,
    Module,
    Lesson,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glossary => write!(f, "glossary"),
            Self::Module => write!(f, "module"),
            Self::Lesson => write!(f, "lesson"),
        }
    }
}

/// Borrowed reference to the record a hit came from. The selection handler
/// matches on this exhaustively to pick a navigation target.
#[derive(Debug, Clone, Copy)]
pub enum ResultPayload<'a> {
    Glossary(&'a GlossaryTerm),
    Module(&'a Module),
    Lesson {
        module: &'a Module,
        lesson: &'a Lesson,
    },
}

/// One scored search result. Constructed fresh per query; borrows the
/// catalog and never outlives it.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub score: u32,
    pub payload: ResultPayload<'a>,
}

impl<'a> SearchHit<'a> {
    pub fn kind(&self) -> ResultKind {
        match self.payload {
            ResultPayload::Glossary(_) => ResultKind::Glossary,
            ResultPayload::Module(_) => ResultKind::Module,
            ResultPayload::Lesson { .. } => ResultKind::Lesson,
        }
    }
}

/// Stateless scorer over a borrowed catalog. `search` is a pure function
/// of (query, catalog): safe to call once per keystroke, nothing carries
/// over between calls.
#[derive(Debug, Default)]
pub struct SearchEngine {
    weights: ScoreWeights,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Search the catalog, returning hits sorted by descending relevance.
    /// Queries below [`MIN_QUERY_LEN`] and queries matching nothing both
    /// yield an empty Vec.
    pub fn search<'a>(&self, query: &str, catalog: &'a Catalog) -> Vec<SearchHit<'a>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let boundary = word_boundary_matcher(query);

        let mut hits = Vec::new();

        for term in &catalog.glossary {
            if contains(&term.term, &needle)
                || contains(&term.definition, &needle)
                || contains(&term.category, &needle)
            {
                hits.push(SearchHit {
                    title: &term.term,
                    description: &term.definition,
                    category: &term.category,
                    score: self.relevance(&term.term, &term.definition, &needle, &boundary),
                    payload: ResultPayload::Glossary(term),
                });
            }
        }

        for module in &catalog.modules {
            if contains(&module.title, &needle) || contains(&module.description, &needle) {
                hits.push(SearchHit {
                    title: &module.title,
                    description: &module.description,
                    category: MODULE_CATEGORY,
                    score: self.relevance(&module.title, &module.description, &needle, &boundary),
                    payload: ResultPayload::Module(module),
                });
            }

            for lesson in &module.lessons {
                let overview = lesson.overview();
                let overview_matches =
                    overview.map_or(false, |text| contains(text, &needle));
                if contains(&lesson.title, &needle) || overview_matches {
                    hits.push(SearchHit {
                        title: &lesson.title,
                        description: overview.unwrap_or(LESSON_FALLBACK_DESCRIPTION),
                        category: &module.title,
                        score: self.relevance(
                            &lesson.title,
                            overview.unwrap_or(""),
                            &needle,
                            &boundary,
                        ),
                        payload: ResultPayload::Lesson { module, lesson },
                    });
                }
            }
        }

        // Stable sort: equal scores keep catalog scan order.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }

    /// Additive relevance over independent components. The needle is
    /// already lowercased; the boundary matcher is case-insensitive.
    fn relevance(
        &self,
        title: &str,
        body: &str,
        needle: &str,
        boundary: &Option<Regex>,
    ) -> u32 {
        let w = &self.weights;
        let title_lower = title.to_lowercase();
        let mut score = 0;

        if title_lower == *needle {
            score += w.title_exact;
        } else if title_lower.contains(needle) {
            score += w.title_contains;
        }

        if body.to_lowercase().contains(needle) {
            score += w.body_contains;
        }

        if let Some(re) = boundary {
            if re.is_match(title) {
                score += w.title_word_boundary;
            }
            if re.is_match(body) {
                score += w.body_word_boundary;
            }
        }

        score
    }
}

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// `\bquery\b`, case-insensitive, query escaped. Escaping keeps the
/// pattern well-formed for any input, so a build failure only disables the
/// boundary bonus instead of failing the search.
fn word_boundary_matcher(query: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(query)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Post-scoring facet filter: keep only hits whose category equals the
/// chosen value, preserving relative order. No re-scoring.
pub fn filter_by_category<'a>(hits: Vec<SearchHit<'a>>, category: &str) -> Vec<SearchHit<'a>> {
    hits.into_iter()
        .filter(|hit| hit.category == category)
        .collect()
}

/// Distinct categories present in a result list, in result order.
pub fn result_categories<'a>(hits: &[SearchHit<'a>]) -> Vec<&'a str> {
    let mut categories = Vec::new();
    for hit in hits {
        if !categories.contains(&hit.category) {
            categories.push(hit.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::module::{Lesson, LessonBody, Module};

    fn term(name: &str, definition: &str, category: &str) -> GlossaryTerm {
        GlossaryTerm::new(name, definition, category, &[])
    }

    fn content_lesson(id: &str, title: &str, overview: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: title.to_string(),
            duration: "10 min".to_string(),
            body: LessonBody::Content {
                overview: overview.to_string(),
                sections: vec![],
                key_takeaways: vec![],
            },
        }
    }

    fn quiz_lesson(id: &str, title: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: title.to_string(),
            duration: "15 min".to_string(),
            body: LessonBody::Quiz { questions: vec![] },
        }
    }

    fn corpus() -> Catalog {
        Catalog {
            glossary: vec![
                term("AI", "Machines performing tasks that need intelligence.", "Fundamentals"),
                term(
                    "Robotics",
                    "Building machines; modern robotics uses AI extensively.",
                    "Machine Learning",
                ),
                term("Clustering", "Grouping unlabeled data points.", "Machine Learning"),
            ],
            modules: vec![Module {
                id: "fundamentals".to_string(),
                title: "AI Fundamentals".to_string(),
                description: "Core concepts, history, and types of AI".to_string(),
                estimated_hours: 6,
                lessons: vec![
                    content_lesson(
                        "intro",
                        "Introduction to AI",
                        "Explore artificial intelligence and its history.",
                    ),
                    quiz_lesson("fundamentals-quiz", "AI Fundamentals Quiz"),
                ],
            }],
            exercises: vec![],
        }
    }

    #[test]
    fn search_is_idempotent() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        let first: Vec<(String, u32)> = engine
            .search("AI", &catalog)
            .iter()
            .map(|h| (h.title.to_string(), h.score))
            .collect();
        let second: Vec<(String, u32)> = engine
            .search("AI", &catalog)
            .iter()
            .map(|h| (h.title.to_string(), h.score))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn exact_title_outranks_body_mention() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        let hits = engine.search("AI", &catalog);

        let exact = hits.iter().find(|h| h.title == "AI").unwrap();
        let mention = hits.iter().find(|h| h.title == "Robotics").unwrap();

        // 100 exact + 30 title boundary (+ body components if present).
        assert!(exact.score >= 130);
        // 25 body substring + 15 body boundary at most.
        assert!(mention.score <= 40);
        assert_eq!(hits[0].title, "AI");
    }

    #[test]
    fn scoring_components_accumulate_independently() {
        let catalog = Catalog {
            glossary: vec![term(
                "Deep Learning",
                "Deep Learning stacks neural network layers.",
                "Fundamentals",
            )],
            modules: vec![],
            exercises: vec![],
        };
        let engine = SearchEngine::new();
        let hits = engine.search("Deep", &catalog);
        // Title substring (50) + title boundary (30) + body substring (25)
        // + body boundary (15).
        assert_eq!(hits[0].score, 120);
    }

    #[test]
    fn ties_keep_corpus_scan_order() {
        let catalog = Catalog {
            glossary: vec![
                term("Gradient Descent", "Iterative optimization method.", "Optimization"),
                term("Gradient Boosting", "Ensemble of weak learners.", "Optimization"),
            ],
            modules: vec![],
            exercises: vec![],
        };
        let engine = SearchEngine::new();
        let hits = engine.search("Gradient", &catalog);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, hits[1].score);
        assert_eq!(hits[0].title, "Gradient Descent");
        assert_eq!(hits[1].title, "Gradient Boosting");
    }

    #[test]
    fn glossary_hits_precede_equal_scored_module_hits() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        let hits = engine.search("fundamentals", &catalog);
        let glossary_pos = hits.iter().position(|h| h.kind() == ResultKind::Glossary);
        let module_pos = hits.iter().position(|h| h.kind() == ResultKind::Module);
        if let (Some(g), Some(m)) = (glossary_pos, module_pos) {
            if hits[g].score == hits[m].score {
                assert!(g < m);
            }
        }
    }

    #[test]
    fn short_queries_return_nothing() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        assert!(engine.search("a", &catalog).is_empty());
        assert!(engine.search("", &catalog).is_empty());
        assert!(engine.search("  ", &catalog).is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        assert!(engine.search("zzzqqqnotfound", &catalog).is_empty());
    }

    #[test]
    fn category_filter_is_order_preserving_subsequence() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        let all = engine.search("machine", &catalog);
        let unfiltered: Vec<&str> = all
            .iter()
            .filter(|h| h.category == "Machine Learning")
            .map(|h| h.title)
            .collect();

        let filtered = filter_by_category(engine.search("machine", &catalog), "Machine Learning");
        let filtered_titles: Vec<&str> = filtered.iter().map(|h| h.title).collect();

        assert_eq!(filtered_titles, unfiltered);
        assert!(filtered.iter().all(|h| h.category == "Machine Learning"));
    }

    #[test]
    fn word_boundary_does_not_fire_inside_words() {
        let catalog = Catalog {
            glossary: vec![term("Quote", "He said nothing more.", "Misc")],
            modules: vec![],
            exercises: vec![],
        };
        let engine = SearchEngine::new();
        let hits = engine.search("ai", &catalog);
        // "ai" inside "said" is a plain substring match of the body (25),
        // never a boundary match (no +15).
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 25);
    }

    #[test]
    fn quiz_lessons_match_by_title_with_fallback_description() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        let hits = engine.search("quiz", &catalog);
        let quiz_hit = hits
            .iter()
            .find(|h| h.kind() == ResultKind::Lesson)
            .unwrap();
        assert_eq!(quiz_hit.description, "Lesson content");
        assert_eq!(quiz_hit.category, "AI Fundamentals");
    }

    #[test]
    fn lesson_payload_carries_owning_module() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        let hits = engine.search("Introduction", &catalog);
        match hits[0].payload {
            ResultPayload::Lesson { module, lesson } => {
                assert_eq!(module.id, "fundamentals");
                assert_eq!(lesson.id, "intro");
            }
            _ => panic!("expected a lesson hit"),
        }
    }

    #[test]
    fn custom_weights_change_scores_not_membership() {
        let catalog = corpus();
        let flat = SearchEngine::with_weights(ScoreWeights {
            title_exact: 1,
            title_contains: 1,
            body_contains: 1,
            title_word_boundary: 1,
            body_word_boundary: 1,
        });
        let default = SearchEngine::new();
        let a: Vec<&str> = flat.search("AI", &catalog).iter().map(|h| h.title).collect();
        let mut b: Vec<&str> = default
            .search("AI", &catalog)
            .iter()
            .map(|h| h.title)
            .collect();
        b.sort_unstable();
        let mut a_sorted = a.clone();
        a_sorted.sort_unstable();
        assert_eq!(a_sorted, b);
    }

    #[test]
    fn result_categories_dedupe_in_order() {
        let catalog = corpus();
        let engine = SearchEngine::new();
        let hits = engine.search("machine", &catalog);
        let categories = result_categories(&hits);
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
    }
}
