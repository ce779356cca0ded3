//! Content catalog: the static corpus searched and studied over.
//!
//! The catalog is constructed once (see [`builtin`]) and passed explicitly
//! into search, progress, and achievement code; there is no ambient global.

pub mod builtin;
pub mod exercise;
pub mod glossary;
pub mod module;
pub mod validate;

pub use builtin::builtin;
pub use exercise::{Difficulty, Exercise, ExerciseKind};
pub use glossary::GlossaryTerm;
pub use module::{Lesson, LessonBody, Module, QuizQuestion, Section};
pub use validate::{CatalogError, CatalogViolation};

use serde::Serialize;

/// The full content corpus: glossary terms, learning modules (owning their
/// lessons), and practical exercises.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub glossary: Vec<GlossaryTerm>,
    pub modules: Vec<Module>,
    pub exercises: Vec<Exercise>,
}

impl Catalog {
    /// Build a catalog, rejecting it if a fatal integrity violation is
    /// present (duplicate module ids, cross-module lesson-id collisions,
    /// duplicate glossary terms, out-of-range quiz answers).
    pub fn new(
        glossary: Vec<GlossaryTerm>,
        modules: Vec<Module>,
        exercises: Vec<Exercise>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            glossary,
            modules,
            exercises,
        };
        validate::ensure_valid(&catalog)?;
        Ok(catalog)
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Case-insensitive glossary lookup by display name.
    pub fn term(&self, name: &str) -> Option<&GlossaryTerm> {
        self.glossary
            .iter()
            .find(|t| t.term.eq_ignore_ascii_case(name))
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        let catalog = builtin().expect("builtin catalog must be valid");
        assert!(!catalog.glossary.is_empty());
        assert!(!catalog.modules.is_empty());
        assert!(!catalog.exercises.is_empty());
    }

    #[test]
    fn term_lookup_is_case_insensitive() {
        let catalog = builtin().unwrap();
        assert!(catalog.term("deep learning").is_some());
        assert!(catalog.term("Deep Learning").is_some());
        assert!(catalog.term("no such term").is_none());
    }

    #[test]
    fn total_lessons_sums_all_modules() {
        let catalog = builtin().unwrap();
        let by_hand: usize = catalog.modules.iter().map(|m| m.lessons.len()).sum();
        assert_eq!(catalog.total_lessons(), by_hand);
    }
}
