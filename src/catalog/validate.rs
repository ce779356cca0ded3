//! Catalog integrity checks.
//!
//! Progress tracking keys on plain lesson ids, so a lesson id reused across
//! modules would cross-contaminate completion state. That makes global
//! lesson-id uniqueness a fatal, fail-fast invariant at construction time.
//! Dangling related-term references are tolerated: rendering simply omits
//! the link.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::Catalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum CatalogViolation {
    DuplicateModuleId {
        module_id: String,
    },
    DuplicateLessonId {
        lesson_id: String,
        first_module: String,
        second_module: String,
    },
    DuplicateLessonInModule {
        module_id: String,
        lesson_id: String,
    },
    DuplicateTerm {
        term: String,
    },
    QuizAnswerOutOfRange {
        module_id: String,
        lesson_id: String,
        question_id: u32,
    },
    EmptyModule {
        module_id: String,
    },
    DanglingRelatedTerm {
        term: String,
        missing: String,
    },
    UnknownExerciseModule {
        exercise_id: String,
        module_id: String,
    },
}

impl CatalogViolation {
    /// Fatal violations reject the catalog; the rest are warnings.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DanglingRelatedTerm { .. })
    }
}

impl fmt::Display for CatalogViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateModuleId { module_id } => {
                write!(f, "Duplicate module id '{}'", module_id)
            }
            Self::DuplicateLessonId {
                lesson_id,
                first_module,
                second_module,
            } => write!(
                f,
                "Lesson id '{}' reused across modules '{}' and '{}'",
                lesson_id, first_module, second_module
            ),
            Self::DuplicateLessonInModule {
                module_id,
                lesson_id,
            } => write!(
                f,
                "Lesson id '{}' appears twice in module '{}'",
                lesson_id, module_id
            ),
            Self::DuplicateTerm { term } => write!(f, "Duplicate glossary term '{}'", term),
            Self::QuizAnswerOutOfRange {
                module_id,
                lesson_id,
                question_id,
            } => write!(
                f,
                "Question {} in lesson '{}/{}' has a correct-answer index outside its options",
                question_id, module_id, lesson_id
            ),
            Self::EmptyModule { module_id } => {
                write!(f, "Module '{}' has no lessons", module_id)
            }
            Self::DanglingRelatedTerm { term, missing } => write!(
                f,
                "Term '{}' references unknown related term '{}'",
                term, missing
            ),
            Self::UnknownExerciseModule {
                exercise_id,
                module_id,
            } => write!(
                f,
                "Exercise '{}' references unknown module '{}'",
                exercise_id, module_id
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog: {}", format_violations(.0))]
    Invalid(Vec<CatalogViolation>),
}

fn format_violations(violations: &[CatalogViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Scan the whole catalog and report every violation found.
pub fn validate(catalog: &Catalog) -> Vec<CatalogViolation> {
    let mut violations = Vec::new();

    let mut module_ids: HashMap<&str, usize> = HashMap::new();
    for module in &catalog.modules {
        *module_ids.entry(module.id.as_str()).or_insert(0) += 1;
    }
    for (id, count) in &module_ids {
        if *count > 1 {
            violations.push(CatalogViolation::DuplicateModuleId {
                module_id: id.to_string(),
            });
        }
    }

    // Lesson ids must be globally unique (progress keys on the bare id).
    let mut lesson_owner: HashMap<&str, &str> = HashMap::new();
    for module in &catalog.modules {
        if module.lessons.is_empty() {
            violations.push(CatalogViolation::EmptyModule {
                module_id: module.id.clone(),
            });
        }
        for lesson in &module.lessons {
            match lesson_owner.get(lesson.id.as_str()) {
                Some(owner) if *owner == module.id => {
                    violations.push(CatalogViolation::DuplicateLessonInModule {
                        module_id: module.id.clone(),
                        lesson_id: lesson.id.clone(),
                    });
                }
                Some(owner) => {
                    violations.push(CatalogViolation::DuplicateLessonId {
                        lesson_id: lesson.id.clone(),
                        first_module: owner.to_string(),
                        second_module: module.id.clone(),
                    });
                }
                None => {
                    lesson_owner.insert(lesson.id.as_str(), module.id.as_str());
                }
            }

            for question in lesson.questions() {
                if question.correct >= question.options.len() {
                    violations.push(CatalogViolation::QuizAnswerOutOfRange {
                        module_id: module.id.clone(),
                        lesson_id: lesson.id.clone(),
                        question_id: question.id,
                    });
                }
            }
        }
    }

    let mut term_counts: HashMap<&str, usize> = HashMap::new();
    for term in &catalog.glossary {
        *term_counts.entry(term.term.as_str()).or_insert(0) += 1;
    }
    for (name, count) in &term_counts {
        if *count > 1 {
            violations.push(CatalogViolation::DuplicateTerm {
                term: name.to_string(),
            });
        }
    }

    for term in &catalog.glossary {
        for related in &term.related_terms {
            if !catalog.glossary.iter().any(|t| &t.term == related) {
                violations.push(CatalogViolation::DanglingRelatedTerm {
                    term: term.term.clone(),
                    missing: related.clone(),
                });
            }
        }
    }

    for exercise in &catalog.exercises {
        if catalog.module(&exercise.module_id).is_none() {
            violations.push(CatalogViolation::UnknownExerciseModule {
                exercise_id: exercise.id.clone(),
                module_id: exercise.module_id.clone(),
            });
        }
    }

    violations
}

/// Reject the catalog if any fatal violation is present.
pub fn ensure_valid(catalog: &Catalog) -> Result<(), CatalogError> {
    let fatal: Vec<CatalogViolation> = validate(catalog)
        .into_iter()
        .filter(|v| v.is_fatal())
        .collect();
    if fatal.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Invalid(fatal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::glossary::GlossaryTerm;
    use crate::catalog::module::{Lesson, LessonBody, Module, QuizQuestion};

    fn content_lesson(id: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: id.to_string(),
            duration: "10 min".to_string(),
            body: LessonBody::Content {
                overview: "overview".to_string(),
                sections: vec![],
                key_takeaways: vec![],
            },
        }
    }

    fn module(id: &str, lessons: Vec<Lesson>) -> Module {
        Module {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            estimated_hours: 1,
            lessons,
        }
    }

    fn bare_catalog(modules: Vec<Module>, glossary: Vec<GlossaryTerm>) -> Catalog {
        Catalog {
            glossary,
            modules,
            exercises: vec![],
        }
    }

    #[test]
    fn cross_module_lesson_id_collision_is_fatal() {
        let catalog = bare_catalog(
            vec![
                module("first", vec![content_lesson("intro")]),
                module("second", vec![content_lesson("intro")]),
            ],
            vec![],
        );

        let violations = validate(&catalog);
        assert!(violations.iter().any(|v| matches!(
            v,
            CatalogViolation::DuplicateLessonId { lesson_id, .. } if lesson_id == "intro"
        )));
        assert!(ensure_valid(&catalog).is_err());
    }

    #[test]
    fn dangling_related_term_is_tolerated() {
        let catalog = bare_catalog(
            vec![module("m", vec![content_lesson("l")])],
            vec![GlossaryTerm::new("AI", "def", "Fundamentals", &["Missing"])],
        );

        let violations = validate(&catalog);
        assert_eq!(violations.len(), 1);
        assert!(!violations[0].is_fatal());
        assert!(ensure_valid(&catalog).is_ok());
    }

    #[test]
    fn out_of_range_quiz_answer_is_fatal() {
        let quiz = Lesson {
            id: "quiz".to_string(),
            title: "Quiz".to_string(),
            duration: "15 min".to_string(),
            body: LessonBody::Quiz {
                questions: vec![QuizQuestion {
                    id: 1,
                    prompt: "?".to_string(),
                    options: vec!["a".to_string()],
                    correct: 3,
                    explanation: String::new(),
                }],
            },
        };
        let catalog = bare_catalog(vec![module("m", vec![quiz])], vec![]);
        assert!(ensure_valid(&catalog).is_err());
    }

    #[test]
    fn clean_catalog_validates() {
        let catalog = bare_catalog(
            vec![module("m", vec![content_lesson("a"), content_lesson("b")])],
            vec![GlossaryTerm::new("AI", "def", "Fundamentals", &[])],
        );
        assert!(validate(&catalog).is_empty());
        assert!(ensure_valid(&catalog).is_ok());
    }
}
