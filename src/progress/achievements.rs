//! Achievement catalog and evaluation.
//!
//! The catalog is static; unlock state and progress counts are recomputed
//! from raw [`ProgressState`] on every call and never stored.

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::progress::tracker::ProgressState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Uncommon => write!(f, "uncommon"),
            Self::Rare => write!(f, "rare"),
            Self::Epic => write!(f, "epic"),
            Self::Legendary => write!(f, "legendary"),
        }
    }
}

/// What a given achievement measures.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "criterion", rename_all = "snake_case")]
pub enum Criterion {
    /// Total lessons completed across all modules.
    LessonsCompleted,
    /// Lessons completed inside one module.
    ModuleLessons { module_id: String },
    /// Modules where every catalog lesson is completed.
    ModulesMastered,
    /// Quizzes finished with a perfect score.
    PerfectQuizzes,
    /// Glossary term detail views.
    GlossaryLookups,
    /// Longest run of consecutive study days.
    StudyStreak,
    /// Practical exercises completed.
    ExercisesCompleted,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub points: u32,
    pub rarity: Rarity,
    pub target: u32,
    pub criterion: Criterion,
}

/// One achievement with its evaluated progress. Derived per call.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedAchievement<'a> {
    #[serde(flatten)]
    pub achievement: &'a Achievement,
    pub progress: u32,
    pub unlocked: bool,
}

impl EvaluatedAchievement<'_> {
    pub fn percent(&self) -> f64 {
        if self.achievement.target == 0 {
            0.0
        } else {
            (self.progress as f64 / self.achievement.target as f64).min(1.0) * 100.0
        }
    }
}

/// Pure projection: measure each achievement's criterion against the raw
/// progress state. Neither input is mutated.
pub fn evaluate<'a>(
    state: &ProgressState,
    catalog: &Catalog,
    achievements: &'a [Achievement],
) -> Vec<EvaluatedAchievement<'a>> {
    achievements
        .iter()
        .map(|achievement| {
            let raw = measure(&achievement.criterion, state, catalog);
            EvaluatedAchievement {
                achievement,
                progress: raw.min(achievement.target),
                unlocked: raw >= achievement.target,
            }
        })
        .collect()
}

fn measure(criterion: &Criterion, state: &ProgressState, catalog: &Catalog) -> u32 {
    match criterion {
        Criterion::LessonsCompleted => state.total_completed() as u32,
        Criterion::ModuleLessons { module_id } => state.completed_in(module_id) as u32,
        Criterion::ModulesMastered => catalog
            .modules
            .iter()
            .filter(|m| state.is_module_completed(m))
            .count() as u32,
        Criterion::PerfectQuizzes => state.perfect_quizzes,
        Criterion::GlossaryLookups => state.glossary_lookups,
        Criterion::StudyStreak => state.longest_streak(),
        Criterion::ExercisesCompleted => state.completed_exercises.len() as u32,
    }
}

pub fn unlocked_count(evaluated: &[EvaluatedAchievement<'_>]) -> usize {
    evaluated.iter().filter(|e| e.unlocked).count()
}

/// Points earned from unlocked achievements only.
pub fn total_points(evaluated: &[EvaluatedAchievement<'_>]) -> u32 {
    evaluated
        .iter()
        .filter(|e| e.unlocked)
        .map(|e| e.achievement.points)
        .sum()
}

/// The standard achievement set.
pub fn builtin_achievements() -> Vec<Achievement> {
    fn achievement(
        id: &str,
        title: &str,
        description: &str,
        category: &str,
        points: u32,
        rarity: Rarity,
        target: u32,
        criterion: Criterion,
    ) -> Achievement {
        Achievement {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            points,
            rarity,
            target,
            criterion,
        }
    }

    vec![
        achievement(
            "first-lesson",
            "First Steps",
            "Complete your first lesson",
            "Learning",
            10,
            Rarity::Common,
            1,
            Criterion::LessonsCompleted,
        ),
        achievement(
            "fundamentals-master",
            "AI Fundamentals Master",
            "Complete every lesson in the AI Fundamentals module",
            "Modules",
            50,
            Rarity::Rare,
            4,
            Criterion::ModuleLessons {
                module_id: "fundamentals".to_string(),
            },
        ),
        achievement(
            "quiz-ace",
            "Quiz Ace",
            "Score 100% on any quiz",
            "Assessment",
            25,
            Rarity::Uncommon,
            1,
            Criterion::PerfectQuizzes,
        ),
        achievement(
            "coding-ninja",
            "Coding Ninja",
            "Complete 5 practical exercises",
            "Practice",
            75,
            Rarity::Rare,
            5,
            Criterion::ExercisesCompleted,
        ),
        achievement(
            "knowledge-seeker",
            "Knowledge Seeker",
            "Look up 20 terms in the glossary",
            "Exploration",
            30,
            Rarity::Uncommon,
            20,
            Criterion::GlossaryLookups,
        ),
        achievement(
            "streak-warrior",
            "Streak Warrior",
            "Study for 7 consecutive days",
            "Consistency",
            100,
            Rarity::Epic,
            7,
            Criterion::StudyStreak,
        ),
        achievement(
            "ml-expert",
            "Machine Learning Expert",
            "Complete every lesson in the ML Algorithms module",
            "Modules",
            75,
            Rarity::Rare,
            3,
            Criterion::ModuleLessons {
                module_id: "algorithms".to_string(),
            },
        ),
        achievement(
            "ai-scholar",
            "AI Scholar",
            "Master every learning module",
            "Mastery",
            200,
            Rarity::Legendary,
            5,
            Criterion::ModulesMastered,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn first_lesson_unlocks_after_any_completion() {
        let catalog = catalog::builtin().unwrap();
        let achievements = builtin_achievements();

        let mut state = ProgressState::default();
        let before = evaluate(&state, &catalog, &achievements);
        assert_eq!(unlocked_count(&before), 0);
        assert_eq!(total_points(&before), 0);

        state.complete_lesson("fundamentals", "intro-to-ai");
        let after = evaluate(&state, &catalog, &achievements);
        let first = after
            .iter()
            .find(|e| e.achievement.id == "first-lesson")
            .unwrap();
        assert!(first.unlocked);
        assert_eq!(first.progress, 1);
        assert_eq!(total_points(&after), 10);
    }

    #[test]
    fn evaluation_is_a_pure_projection() {
        let catalog = catalog::builtin().unwrap();
        let achievements = builtin_achievements();
        let mut state = ProgressState::default();
        state.record_glossary_lookup();

        let first: Vec<(u32, bool)> = evaluate(&state, &catalog, &achievements)
            .iter()
            .map(|e| (e.progress, e.unlocked))
            .collect();
        let second: Vec<(u32, bool)> = evaluate(&state, &catalog, &achievements)
            .iter()
            .map(|e| (e.progress, e.unlocked))
            .collect();
        assert_eq!(first, second);
        assert_eq!(state.glossary_lookups, 1);
    }

    #[test]
    fn progress_is_clamped_to_target() {
        let catalog = catalog::builtin().unwrap();
        let achievements = builtin_achievements();
        let mut state = ProgressState::default();
        for _ in 0..50 {
            state.record_glossary_lookup();
        }

        let evaluated = evaluate(&state, &catalog, &achievements);
        let seeker = evaluated
            .iter()
            .find(|e| e.achievement.id == "knowledge-seeker")
            .unwrap();
        assert!(seeker.unlocked);
        assert_eq!(seeker.progress, 20);
        assert_eq!(seeker.percent(), 100.0);
    }

    #[test]
    fn scholar_requires_every_module_mastered() {
        let catalog = catalog::builtin().unwrap();
        let achievements = builtin_achievements();
        let mut state = ProgressState::default();

        for module in &catalog.modules {
            for lesson in &module.lessons {
                state.complete_lesson(&module.id, &lesson.id);
            }
        }

        let evaluated = evaluate(&state, &catalog, &achievements);
        let scholar = evaluated
            .iter()
            .find(|e| e.achievement.id == "ai-scholar")
            .unwrap();
        assert!(scholar.unlocked);
        assert_eq!(scholar.progress, catalog.modules.len() as u32);
    }
}
