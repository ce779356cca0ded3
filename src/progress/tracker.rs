use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::module::Module;
use crate::catalog::Catalog;

/// Raw user progress. Serializable so a caller can hand the CLI a snapshot;
/// the crate itself never writes this anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressState {
    /// Per-module completion, keyed by module id.
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleProgress>,
    #[serde(default)]
    pub glossary_lookups: u32,
    #[serde(default)]
    pub perfect_quizzes: u32,
    #[serde(default)]
    pub completed_exercises: BTreeSet<String>,
    /// Days with any study activity; drives streak achievements.
    #[serde(default)]
    pub study_days: BTreeSet<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleProgress {
    #[serde(default)]
    pub completed_lessons: BTreeSet<String>,
}

impl ProgressState {
    /// Record a lesson completion. Re-completing is a no-op.
    pub fn complete_lesson(&mut self, module_id: &str, lesson_id: &str) {
        self.modules
            .entry(module_id.to_string())
            .or_default()
            .completed_lessons
            .insert(lesson_id.to_string());
    }

    pub fn is_lesson_completed(&self, module_id: &str, lesson_id: &str) -> bool {
        self.modules
            .get(module_id)
            .map_or(false, |m| m.completed_lessons.contains(lesson_id))
    }

    pub fn completed_in(&self, module_id: &str) -> usize {
        self.modules
            .get(module_id)
            .map_or(0, |m| m.completed_lessons.len())
    }

    /// Lessons completed across every module.
    pub fn total_completed(&self) -> usize {
        self.modules
            .values()
            .map(|m| m.completed_lessons.len())
            .sum()
    }

    /// True when every lesson the catalog lists for the module is done.
    pub fn is_module_completed(&self, module: &Module) -> bool {
        !module.lessons.is_empty()
            && module
                .lessons
                .iter()
                .all(|l| self.is_lesson_completed(&module.id, &l.id))
    }

    pub fn module_percent(&self, module: &Module) -> f64 {
        percent(self.completed_in(&module.id), module.lessons.len())
    }

    pub fn overall_percent(&self, catalog: &Catalog) -> f64 {
        percent(self.total_completed(), catalog.total_lessons())
    }

    pub fn record_glossary_lookup(&mut self) {
        self.glossary_lookups += 1;
    }

    pub fn record_perfect_quiz(&mut self) {
        self.perfect_quizzes += 1;
    }

    pub fn record_exercise(&mut self, exercise_id: &str) {
        self.completed_exercises.insert(exercise_id.to_string());
    }

    pub fn record_study_day(&mut self, day: NaiveDate) {
        self.study_days.insert(day);
    }

    /// Longest run of consecutive study days.
    pub fn longest_streak(&self) -> u32 {
        let mut longest = 0u32;
        let mut current = 0u32;
        let mut previous: Option<NaiveDate> = None;

        for &day in &self.study_days {
            current = match previous {
                Some(prev) if day == prev + chrono::Duration::days(1) => current + 1,
                _ => 1,
            };
            longest = longest.max(current);
            previous = Some(day);
        }

        longest
    }
}

fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (done as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn completing_twice_counts_once() {
        let mut state = ProgressState::default();
        state.complete_lesson("fundamentals", "intro-to-ai");
        state.complete_lesson("fundamentals", "intro-to-ai");
        assert_eq!(state.completed_in("fundamentals"), 1);
        assert_eq!(state.total_completed(), 1);
    }

    #[test]
    fn percentages_track_the_catalog() {
        let catalog = catalog::builtin().unwrap();
        let fundamentals = catalog.module("fundamentals").unwrap();

        let mut state = ProgressState::default();
        assert_eq!(state.module_percent(fundamentals), 0.0);

        for lesson in &fundamentals.lessons {
            state.complete_lesson("fundamentals", &lesson.id);
        }
        assert_eq!(state.module_percent(fundamentals), 100.0);
        assert!(state.is_module_completed(fundamentals));
        assert!(state.overall_percent(&catalog) < 100.0);
    }

    #[test]
    fn streak_counts_consecutive_days_only() {
        let mut state = ProgressState::default();
        for d in ["2026-08-01", "2026-08-02", "2026-08-03", "2026-08-10", "2026-08-11"] {
            state.record_study_day(day(d));
        }
        assert_eq!(state.longest_streak(), 3);

        state.record_study_day(day("2026-08-12"));
        state.record_study_day(day("2026-08-13"));
        assert_eq!(state.longest_streak(), 4);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut state = ProgressState::default();
        state.complete_lesson("fundamentals", "intro-to-ai");
        state.record_glossary_lookup();
        state.record_study_day(day("2026-08-20"));

        let json = serde_json::to_string(&state).unwrap();
        let restored: ProgressState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.total_completed(), 1);
        assert_eq!(restored.glossary_lookups, 1);
        assert_eq!(restored.longest_streak(), 1);
    }

    #[test]
    fn missing_fields_default_when_deserializing() {
        let state: ProgressState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.total_completed(), 0);
        assert_eq!(state.glossary_lookups, 0);
    }
}
