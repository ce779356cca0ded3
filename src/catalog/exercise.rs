use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A hands-on exercise attached to a module by id.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub description: String,
    pub module_id: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub kind: ExerciseKind,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown difficulty '{}' (must be: beginner|intermediate|advanced)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExerciseKind {
    InteractiveDemo,
    HandsOnCoding,
    Project,
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InteractiveDemo => write!(f, "Interactive Demo"),
            Self::HandsOnCoding => write!(f, "Hands-on Coding"),
            Self::Project => write!(f, "Project"),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "demo" | "interactive-demo" => Ok(Self::InteractiveDemo),
            "coding" | "hands-on-coding" => Ok(Self::HandsOnCoding),
            "project" => Ok(Self::Project),
            other => Err(format!(
                "unknown exercise kind '{}' (must be: demo|coding|project)",
                other
            )),
        }
    }
}

/// Filter by optional difficulty and kind, keeping catalog order.
pub fn filter_exercises<'a>(
    exercises: &'a [Exercise],
    difficulty: Option<Difficulty>,
    kind: Option<ExerciseKind>,
) -> Vec<&'a Exercise> {
    exercises
        .iter()
        .filter(|e| difficulty.map_or(true, |d| e.difficulty == d))
        .filter(|e| kind.map_or(true, |k| e.kind == k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Exercise> {
        vec![
            Exercise {
                id: "a".to_string(),
                title: "A".to_string(),
                description: String::new(),
                module_id: "algorithms".to_string(),
                difficulty: Difficulty::Beginner,
                estimated_time: "30 min".to_string(),
                kind: ExerciseKind::InteractiveDemo,
                skills: vec![],
            },
            Exercise {
                id: "b".to_string(),
                title: "B".to_string(),
                description: String::new(),
                module_id: "llms".to_string(),
                difficulty: Difficulty::Advanced,
                estimated_time: "60 min".to_string(),
                kind: ExerciseKind::Project,
                skills: vec![],
            },
        ]
    }

    #[test]
    fn filters_compose() {
        let exercises = sample();
        assert_eq!(filter_exercises(&exercises, None, None).len(), 2);
        let advanced = filter_exercises(&exercises, Some(Difficulty::Advanced), None);
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].id, "b");
        let none = filter_exercises(
            &exercises,
            Some(Difficulty::Advanced),
            Some(ExerciseKind::InteractiveDemo),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn parses_cli_spellings() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!(
            "demo".parse::<ExerciseKind>(),
            Ok(ExerciseKind::InteractiveDemo)
        );
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
