use anyhow::{anyhow, Result};
use colored::*;

use crate::catalog::exercise::{filter_exercises, Difficulty, ExerciseKind};
use crate::catalog::Catalog;

pub fn run(
    catalog: &Catalog,
    difficulty: Option<&str>,
    kind: Option<&str>,
    json: bool,
) -> Result<()> {
    let difficulty = difficulty
        .map(|d| d.parse::<Difficulty>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let kind = kind
        .map(|k| k.parse::<ExerciseKind>().map_err(|e| anyhow!(e)))
        .transpose()?;

    let filtered = filter_exercises(&catalog.exercises, difficulty, kind);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!("{}", "Interactive Exercises".bold());
    println!("{}", "=".repeat(60));
    println!("{} exercises", filtered.len());
    println!();

    if filtered.is_empty() {
        println!("{}", "No exercises match the current filters.".yellow());
        return Ok(());
    }

    for exercise in filtered {
        let difficulty_badge = match exercise.difficulty {
            Difficulty::Beginner => exercise.difficulty.to_string().green(),
            Difficulty::Intermediate => exercise.difficulty.to_string().yellow(),
            Difficulty::Advanced => exercise.difficulty.to_string().red(),
        };
        println!(
            "{} [{} | {} | {}]",
            exercise.title.cyan().bold(),
            difficulty_badge,
            exercise.kind,
            exercise.estimated_time
        );
        println!("  {}", exercise.description);
        if !exercise.skills.is_empty() {
            println!("  Skills: {}", exercise.skills.join(", ").dimmed());
        }
        println!("  Module: {}", exercise.module_id.dimmed());
        println!();
    }

    Ok(())
}
