use anyhow::{bail, Context, Result};
use colored::*;
use serde::Serialize;

use crate::catalog::module::{grade_quiz, QuizGrade};
use crate::catalog::Catalog;

#[derive(Serialize)]
struct QuizReport<'a> {
    module_id: &'a str,
    lesson_id: &'a str,
    percent: f64,
    perfect: bool,
    #[serde(flatten)]
    grade: &'a QuizGrade,
}

pub fn run(
    catalog: &Catalog,
    module_id: &str,
    lesson_id: &str,
    answers: &str,
    json: bool,
) -> Result<()> {
    let module = match catalog.module(module_id) {
        Some(m) => m,
        None => bail!("Module '{}' not found", module_id),
    };
    let lesson = match module.lesson(lesson_id) {
        Some(l) => l,
        None => bail!("Lesson '{}' not found in module '{}'", lesson_id, module_id),
    };
    if !lesson.is_quiz() {
        bail!("Lesson '{}' is not a quiz", lesson_id);
    }

    let sheet: Vec<usize> = answers
        .split(',')
        .map(|a| {
            a.trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid answer index '{}'", a.trim()))
        })
        .collect::<Result<_>>()?;

    let questions = lesson.questions();
    let grade = grade_quiz(questions, &sheet);

    if json {
        let report = QuizReport {
            module_id: &module.id,
            lesson_id: &lesson.id,
            percent: grade.percent(),
            perfect: grade.is_perfect(),
            grade: &grade,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", lesson.title.bold().cyan());
    println!("{}", "=".repeat(60));
    println!();

    for verdict in &grade.verdicts {
        let question = questions
            .iter()
            .find(|q| q.id == verdict.question_id);
        let Some(question) = question else { continue };

        let mark = if verdict.correct {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("{} {} {}", mark, format!("Q{}.", question.id).bold(), question.prompt);

        if !verdict.correct {
            match verdict.chosen {
                Some(chosen) if chosen < question.options.len() => {
                    println!("   Your answer: {}", question.options[chosen].red());
                }
                Some(chosen) => {
                    println!("   Your answer: {}", format!("option {} (out of range)", chosen).red());
                }
                None => println!("   {}", "No answer given".red()),
            }
            println!(
                "   Correct: {}",
                question.options[question.correct].green()
            );
            println!("   {}", question.explanation.dimmed());
        }
        println!();
    }

    let score_line = format!(
        "Score: {}/{} ({:.0}%)",
        grade.correct,
        grade.total,
        grade.percent()
    );
    if grade.is_perfect() {
        println!("{} {}", score_line.bold().green(), "Perfect score!".green());
    } else {
        println!("{}", score_line.bold());
    }

    Ok(())
}
