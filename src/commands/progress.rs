use std::path::Path;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::catalog::Catalog;

use super::load_state;

const BAR_WIDTH: usize = 24;

#[derive(Serialize)]
struct ProgressReport<'a> {
    overall_percent: f64,
    completed_lessons: usize,
    total_lessons: usize,
    modules: Vec<ModuleReport<'a>>,
    glossary_lookups: u32,
    perfect_quizzes: u32,
    completed_exercises: usize,
    longest_streak_days: u32,
}

#[derive(Serialize)]
struct ModuleReport<'a> {
    id: &'a str,
    title: &'a str,
    completed: usize,
    total: usize,
    percent: f64,
}

pub fn run(catalog: &Catalog, state_path: Option<&Path>, json: bool) -> Result<()> {
    let state = load_state(state_path)?;

    let modules: Vec<ModuleReport> = catalog
        .modules
        .iter()
        .map(|m| ModuleReport {
            id: &m.id,
            title: &m.title,
            completed: state.completed_in(&m.id),
            total: m.lesson_count(),
            percent: state.module_percent(m),
        })
        .collect();

    let report = ProgressReport {
        overall_percent: state.overall_percent(catalog),
        completed_lessons: state.total_completed(),
        total_lessons: catalog.total_lessons(),
        modules,
        glossary_lookups: state.glossary_lookups,
        perfect_quizzes: state.perfect_quizzes,
        completed_exercises: state.completed_exercises.len(),
        longest_streak_days: state.longest_streak(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Learning Progress".bold());
    println!("{}", "=".repeat(60));
    println!(
        "Overall: {} ({} of {} lessons)",
        format!("{:.0}%", report.overall_percent).bold(),
        report.completed_lessons,
        report.total_lessons
    );
    println!();

    for module in &report.modules {
        println!(
            "  {:<32} {} {:>3.0}% ({}/{})",
            module.title,
            bar(module.percent),
            module.percent,
            module.completed,
            module.total
        );
    }

    println!();
    println!(
        "Glossary lookups: {} | Perfect quizzes: {} | Exercises: {} | Longest streak: {} days",
        report.glossary_lookups,
        report.perfect_quizzes,
        report.completed_exercises,
        report.longest_streak_days
    );

    Ok(())
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "█".repeat(filled).green(),
        "░".repeat(BAR_WIDTH - filled).dimmed()
    )
}
