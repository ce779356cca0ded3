use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Serialize)]
struct ModuleSummary<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    lessons: usize,
    estimated_hours: u32,
}

pub fn run(catalog: &Catalog, json: bool) -> Result<()> {
    let summaries: Vec<ModuleSummary> = catalog
        .modules
        .iter()
        .map(|m| ModuleSummary {
            id: &m.id,
            title: &m.title,
            description: &m.description,
            lessons: m.lesson_count(),
            estimated_hours: m.estimated_hours,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{}", "Learning Modules".bold());
    println!("{}", "=".repeat(60));
    println!(
        "{} modules, {} lessons total",
        catalog.modules.len(),
        catalog.total_lessons()
    );
    println!();

    for summary in &summaries {
        println!(
            "{} {}",
            summary.title.cyan().bold(),
            format!("({})", summary.id).dimmed()
        );
        println!("  {}", summary.description);
        println!(
            "  {}",
            format!(
                "{} lessons, ~{} hours",
                summary.lessons, summary.estimated_hours
            )
            .dimmed()
        );
        println!();
    }

    Ok(())
}
