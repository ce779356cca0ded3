use anyhow::{bail, Result};
use colored::*;

use crate::catalog::module::{Lesson, LessonBody, Module};
use crate::catalog::Catalog;

pub fn run(catalog: &Catalog, module_id: &str, lesson_id: &str, json: bool) -> Result<()> {
    let module = match catalog.module(module_id) {
        Some(m) => m,
        None => bail!("Module '{}' not found", module_id),
    };
    let lesson = match module.lesson(lesson_id) {
        Some(l) => l,
        None => bail!("Lesson '{}' not found in module '{}'", lesson_id, module_id),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(lesson)?);
        return Ok(());
    }

    print_header(module, lesson);

    match &lesson.body {
        LessonBody::Content {
            overview,
            sections,
            key_takeaways,
        } => {
            println!("{}", overview);
            println!();

            for (i, section) in sections.iter().enumerate() {
                println!(
                    "{} {}",
                    format!("{}.", i + 1).bold(),
                    section.title.bold()
                );
                println!("{}", section.body);
                println!();
            }

            if !key_takeaways.is_empty() {
                println!("{}", "Key takeaways:".bold().green());
                for takeaway in key_takeaways {
                    println!("  • {}", takeaway);
                }
            }
        }
        LessonBody::Quiz { questions } => {
            println!(
                "Quiz with {} questions. Answer with:",
                questions.len()
            );
            println!(
                "  {}",
                format!(
                    "hub quiz {} {} --answers <index,index,...>",
                    module.id, lesson.id
                )
                .cyan()
            );
            println!();

            for q in questions {
                println!("{} {}", format!("Q{}.", q.id).bold(), q.prompt);
                for (i, option) in q.options.iter().enumerate() {
                    println!("   {}) {}", i, option);
                }
                println!();
            }
        }
    }

    Ok(())
}

fn print_header(module: &Module, lesson: &Lesson) {
    println!("{}", lesson.title.bold().cyan());
    println!("{}", "=".repeat(60));
    println!(
        "Module: {} | Duration: {}",
        module.title, lesson.duration
    );
    println!();
}
