use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::catalog::validate::{validate, CatalogViolation};
use crate::catalog::Catalog;

#[derive(Serialize)]
struct ValidationReport {
    fatal: usize,
    warnings: usize,
    violations: Vec<CatalogViolation>,
}

pub fn run(catalog: &Catalog, json: bool) -> Result<()> {
    let violations = validate(catalog);
    let fatal = violations.iter().filter(|v| v.is_fatal()).count();
    let warnings = violations.len() - fatal;

    if json {
        let report = ValidationReport {
            fatal,
            warnings,
            violations: violations.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", "Catalog Validation".bold());
        println!("{}", "=".repeat(60));
        println!(
            "Modules: {} | Lessons: {} | Terms: {} | Exercises: {}",
            catalog.modules.len(),
            catalog.total_lessons(),
            catalog.glossary.len(),
            catalog.exercises.len()
        );
        println!();

        if violations.is_empty() {
            println!("{}", "No violations found.".green());
        } else {
            for violation in &violations {
                let marker = if violation.is_fatal() {
                    "ERROR".red().bold()
                } else {
                    "WARN".yellow()
                };
                println!("  {} {}", marker, violation);
            }
            println!();
            println!("{} fatal, {} warnings", fatal, warnings);
        }
    }

    if fatal > 0 {
        std::process::exit(1);
    }

    Ok(())
}
