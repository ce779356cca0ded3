use anyhow::{bail, Result};
use colored::*;
use serde::Serialize;

use crate::catalog::glossary::{categories, filter_terms, group_by_letter, resolve_related};
use crate::catalog::Catalog;

use super::truncate;

#[derive(Serialize)]
struct TermDetail<'a> {
    term: &'a str,
    definition: &'a str,
    category: &'a str,
    related_terms: Vec<&'a str>,
}

pub fn run(
    catalog: &Catalog,
    term: Option<&str>,
    filter: Option<&str>,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    if let Some(name) = term {
        return show_term(catalog, name, json);
    }

    let filtered = filter_terms(&catalog.glossary, filter.unwrap_or(""), category);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!("{}", "Glossary".bold());
    println!("{}", "=".repeat(60));
    println!(
        "{} terms, {} categories",
        filtered.len(),
        categories(&catalog.glossary).len()
    );
    println!();

    if filtered.is_empty() {
        println!("{}", "No terms match the current filters.".yellow());
        return Ok(());
    }

    for (letter, group) in group_by_letter(&filtered) {
        println!("{}", letter.to_string().bold().blue());
        for term in group {
            println!(
                "  {} {}",
                term.term.cyan(),
                format!("[{}]", term.category).dimmed()
            );
            println!("    {}", truncate(&term.definition, 76).dimmed());
        }
        println!();
    }

    Ok(())
}

fn show_term(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let term = match catalog.term(name) {
        Some(t) => t,
        None => bail!("Term '{}' not found in the glossary", name),
    };

    // Dangling related-term names resolve to nothing and are simply absent.
    let related = resolve_related(term, &catalog.glossary);

    if json {
        let detail = TermDetail {
            term: &term.term,
            definition: &term.definition,
            category: &term.category,
            related_terms: related.iter().map(|t| t.term.as_str()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{}", term.term.bold().cyan());
    println!("{}", "=".repeat(60));
    println!("Category: {}", term.category);
    println!();
    println!("{}", term.definition);

    if !related.is_empty() {
        println!();
        println!("{}", "Related terms:".bold());
        for r in related {
            println!("  {} {}", "→".dimmed(), r.term.cyan());
        }
    }

    Ok(())
}
