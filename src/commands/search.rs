use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::search::engine::{
    filter_by_category, result_categories, ResultPayload, SearchEngine, SearchHit, MIN_QUERY_LEN,
};

use super::truncate;

/// Display cap; the engine never truncates, presentation does.
const DISPLAY_LIMIT: usize = 10;

#[derive(Serialize)]
struct JsonHit<'a> {
    kind: String,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    score: u32,
}

pub fn run(
    catalog: &Catalog,
    query: &str,
    category: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        println!(
            "{}",
            format!("Query must be at least {} characters.", MIN_QUERY_LEN).yellow()
        );
        return Ok(());
    }

    let engine = SearchEngine::new();
    let mut hits = engine.search(query, catalog);
    let facets: Vec<String> = result_categories(&hits)
        .iter()
        .map(|c| c.to_string())
        .collect();

    if let Some(category) = category {
        hits = filter_by_category(hits, category);
    }

    let display_limit = limit.unwrap_or(DISPLAY_LIMIT);

    if json {
        let json_hits: Vec<JsonHit> = hits
            .iter()
            .take(display_limit)
            .map(|h| JsonHit {
                kind: h.kind().to_string(),
                title: h.title,
                description: h.description,
                category: h.category,
                score: h.score,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_hits)?);
        return Ok(());
    }

    println!("{}", "Search Results".bold());
    println!("{}", "=".repeat(60));
    println!("Query: \"{}\"", query);
    println!("Found: {} matches", hits.len());
    if !facets.is_empty() {
        println!("Categories: {}", facets.join(", ").dimmed());
    }
    println!();

    if hits.is_empty() {
        println!("{}", "No results found.".yellow());
        return Ok(());
    }

    for (i, hit) in hits.iter().take(display_limit).enumerate() {
        println!(
            "{}. [{:>3}] {} {}",
            (i + 1).to_string().bold(),
            hit.score,
            hit.title.cyan(),
            format!("({})", hit.kind()).dimmed()
        );
        println!("   {}", truncate(hit.description, 80).dimmed());
        println!("   {} | {}", hit.category, open_hint(hit));
        println!();
    }

    if hits.len() > display_limit {
        println!(
            "{}",
            format!("... and {} more results", hits.len() - display_limit).dimmed()
        );
    }

    Ok(())
}

/// Selection-handler contract: each result kind routes to its own view.
fn open_hint(hit: &SearchHit<'_>) -> String {
    match hit.payload {
        ResultPayload::Glossary(term) => {
            format!("hub glossary \"{}\"", term.term)
        }
        ResultPayload::Module(module) => {
            format!("hub lesson {} <lesson>", module.id)
        }
        ResultPayload::Lesson { module, lesson } => {
            format!("hub lesson {} {}", module.id, lesson.id)
        }
    }
}
