use std::path::Path;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::progress::achievements::{
    builtin_achievements, evaluate, total_points, unlocked_count, EvaluatedAchievement, Rarity,
};

use super::load_state;

#[derive(Serialize)]
struct AchievementsReport<'a> {
    unlocked: usize,
    total: usize,
    points: u32,
    completion_rate: f64,
    achievements: Vec<&'a EvaluatedAchievement<'a>>,
}

pub fn run(
    catalog: &Catalog,
    category: Option<&str>,
    state_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let state = load_state(state_path)?;
    let definitions = builtin_achievements();
    let evaluated = evaluate(&state, catalog, &definitions);

    let unlocked = unlocked_count(&evaluated);
    let points = total_points(&evaluated);
    let completion_rate = if evaluated.is_empty() {
        0.0
    } else {
        (unlocked as f64 / evaluated.len() as f64) * 100.0
    };

    let shown: Vec<&EvaluatedAchievement> = evaluated
        .iter()
        .filter(|e| category.map_or(true, |c| e.achievement.category == c))
        .collect();

    if json {
        let report = AchievementsReport {
            unlocked,
            total: evaluated.len(),
            points,
            completion_rate,
            achievements: shown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Achievements".bold());
    println!("{}", "=".repeat(60));
    println!(
        "Unlocked: {}/{} | Points: {} | Completion: {:.0}%",
        unlocked,
        evaluated.len(),
        points,
        completion_rate
    );
    println!();

    if shown.is_empty() {
        println!("{}", "No achievements in this category.".yellow());
        return Ok(());
    }

    for entry in shown {
        let a = entry.achievement;
        let mark = if entry.unlocked {
            "✓".green().bold()
        } else {
            "·".dimmed()
        };
        println!(
            "{} {} {} [{}] {} pts",
            mark,
            a.title.cyan().bold(),
            rarity_badge(a.rarity),
            a.category,
            a.points
        );
        println!("    {}", a.description.dimmed());
        println!(
            "    Progress: {}/{} ({:.0}%)",
            entry.progress,
            a.target,
            entry.percent()
        );
        println!();
    }

    Ok(())
}

fn rarity_badge(rarity: Rarity) -> ColoredString {
    let label = rarity.to_string();
    match rarity {
        Rarity::Common => label.normal(),
        Rarity::Uncommon => label.green(),
        Rarity::Rare => label.blue(),
        Rarity::Epic => label.magenta(),
        Rarity::Legendary => label.yellow(),
    }
}
