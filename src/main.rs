mod catalog;
mod commands;
mod progress;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hub")]
#[command(about = "AI learning hub: searchable lessons, glossary, quizzes, and achievements", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search lessons, modules, and glossary terms
    Search {
        query: String,
        #[arg(long, help = "Filter results to one category")]
        category: Option<String>,
        #[arg(long, short, help = "Limit displayed results")]
        limit: Option<usize>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Browse the glossary or show one term
    Glossary {
        term: Option<String>,
        #[arg(long, help = "Filter terms by free text")]
        filter: Option<String>,
        #[arg(long, help = "Filter terms by category")]
        category: Option<String>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List the learning modules
    Modules {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show a lesson's content or quiz questions
    Lesson {
        module: String,
        lesson: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Grade a quiz answer sheet
    Quiz {
        module: String,
        lesson: String,
        #[arg(long, help = "Comma-separated option indexes, e.g. 1,0,2")]
        answers: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List practical exercises
    Exercises {
        #[arg(long, help = "Filter by difficulty (beginner|intermediate|advanced)")]
        difficulty: Option<String>,
        #[arg(long, help = "Filter by kind (demo|coding|project)")]
        kind: Option<String>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show completion progress from a snapshot
    Progress {
        #[arg(long, help = "Progress snapshot file (JSON)")]
        state: Option<PathBuf>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show achievement status from a snapshot
    Achievements {
        #[arg(long, help = "Filter by achievement category")]
        category: Option<String>,
        #[arg(long, help = "Progress snapshot file (JSON)")]
        state: Option<PathBuf>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Check catalog integrity
    Validate {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Built once, passed explicitly everywhere. Construction fails fast on
    // integrity violations such as cross-module lesson-id collisions.
    let catalog = catalog::builtin()?;

    match cli.command {
        Commands::Search {
            query,
            category,
            limit,
            json,
        } => commands::search::run(&catalog, &query, category.as_deref(), limit, json),
        Commands::Glossary {
            term,
            filter,
            category,
            json,
        } => commands::glossary::run(
            &catalog,
            term.as_deref(),
            filter.as_deref(),
            category.as_deref(),
            json,
        ),
        Commands::Modules { json } => commands::modules::run(&catalog, json),
        Commands::Lesson {
            module,
            lesson,
            json,
        } => commands::lesson::run(&catalog, &module, &lesson, json),
        Commands::Quiz {
            module,
            lesson,
            answers,
            json,
        } => commands::quiz::run(&catalog, &module, &lesson, &answers, json),
        Commands::Exercises {
            difficulty,
            kind,
            json,
        } => commands::exercises::run(&catalog, difficulty.as_deref(), kind.as_deref(), json),
        Commands::Progress { state, json } => {
            commands::progress::run(&catalog, state.as_deref(), json)
        }
        Commands::Achievements {
            category,
            state,
            json,
        } => commands::achievements::run(&catalog, category.as_deref(), state.as_deref(), json),
        Commands::Validate { json } => commands::validate::run(&catalog, json),
    }
}
