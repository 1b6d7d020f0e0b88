//! Deskquery CLI - ask plain-English questions about the company database

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use deskquery::chat;
use deskquery::config::{self, DeskqueryConfig};
use deskquery::query::EXAMPLE_QUERIES;
use deskquery::ui;
use deskquery::{OutputFormat, QueryEngine, SqliteStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "deskquery")]
#[command(version)]
#[command(about = "Ask plain-English questions about employees and departments")]
#[command(long_about = r#"
Deskquery answers a handful of English sentences from a small company
database (employees and departments) kept in SQLite.

Example usage:
  deskquery chat
  deskquery ask "Who is the manager of the Engineering department?"
  deskquery --format table ask "List all employees hired after 2021-01-01"
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (default: company.db)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Output format: text, table, json
    #[arg(short, long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Path to the config file (default: deskquery.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (the default)
    Chat,

    /// Answer a single sentence
    Ask {
        /// The question, e.g. "Who is the manager of the Sales department?"
        #[arg(required = true, num_args = 1..)]
        sentence: Vec<String>,
    },

    /// List the sentences Deskquery understands
    Examples,

    /// Show row counts for each table
    Stats,

    /// Write a starter deskquery.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: deskquery::Error| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps answers on stdout clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);

    // CLI flags override the config file
    let load = || -> anyhow::Result<DeskqueryConfig> {
        Ok(config::load_config(Some(&config_path))?.unwrap_or_default())
    };
    let resolve = || -> anyhow::Result<(PathBuf, OutputFormat)> {
        let settings = load()?;
        Ok((
            settings.database_path(cli.database.as_deref()),
            settings.output_format(cli.format),
        ))
    };

    match cli.command.as_ref().unwrap_or(&Commands::Chat) {
        Commands::Init { force } => {
            config::write_config(&config_path, &DeskqueryConfig::starter(), *force)?;
            ui::success(&format!("Wrote {}", config_path.display()));
        }

        Commands::Chat => {
            let (database, format) = resolve()?;
            let store = open_store(&database)?;
            run_chat(&store, format, load()?.is_quiet())?;
        }

        Commands::Ask { sentence } => {
            let (database, format) = resolve()?;
            let store = open_store(&database)?;
            let engine = QueryEngine::new(&store);
            let answer = engine.answer(&sentence.join(" "));
            ui::answer(&answer.render(format), answer.is_success());
        }

        Commands::Examples => {
            ui::section("Example Queries:");
            for example in EXAMPLE_QUERIES {
                ui::bullet(example);
            }
        }

        Commands::Stats => {
            let (database, format) = resolve()?;
            let store = open_store(&database)?;
            let stats = store.stats()?;

            match format {
                OutputFormat::Json => println!(
                    "{:#}",
                    serde_json::json!({
                        "database": database.display().to_string(),
                        "employees": stats.employees,
                        "departments": stats.departments,
                    })
                ),
                OutputFormat::Table => {
                    ui::info("Database", &database.display().to_string());
                    println!("{}", ui::stats_table(&stats));
                }
                OutputFormat::Text => {
                    println!("{} Deskquery Statistics ({})", ui::Icons::STATS, database.display());
                    println!("------------------------------------");
                    println!("{}", stats);
                }
            }
        }
    }

    Ok(())
}

fn open_store(database: &std::path::Path) -> anyhow::Result<SqliteStore> {
    config::ensure_db_dir(database)?;
    let store = SqliteStore::open(database)?;
    tracing::debug!("Using database {}", database.display());
    Ok(store)
}

fn run_chat(store: &SqliteStore, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        ui::banner("SQLite Database Chat Assistant", "Type a question, or 'quit' to leave.");
        ui::header("Example Queries:");
        for example in EXAMPLE_QUERIES {
            ui::bullet(example);
        }
        println!();
    }

    let engine = QueryEngine::new(store);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    chat::run_session(&engine, format, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
