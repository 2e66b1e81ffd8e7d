//! Gnawer main entry point
//!
//! This is the command-line interface for the Gnawer news collector.

use clap::{Parser, Subcommand};
use gnawer::collector::{run_update, Collector};
use gnawer::config::{load_config, validate, Config};
use gnawer::model::{StoredArticle, Task, TaskKind};
use gnawer::storage::{open_storage, SqliteStorage, Storage};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Gnawer: a small news gnawer
///
/// Gnawer collects articles from RSS/Atom feeds and from HTML listing pages
/// described by CSS selectors, and keeps them in a local database for
/// keyword search.
#[derive(Parser, Debug)]
#[command(name = "gnawer")]
#[command(version)]
#[command(about = "Collects news articles from feeds and web pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Path to the article database (overrides the configuration file)
    #[arg(long, value_name = "PATH", global = true)]
    database: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task, or replace the task with the same name
    Add {
        /// Task name
        #[arg(short, long)]
        name: String,

        /// Task kind: HTML or RSS
        #[arg(short, long, default_value = "HTML")]
        kind: String,

        /// Listing page or feed URL
        #[arg(short, long)]
        url: String,

        /// CSS selector for article links (HTML tasks)
        #[arg(short, long, default_value = "")]
        link: String,

        /// CSS selector for the article title (HTML tasks)
        #[arg(short, long, default_value = "")]
        title: String,

        /// CSS selector for the article body (HTML tasks)
        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// List every task
    Tasks,

    /// Collect articles for every task
    Update,

    /// Show stored articles whose title contains every keyword
    News {
        /// Keywords to search for in titles
        keywords: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match resolve_config(cli.config.as_deref(), cli.database.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    tracing::debug!("Database: {}", config.storage.database_path);

    let result = match cli.command {
        Command::Add {
            name,
            kind,
            url,
            link,
            title,
            content,
        } => handle_add(&config, name, &kind, url, link, title, content),
        Command::Tasks => handle_tasks(&config),
        Command::Update => handle_update(&config).await,
        Command::News { keywords } => handle_news(&config, &keywords),
    };

    if let Err(e) = &result {
        tracing::error!("{}", e);
    }
    result
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gnawer=info,warn"),
            1 => EnvFilter::new("gnawer=debug,info"),
            2 => EnvFilter::new("gnawer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given and applies overrides
fn resolve_config(
    path: Option<&Path>,
    database: Option<&Path>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(database) = database {
        config.storage.database_path = database.to_string_lossy().into_owned();
    }

    validate(&config)?;
    Ok(config)
}

fn open(config: &Config) -> Result<SqliteStorage, Box<dyn std::error::Error>> {
    Ok(open_storage(Path::new(&config.storage.database_path))?)
}

/// Handles `add`: validates the task and upserts it by name
fn handle_add(
    config: &Config,
    name: String,
    kind: &str,
    url: String,
    link: String,
    title: String,
    content: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind: TaskKind = kind.parse()?;
    let task = Task {
        name,
        kind,
        url,
        link,
        title,
        content,
    };
    task.validate()?;

    let mut storage = open(config)?;
    let existed = storage.get_task(&task.name)?.is_some();
    storage.upsert_task(&task)?;
    storage.close()?;

    tracing::debug!("Stored task {}", task);
    if existed {
        println!("Task \"{}\" updated.", task.name);
    } else {
        println!("Task \"{}\" added.", task.name);
    }

    Ok(())
}

/// Handles `tasks`: prints every stored task
fn handle_tasks(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let storage = open(config)?;
    let tasks = storage.list_tasks()?;
    storage.close()?;

    if tasks.is_empty() {
        println!("No tasks.");
    }
    for task in &tasks {
        println!("{}", task);
    }

    Ok(())
}

/// Handles `update`: collects every task and stores the articles
async fn handle_update(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let collector = Collector::new(config)?;
    let mut storage = open(config)?;

    let report = run_update(&mut storage, &collector).await?;
    storage.close()?;

    for article in &report.saved {
        println!("Title: {}; Link: {}", article.title, article.url);
    }

    tracing::info!(
        "Update finished: {} tasks, {} failed, {} articles saved, {} articles in store",
        report.tasks_processed,
        report.failed_tasks.len(),
        report.saved.len(),
        report.articles_in_store
    );

    Ok(())
}

/// Handles `news`: prints stored articles matching every keyword
fn handle_news(config: &Config, keywords: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let storage = open(config)?;
    let articles = storage.list_stored_articles(keywords)?;
    storage.close()?;

    if !keywords.is_empty() {
        println!("Search: {}", keywords.join(" "));
    }
    for stored in &articles {
        println!("{}\n", format_news_item(stored));
    }

    Ok(())
}

fn format_news_item(stored: &StoredArticle) -> String {
    format!(
        "Title: {}\nFirst seen: {}\n{}",
        stored.article.title,
        stored.collected_at.format("%Y-%m-%d %H:%M UTC"),
        stored.article.content
    )
}
