//! CLI administration tool for favorite-sources.
//!
//! Manages favorite sources directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection and apply migrations
//! cargo run --bin admin -- db check
//!
//! # List favorite sources
//! cargo run --bin admin -- sources list --page 1 --page-size 50
//!
//! # Add a favorite source
//! cargo run --bin admin -- sources add bbc.com
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use favorite_sources::application::services::{
    FavoriteSourceCommandService, FavoriteSourceCommandServiceImpl,
};
use favorite_sources::config::mask_connection_string;
use favorite_sources::domain::commands::CreateFavoriteSourceCommand;
use favorite_sources::domain::error::FavoriteSourceError;
use favorite_sources::domain::repositories::FavoriteSourceRepository;
use favorite_sources::infrastructure::cache::NullCache;
use favorite_sources::infrastructure::persistence::PgFavoriteSourceRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing favorite-sources.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage favorite sources
    Sources {
        #[command(subcommand)]
        action: SourcesAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Favorite source subcommands.
#[derive(Subcommand)]
enum SourcesAction {
    /// List favorite sources ordered by id
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Entries per page
        #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=1000))]
        page_size: u32,
    },

    /// Add a favorite source
    Add {
        /// Source name or host (e.g., "bbc.com")
        source: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply pending migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Sources { action } => handle_sources_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// Dispatches favorite source commands.
async fn handle_sources_action(action: SourcesAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgFavoriteSourceRepository::new(Arc::new(pool.clone())));

    match action {
        SourcesAction::List { page, page_size } => list_sources(repo, page, page_size).await,
        SourcesAction::Add { source } => add_source(repo, source).await,
    }
}

/// Prints one page of favorite sources.
///
/// ```text
/// Favorite Sources
///
///   ID     Source
///   ──────────────────────────────────────
///   1      bbc.com
///   2      reuters
/// ```
async fn list_sources(
    repo: Arc<PgFavoriteSourceRepository>,
    page: u32,
    page_size: u32,
) -> Result<()> {
    println!("{}", "Favorite Sources".bright_blue().bold());
    println!();

    let offset = (i64::from(page) - 1) * i64::from(page_size);
    let sources = repo
        .list(offset, i64::from(page_size))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list favorite sources: {}", e))?;
    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count favorite sources: {}", e))?;

    if sources.is_empty() {
        println!("{}", "  No favorite sources on this page".yellow());
        println!();
        println!(
            "  Add one with: {} admin -- sources add <source>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<6} {}",
        "ID".bright_white().bold(),
        "Source".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    for source in &sources {
        println!(
            "  {:<6} {}",
            source.id.to_string().bright_black(),
            source.source.cyan()
        );
    }

    println!();
    println!(
        "  Page {} · showing {} of {}",
        page,
        sources.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Adds a favorite source through the same command service the API uses.
async fn add_source(repo: Arc<PgFavoriteSourceRepository>, source: String) -> Result<()> {
    let service = FavoriteSourceCommandServiceImpl::new(repo, Arc::new(NullCache::new()));

    match service
        .handle_create(CreateFavoriteSourceCommand::new(source))
        .await
    {
        Ok(created) => {
            println!(
                "{} {} (id {})",
                "Created".green().bold(),
                created.source.cyan(),
                created.id
            );
            Ok(())
        }
        Err(FavoriteSourceError::Duplicate { value }) => {
            println!("{} '{}' already exists", "Skipped".yellow().bold(), value);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to add favorite source: {}", e)),
    }
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Database Check".bright_blue().bold());
            println!();
            println!("  URL: {}", mask_connection_string(database_url).bright_black());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database did not answer")?;
            println!("  {} {}", "Connected:".green().bold(), version);

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run database migrations")?;
            println!("  {}", "Migrations up to date".green());
            println!();

            Ok(())
        }
    }
}
