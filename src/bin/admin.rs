//! CLI administration tool for blog-dashboard.
//!
//! Provides out-of-band commands for inspecting view statistics, listing
//! posts, and loading the UK election dataset without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Overall totals
//! cargo run --bin admin -- stats
//!
//! # Views for the last two weeks
//! cargo run --bin admin -- views --days 14
//!
//! # List posts
//! cargo run --bin admin -- posts
//!
//! # Import the UK dataset (JSON array of records)
//! cargo run --bin admin -- uk-data import data/uk_data.json --replace
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string

use blog_dashboard::config::DatabaseConfig;
use blog_dashboard::domain::entities::UkData;
use blog_dashboard::domain::repositories::UkDataRepository;
use blog_dashboard::infrastructure::persistence::{
    PgPostRepository, PgUkDataRepository, PgViewRepository,
};
use blog_dashboard::prelude::{PostService, ViewService};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing blog-dashboard.
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
    /// Show overall statistics
    Stats,

    /// Show recent daily views
    Views {
        /// Number of most recent days to show
        #[arg(short, long, default_value_t = 7)]
        days: i64,
    },

    /// List blog posts
    Posts,

    /// Manage the UK election dataset
    UkData {
        #[command(subcommand)]
        action: UkDataAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// UK dataset subcommands.
#[derive(Subcommand)]
enum UkDataAction {
    /// Import rows from a JSON array of records
    Import {
        /// Path to the JSON file
        file: PathBuf,

        /// Delete existing rows before importing
        #[arg(long)]
        replace: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let db = DatabaseConfig::from_env()?;
    let pool = PgPool::connect(&db.url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Views { days } => handle_views(&pool, days).await?,
        Commands::Posts => handle_posts(&pool).await?,
        Commands::UkData { action } => handle_uk_data_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Number of posts
/// - Days tracked and total views
/// - Total first visits (unique visitors summed per day)
/// - Rows in the UK dataset
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let posts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
        .fetch_one(pool)
        .await?;

    let (days_count, total_views): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(views), 0)::BIGINT FROM days")
            .fetch_one(pool)
            .await?;

    let visitors_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ip_views")
        .fetch_one(pool)
        .await?;

    let uk_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM uk_data")
        .fetch_one(pool)
        .await?;

    println!(
        "  Posts:           {}",
        posts_count.to_string().bright_green().bold()
    );
    println!(
        "  Days tracked:    {}",
        days_count.to_string().bright_green().bold()
    );
    println!(
        "  Total views:     {}",
        total_views.to_string().bright_green().bold()
    );
    println!(
        "  Daily visitors:  {}",
        visitors_count.to_string().bright_green().bold()
    );
    println!(
        "  UK dataset rows: {}",
        uk_rows.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists recent days with views and distinct visitors.
///
/// # Output Format
///
/// ```text
/// 📈 Daily Views
///
///   Date         Views    Visitors
///   ──────────────────────────────
///   2024-05-02   41       12
///   2024-05-01   17       9
/// ```
async fn handle_views(pool: &PgPool, days: i64) -> Result<()> {
    println!("{}", "📈 Daily Views".bright_blue().bold());
    println!();

    if days <= 0 {
        anyhow::bail!("--days must be positive, got {}", days);
    }

    let service = ViewService::new(Arc::new(PgViewRepository::new(Arc::new(pool.clone()))));
    let summaries = service
        .recent_summaries(days)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load views: {}", e))?;

    if summaries.is_empty() {
        println!("{}", "  No views recorded yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<8}",
        "Date".bright_white().bold(),
        "Views".bright_white().bold(),
        "Visitors".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for summary in &summaries {
        println!(
            "  {:<12} {:<8} {}",
            summary.day.to_string().cyan(),
            summary.views.to_string().bright_green(),
            summary.unique_visitors
        );
    }
    println!();

    Ok(())
}

/// Lists all posts, oldest first.
async fn handle_posts(pool: &PgPool) -> Result<()> {
    println!("{}", "📝 Blog Posts".bright_blue().bold());
    println!();

    let service = PostService::new(Arc::new(PgPostRepository::new(Arc::new(pool.clone()))));
    let posts = service
        .list_posts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list posts: {}", e))?;

    if posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<50} {:<20}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Posted".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for post in &posts {
        println!(
            "  {:<5} {:<50} {}",
            post.id.to_string().bright_black(),
            post.title.cyan(),
            post.timestamp
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", posts.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches UK dataset commands.
async fn handle_uk_data_action(action: UkDataAction, pool: &PgPool) -> Result<()> {
    let repo = PgUkDataRepository::new(Arc::new(pool.clone()));

    match action {
        UkDataAction::Import { file, replace, yes } => {
            import_uk_data(&repo, file, replace, yes).await?;
        }
    }

    Ok(())
}

/// Imports constituency rows from a JSON file.
///
/// # Flow
///
/// 1. Parse the file as an array of records
/// 2. Drop records without a constituency name
/// 3. With `--replace`, confirm (unless `-y`), then swap the whole table in
///    one transaction
/// 4. Otherwise upsert rows keyed by constituency name
async fn import_uk_data(
    repo: &PgUkDataRepository,
    file: PathBuf,
    replace: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗳️  Import UK Dataset".bright_blue().bold());
    println!();

    let raw = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let rows: Vec<UkData> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let total = rows.len();
    let rows: Vec<UkData> = rows
        .into_iter()
        .filter(|r| !r.constituency_name.trim().is_empty())
        .collect();

    println!("  File:    {}", file.display().to_string().cyan());
    println!("  Records: {}", rows.len().to_string().bright_white().bold());
    if rows.len() < total {
        println!(
            "{}",
            format!("  ⚠️  Skipped {} records without a name", total - rows.len()).yellow()
        );
    }
    println!();

    if replace {
        if !skip_confirm {
            let confirmed = Confirm::new()
                .with_prompt("Delete all existing UK rows before importing?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }

        let (deleted, written) = repo
            .replace_all(rows)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to replace dataset: {}", e))?;
        println!("  Deleted {} existing rows", deleted);

        print_imported(written);
        return Ok(());
    }

    let written = repo
        .upsert_many(rows)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to import rows: {}", e))?;

    print_imported(written);

    Ok(())
}

fn print_imported(written: u64) {
    println!();
    println!(
        "{}",
        format!("✅ Imported {} rows", written).green().bold()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
