//! CLI administration tool for article-dashboard.
//!
//! Provides commands for seeding synthetic articles, viewing statistics,
//! and performing database operations without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Insert 50 generated articles
//! cargo run --bin admin -- seed --count 50
//!
//! # Reproducible seed, no prompt
//! cargo run --bin admin -- seed --count 20 --seed 42 -y
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*` components).

use article_dashboard::config::Config;
use article_dashboard::domain::repositories::ArticleRepository;
use article_dashboard::infrastructure::persistence::PgArticleRepository;
use article_dashboard::server::connect_pool;
use article_dashboard::utils::article_factory::{ArticleFactory, TAG_VOCABULARY};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing article-dashboard.
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
    /// Insert generated articles
    Seed {
        /// Number of articles to create
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        /// RNG seed for reproducible content
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Seed { count, seed, yes } => seed_articles(&pool, count, seed, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Generates `count` articles with [`ArticleFactory`] and stores them.
async fn seed_articles(pool: &PgPool, count: usize, seed: Option<u64>, yes: bool) -> Result<()> {
    println!("{}", "Seed articles".bright_blue().bold());
    println!();
    println!("  Count: {}", count.to_string().cyan());
    match seed {
        Some(s) => println!("  Seed:  {}", s.to_string().cyan()),
        None => println!("  Seed:  {}", "random".bright_black()),
    }
    println!();

    if count == 0 {
        println!("{}", "Nothing to do".yellow());
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} articles?", count))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let mut factory = match seed {
        Some(s) => ArticleFactory::seeded(s),
        None => ArticleFactory::new(),
    };
    let repo = PgArticleRepository::new(Arc::new(pool.clone()));

    for new_article in factory.make(count) {
        let article = repo
            .create(new_article)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to insert article: {}", e))?;

        println!(
            "  {:<6} {:<50} {}",
            article.id.to_string().bright_black(),
            article.title.cyan(),
            article.tags.join(", ").bright_black()
        );
    }

    println!();
    println!(
        "{}",
        format!("Inserted {} articles", count).green().bold()
    );
    println!();

    Ok(())
}

/// Displays article statistics: total count and per-tag usage.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let repo = PgArticleRepository::new(Arc::new(pool.clone()));
    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count articles: {}", e))?;

    println!("  Articles: {}", total.to_string().bright_green().bold());
    println!();

    let tag_counts: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT tag, COUNT(*) AS uses
        FROM articles, jsonb_array_elements_text(tags) AS tag
        GROUP BY tag
        ORDER BY uses DESC, tag
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to aggregate tags")?;

    if tag_counts.is_empty() {
        println!("{}", "  No tags yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<15} {}",
        "Tag".bright_white().bold(),
        "Articles".bright_white().bold()
    );
    for (tag, uses) in &tag_counts {
        let label = if TAG_VOCABULARY.contains(&tag.as_str()) {
            tag.cyan()
        } else {
            tag.yellow()
        };
        println!("  {:<15} {}", label, uses);
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Migration failed")?;

            println!("{}", "Migrations up to date".green().bold());
        }
    }

    Ok(())
}
