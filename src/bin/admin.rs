//! CLI administration tool for mini-commerce.
//!
//! Provides database maintenance, row statistics and demo data seeding
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # View row counts
//! cargo run --bin admin -- stats
//!
//! # Load a demo catalogue
//! cargo run --bin admin -- seed --yes
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`mini_commerce::config`].

use mini_commerce::application::services::OrderLine;
use mini_commerce::config::{self, Config};
use mini_commerce::domain::entities::{Money, NewProduct, NewReview};
use mini_commerce::infrastructure::db;
use mini_commerce::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;

/// CLI tool for managing mini-commerce.
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
    /// Show row counts per table
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Insert a demo catalogue with a user, an order and a review
    Seed {
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

    /// Apply pending migrations
    Migrate,
}

/// Tables reported by `stats`, in display order.
const TABLES: [&str; 6] = [
    "users",
    "categories",
    "products",
    "orders",
    "order_items",
    "reviews",
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Seed { yes } => handle_seed(pool.clone(), yes).await?,
    }

    pool.close().await;
    Ok(())
}

async fn connect(config: &Config) -> Result<SqlitePool> {
    db::connect(&config.database_url, &config.pool_settings())
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))
}

/// Prints row counts for every table.
///
/// # Output Format
///
/// ```text
/// Statistics
///
///   users          3
///   categories     2
///   ...
/// ```
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}; run `admin db migrate` first"))?;

        println!(
            "  {:<14} {}",
            table.bright_white(),
            count.to_string().cyan().bold()
        );
    }

    println!();
    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database connection failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            db::run_migrations(pool)
                .await
                .context("Migration failed")?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
    }

    Ok(())
}

/// Seeds a demo dataset through the regular services, so every business
/// rule applies (slugs, email normalization, stock decrement).
///
/// Refuses to run when products already exist.
async fn handle_seed(pool: SqlitePool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed demo data".bright_blue().bold());
    println!();

    db::run_migrations(&pool)
        .await
        .context("Migration failed")?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        println!(
            "{}",
            format!("  Database already has {existing} products, nothing to do").yellow()
        );
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert demo categories, products, a user, an order and a review?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let state = AppState::new(pool);

    let electronics = state
        .category_service
        .create_category("Electronics".to_string())
        .await?;
    let books = state
        .category_service
        .create_category("Books".to_string())
        .await?;

    let catalogue = [
        ("Laptop", "LAP-001", 100_000, 5, electronics.id),
        ("Headphones", "AUD-010", 8_990, 25, electronics.id),
        ("Rust in Action", "BK-RUST", 4_500, 12, books.id),
    ];

    let mut products = Vec::with_capacity(catalogue.len());
    for (name, sku, cents, stock, category_id) in catalogue {
        let product = state
            .product_service
            .create_product(NewProduct {
                name: name.to_string(),
                sku: sku.to_string(),
                price: Money::from_cents(cents),
                stock,
                category_id,
            })
            .await?;
        println!("  {} {} ({})", "+".green(), product.name.cyan(), product.sku);
        products.push(product);
    }

    let user = state
        .user_service
        .create_user("Demo Customer".to_string(), "demo@example.com".to_string())
        .await?;
    println!("  {} user {}", "+".green(), user.email.cyan());

    let order = state
        .order_service
        .place_order(
            user.id,
            vec![
                OrderLine {
                    product_id: products[0].id,
                    quantity: 1,
                },
                OrderLine {
                    product_id: products[1].id,
                    quantity: 2,
                },
            ],
        )
        .await?;
    println!(
        "  {} order #{} total {}",
        "+".green(),
        order.id,
        order.total.to_string().bright_white()
    );

    state
        .review_service
        .create_review(NewReview {
            user_id: user.id,
            product_id: products[0].id,
            rating: 5,
            comment: Some("Fast and quiet".to_string()),
        })
        .await?;

    println!();
    println!("{}", "✅ Demo data inserted".green().bold());
    println!();

    Ok(())
}
