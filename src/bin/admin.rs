//! CLI administration tool for linkstat.
//!
//! Works directly against the configured database, through the same
//! [`ShortenerService`] the HTTP server uses.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema without starting the server
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Look up where a short id points
//! cargo run --bin admin -- resolve AQ
//!
//! # Show click statistics
//! cargo run --bin admin -- stats AZCJv3Xk7r2bn8eXgOqH1Q
//!
//! # Inspect a short id or stat id
//! cargo run --bin admin -- decode AQA
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite or PostgreSQL connection string
//!   (default: `sqlite://database/data.db`)

use linkstat::application::services::ShortenerService;
use linkstat::config::{self, mask_connection_string};
use linkstat::infrastructure::persistence::Database;
use linkstat::utils::id_codec::{decode_id, decode_token};

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;
use uuid::Uuid;

/// CLI tool for managing linkstat.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Shorten a URL
    Shorten {
        /// Absolute URL to shorten
        url: String,
    },

    /// Print the URL a short id redirects to
    Resolve {
        short_id: String,
    },

    /// Show click statistics for a stat id
    Stats {
        stat_id: String,
    },

    /// Decode a short id or stat id (no database access)
    Decode {
        token: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create tables and indexes if they are missing
    Init,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Decode { token } = &cli.command {
        return decode(token);
    }

    let config = config::load_from_env()?;
    let database = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::Db { action } => handle_db_action(action, &database, &config.database_url).await,
        Commands::Shorten { url } => shorten(&database, &url).await,
        Commands::Resolve { short_id } => resolve(&database, &short_id).await,
        Commands::Stats { stat_id } => stats(&database, &stat_id).await,
        Commands::Decode { .. } => Ok(()),
    };

    database.close().await;
    result
}

async fn service(database: &Database) -> Result<ShortenerService> {
    database
        .bootstrap_schema()
        .await
        .context("Failed to create database schema")?;
    Ok(ShortenerService::new(database.link_repository()))
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, database: &Database, url: &str) -> Result<()> {
    match action {
        DbAction::Init => {
            database
                .bootstrap_schema()
                .await
                .context("Failed to create database schema")?;
            println!("{}", "Schema is up to date".green().bold());
        }
        DbAction::Check => {
            database.ping().await.context("Database is not reachable")?;

            println!("{}", "Database connection".bright_blue().bold());
            println!("  Backend: {}", database.kind().as_str().cyan());
            println!("  URL:     {}", mask_connection_string(url).bright_black());
            println!("  Status:  {}", "connected".green());
        }
    }

    Ok(())
}

async fn shorten(database: &Database, url: &str) -> Result<()> {
    let link = service(database).await?.generate_short_url(url).await?;

    println!("{}", "Link created".green().bold());
    println!();
    println!("  URL:        {}", link.url.cyan());
    println!("  Short id:   {}", link.short_id.bright_yellow().bold());
    println!("  Stat id:    {}", link.stat_id.bright_yellow());
    println!("  Expires:    {}", link.expiration_day().bright_black());
    println!();

    Ok(())
}

async fn resolve(database: &Database, short_id: &str) -> Result<()> {
    let url = service(database).await?.get_full_url(short_id).await?;
    println!("{url}");
    Ok(())
}

/// Prints click statistics.
///
/// # Output Format
///
/// ```text
/// Statistics for AQ
///
///   Clicks:  2
///   Expires: 2026-11-19
///
///   IP                                       Time
///   -----------------------------------------------------------------
///   203.0.113.7                              2026-10-19 14:05:09
///   198.51.100.2                             2026-10-19 13:58:41
/// ```
async fn stats(database: &Database, stat_id: &str) -> Result<()> {
    let stats = service(database).await?.get_stats(stat_id).await?;

    println!(
        "{} {}",
        "Statistics for".bright_blue().bold(),
        stats.short_id.bright_yellow().bold()
    );
    println!();
    println!(
        "  Clicks:  {}",
        stats.click_count.to_string().bright_white().bold()
    );
    println!("  Expires: {}", stats.expiration_day().bright_black());
    println!();

    if stats.recent_clicks.is_empty() {
        println!("{}", "  No clicks yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<40} {}",
        "IP".bright_white().bold(),
        "Time".bright_white().bold()
    );
    println!("  {}", "-".repeat(65).bright_black());
    for click in &stats.recent_clicks {
        println!("  {:<40} {}", click.ip.cyan(), click.formatted_time());
    }
    println!();

    Ok(())
}

/// Explains what a token contains: the row id behind a short id, or the
/// creation time embedded in a stat id.
fn decode(token: &str) -> Result<()> {
    let bytes = decode_token(token).with_context(|| format!("Cannot decode '{token}'"))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();

    println!("  Token: {}", token.bright_yellow().bold());
    println!("  Bytes: {} ({} bytes)", hex.cyan(), bytes.len());

    if let Some(row_id) = decode_id(token) {
        println!("  Row id: {}", row_id.to_string().bright_white().bold());
    }

    if let Ok(uuid) = Uuid::from_slice(&bytes)
        && let Some(timestamp) = uuid.get_timestamp()
    {
        let (secs, nanos) = timestamp.to_unix();
        if let Some(created) = i64::try_from(secs)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, nanos))
        {
            println!(
                "  Created: {}",
                created.format("%Y-%m-%d %H:%M:%S UTC").to_string().bright_black()
            );
        }
    }

    Ok(())
}
