//! CLI administration tool for code-camp.
//!
//! Speakers cannot be created through the REST API, so they are registered
//! here. Also provides statistics and database checks.
//!
//! # Usage
//!
//! ```bash
//! # Register a speaker (prompts for missing names)
//! cargo run --bin admin -- speaker add --first-name Shawn --last-name Wildermuth
//!
//! # List speakers
//! cargo run --bin admin -- speaker list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use code_camp::config::Config;
use code_camp::domain::entities::NewSpeaker;
use code_camp::domain::repositories::SpeakerRepository;
use code_camp::infrastructure::persistence::PgCampRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing code-camp.
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
    /// Manage speakers
    Speaker {
        #[command(subcommand)]
        action: SpeakerAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Speaker management subcommands.
#[derive(Subcommand)]
enum SpeakerAction {
    /// Register a new speaker
    Add {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        middle_name: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        company_url: Option<String>,

        #[arg(long)]
        blog_url: Option<String>,

        /// Twitter handle, e.g. "@shawnwildermuth"
        #[arg(long)]
        twitter: Option<String>,

        /// GitHub user name
        #[arg(long)]
        git_hub: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all speakers
    List,
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

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Speaker { action } => handle_speaker_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches speaker management commands.
async fn handle_speaker_action(action: SpeakerAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCampRepository::new(Arc::new(pool.clone())));

    match action {
        SpeakerAction::Add {
            first_name,
            last_name,
            middle_name,
            company,
            company_url,
            blog_url,
            twitter,
            git_hub,
            yes,
        } => {
            let speaker = NewSpeaker {
                first_name: prompt_if_missing(first_name, "First name")?,
                last_name: prompt_if_missing(last_name, "Last name")?,
                middle_name,
                company,
                company_url,
                blog_url,
                twitter,
                git_hub,
            };
            add_speaker(repo, speaker, yes).await?;
        }
        SpeakerAction::List => {
            list_speakers(repo).await?;
        }
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Registers a speaker after showing a summary and asking for confirmation.
async fn add_speaker(
    repo: Arc<PgCampRepository>,
    speaker: NewSpeaker,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🎤 Add Speaker".bright_blue().bold());
    println!();

    println!("{}", "Speaker details:".bright_white().bold());
    println!(
        "  Name:    {} {}",
        speaker.first_name.cyan(),
        speaker.last_name.cyan()
    );
    if let Some(company) = &speaker.company {
        println!("  Company: {}", company.cyan());
    }
    if let Some(twitter) = &speaker.twitter {
        println!("  Twitter: {}", twitter.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this speaker?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let created = repo
        .insert_speaker(speaker)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create speaker: {}", e))?;

    println!();
    println!("{}", "✅ Speaker created successfully!".green().bold());
    println!(
        "  Reference it in talks with {}",
        format!("\"speaker\": {{ \"speakerId\": {} }}", created.speaker_id).bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all speakers.
///
/// # Output Format
///
/// ```text
/// 📋 Speakers
///
///   ID  Name                           Company                   Twitter
///   ───────────────────────────────────────────────────────────────────────
///   1   Shawn Wildermuth               Wilder Minds LLC          @shawnwildermuth
/// ```
async fn list_speakers(repo: Arc<PgCampRepository>) -> Result<()> {
    println!("{}", "📋 Speakers".bright_blue().bold());
    println!();

    let speakers = repo
        .list_speakers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list speakers: {}", e))?;

    if speakers.is_empty() {
        println!("{}", "  No speakers found".yellow());
        println!();
        println!(
            "  Create one with: {} admin speaker add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<25} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Company".bright_white().bold(),
        "Twitter".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for speaker in &speakers {
        println!(
            "  {:<3} {:<30} {:<25} {}",
            speaker.speaker_id.to_string().bright_black(),
            speaker.display_name().cyan(),
            speaker.company.as_deref().unwrap_or("-"),
            speaker.twitter.as_deref().unwrap_or("-").bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        speakers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays camp, talk and speaker counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let camps_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM camps")
        .fetch_one(pool)
        .await?;

    let talks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM talks")
        .fetch_one(pool)
        .await?;

    let speakers_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM speakers")
        .fetch_one(pool)
        .await?;

    println!(
        "  Camps:    {}",
        camps_count.to_string().bright_green().bold()
    );
    println!(
        "  Talks:    {}",
        talks_count.to_string().bright_green().bold()
    );
    println!(
        "  Speakers: {}",
        speakers_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
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

            let migrations: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
