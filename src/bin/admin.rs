//! CLI administration tool for cutoff-predictor.
//!
//! Works directly on the configured files, without the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Check that the dataset loads
//! cargo run --bin admin -- dataset check
//!
//! # Run a prediction
//! cargo run --bin admin -- predict --college "IIT X" --course CSE --category GEN --gender Male --rank 1200
//!
//! # Render a chart to a file
//! cargo run --bin admin -- chart --college "IIT X" --course CSE --out chart.png
//!
//! # Manage accounts
//! cargo run --bin admin -- account create
//! cargo run --bin admin -- account list
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATASET_PATH`, `CREDENTIALS_PATH` (see [`Config`]).

use cutoff_predictor::application::services::{AnalysisService, AuthService, ChartQuery};
use cutoff_predictor::config::Config;
use cutoff_predictor::domain::query::{AdmissionTable, Prediction, PredictionQuery, Selection};
use cutoff_predictor::infrastructure::persistence::{CsvCredentialRepository, load_admissions};
use cutoff_predictor::rendering::render_png;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing cutoff-predictor.
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
    /// Dataset operations
    Dataset {
        #[command(subcommand)]
        action: DatasetAction,
    },

    /// Predict admission for an exact college/course/category/gender match
    Predict {
        #[arg(long)]
        college: String,
        #[arg(long)]
        course: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        rank: u64,
    },

    /// Render a chart to a PNG file
    Chart {
        #[arg(long)]
        college: String,
        #[arg(long)]
        course: String,
        /// Category for the year trend; `none` draws the per-category box plot
        #[arg(long, default_value = "none")]
        category: String,
        /// Gender filter; `none` keeps all genders
        #[arg(long, default_value = "none")]
        gender: String,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum DatasetAction {
    /// Load the dataset and print its size
    Check,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create an account
    Create {
        /// 10-digit account number (prompted if omitted)
        #[arg(short, long)]
        number: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List account numbers
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Dataset {
            action: DatasetAction::Check,
        } => check_dataset(&config)?,
        Commands::Predict {
            college,
            course,
            category,
            gender,
            rank,
        } => {
            let query = PredictionQuery {
                college,
                course,
                category,
                gender,
                rank,
            };
            predict(&config, &query)?
        }
        Commands::Chart {
            college,
            course,
            category,
            gender,
            out,
        } => {
            let query = ChartQuery {
                college,
                course,
                category: Selection::parse(&category),
                gender: Selection::parse(&gender),
            };
            render_chart(&config, &query, &out).await?
        }
        Commands::Account { action } => handle_account_action(action, &config).await?,
    }

    Ok(())
}

fn load_table(config: &Config) -> Result<AdmissionTable> {
    load_admissions(&config.dataset_path).with_context(|| {
        format!(
            "Failed to load dataset from {}",
            config.dataset_path.display()
        )
    })
}

/// Loads the dataset and prints row and distinct-value counts.
///
/// # Output Format
///
/// ```text
/// 📚 Dataset
///
///   Rows:        1520
///   Colleges:    23
///   Courses:     41
///   Categories:  6
///   Genders:     2
/// ```
fn check_dataset(config: &Config) -> Result<()> {
    println!("{}", "📚 Dataset".bright_blue().bold());
    println!("  {}", config.dataset_path.display().to_string().bright_black());
    println!();

    let table = load_table(config)?;
    let options = table.options();

    println!("  Rows:        {}", table.len().to_string().cyan());
    println!("  Colleges:    {}", options.colleges.len().to_string().cyan());
    println!("  Courses:     {}", options.courses.len().to_string().cyan());
    println!(
        "  Categories:  {}",
        options.categories.len().to_string().cyan()
    );
    println!("  Genders:     {}", options.genders.len().to_string().cyan());
    println!();

    if table.is_empty() {
        println!("{}", "⚠️  The dataset has no rows".yellow());
    } else {
        println!("{}", "✅ Dataset OK".green().bold());
    }

    Ok(())
}

fn predict(config: &Config, query: &PredictionQuery) -> Result<()> {
    let service = AnalysisService::new(Arc::new(load_table(config)?));

    let prediction = service.predict(query);
    let message = match prediction {
        Prediction::WillLikelyGetSeat => prediction.message().green().bold(),
        Prediction::WillLikelyNotGetSeat => prediction.message().red().bold(),
        Prediction::NoDataFound => prediction.message().yellow(),
    };

    println!("{message}");
    Ok(())
}

async fn render_chart(config: &Config, query: &ChartQuery, out: &Path) -> Result<()> {
    let service = AnalysisService::new(Arc::new(load_table(config)?));

    let chart = service
        .chart(query)
        .context("No chart was written")?;

    println!("  {}", chart.title().cyan());

    let png = tokio::task::spawn_blocking(move || render_png(&chart))
        .await
        .context("Rendering task failed")??;

    std::fs::write(out, &png).with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{} {} ({} bytes)",
        "✅ Chart written to".green().bold(),
        out.display().to_string().bright_white(),
        png.len()
    );
    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, config: &Config) -> Result<()> {
    let repo = CsvCredentialRepository::new(&config.credentials_path);
    repo.ensure_exists().with_context(|| {
        format!(
            "Failed to prepare credential store at {}",
            config.credentials_path.display()
        )
    })?;
    let service = AuthService::new(Arc::new(repo));

    match action {
        AccountAction::Create { number, yes } => create_account(&service, number, yes).await,
        AccountAction::List => list_accounts(&service).await,
    }
}

/// Creates an account through the same checks as the registration page.
async fn create_account(
    service: &AuthService<CsvCredentialRepository>,
    number: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let number = match number {
        Some(n) => n,
        None => Input::new().with_prompt("Number").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;
    let confirm = Password::new().with_prompt("Confirm password").interact()?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create account {number}?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let outcome = service
        .register(&number, &password, &confirm)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    if outcome.is_created() {
        println!("{}", format!("✅ {}", outcome.message()).green().bold());
    } else {
        println!("{}", format!("⚠️  {}", outcome.message()).yellow());
    }
    println!();

    Ok(())
}

/// Lists account numbers. Passwords are never printed.
async fn list_accounts(service: &AuthService<CsvCredentialRepository>) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let identifiers = service
        .list_identifiers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if identifiers.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin account create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    for (i, identifier) in identifiers.iter().enumerate() {
        println!(
            "  {:<4} {}",
            (i + 1).to_string().bright_black(),
            identifier.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        identifiers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
