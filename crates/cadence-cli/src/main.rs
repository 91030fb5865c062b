//! Cadence CLI
//!
//! Command-line host for the review scheduler: loads decks and session metrics
//! from JSON, supplies the clock, and persists updated items.

mod deck;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use cadence_core::{
    calculate_progress, compute_streak, format_interval, review_forecast, CadenceConfig,
    DifficultyDirective, DifficultyLevel, ReviewableItem, DEFAULT_STREAK_LOOKBACK_DAYS,
    MAX_FORECAST_DAYS,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Cadence - spaced-repetition review CLI
#[derive(Parser)]
#[command(name = "cadence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Review scheduler and study progress for language-learning decks")]
struct Cli {
    /// Config file (JSON). Defaults to the platform config dir if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List items due for review
    Due {
        /// Deck file (JSON array of items)
        deck: PathBuf,
    },

    /// Record one review outcome and write the deck back
    Review {
        /// Deck file (JSON array of items)
        deck: PathBuf,
        /// Item id
        id: String,
        /// The answer was correct
        #[arg(long, conflicts_with = "incorrect", required_unless_present = "incorrect")]
        correct: bool,
        /// The answer was wrong
        #[arg(long)]
        incorrect: bool,
    },

    /// Show what each outcome would schedule for an item
    Preview {
        /// Deck file (JSON array of items)
        deck: PathBuf,
        /// Item id
        id: String,
    },

    /// Show completion and the upcoming workload
    Progress {
        /// Deck file (JSON array of items)
        deck: PathBuf,
        /// Forecast window in days
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u32).range(0..=MAX_FORECAST_DAYS as i64))]
        days: u32,
    },

    /// Count consecutive study days ending today
    Streak {
        /// JSON array of RFC 3339 review timestamps
        dates: PathBuf,
        /// Maximum days to walk back
        #[arg(long, default_value_t = DEFAULT_STREAK_LOOKBACK_DAYS)]
        lookback: u32,
    },

    /// Recommend a difficulty change and focus topics
    Advise {
        /// Session metrics file (JSON)
        metrics: PathBuf,
        /// Current CEFR level (A1-C2); prints the level to use next
        #[arg(long, value_parser = parse_level)]
        level: Option<DifficultyLevel>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = deck::load_config(cli.config.as_deref())?;
    let now = Utc::now();

    match cli.command {
        Commands::Due { deck } => run_due(&config, &deck, now),
        // clap guarantees exactly one of --correct / --incorrect
        Commands::Review {
            deck, id, correct, ..
        } => run_review(&config, &deck, &id, correct, now),
        Commands::Preview { deck, id } => run_preview(&config, &deck, &id, now),
        Commands::Progress { deck, days } => run_progress(&deck, days, now),
        Commands::Streak { dates, lookback } => run_streak(&dates, lookback, now),
        Commands::Advise { metrics, level } => run_advise(&config, &metrics, level),
        Commands::Config => run_config(&config),
    }
}

/// Run due command
fn run_due(config: &CadenceConfig, deck_path: &Path, now: DateTime<Utc>) -> anyhow::Result<()> {
    let items = deck::load_deck(deck_path)?;
    let due = config.scheduler().select_due(&items, now);

    println!("{}", "=== Due for Review ===".cyan().bold());
    println!();

    if due.is_empty() {
        println!("{}", "Nothing due. Come back later.".dimmed());
        return Ok(());
    }

    for item in &due {
        let status = if item.is_new() {
            "new".green()
        } else {
            "review".yellow()
        };
        let tags = if item.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", item.tags.join(", "))
        };
        println!("  {} {}{}", status, item.id.white().bold(), tags.dimmed());
    }

    println!();
    println!("{}: {} of {}", "Due".white().bold(), due.len(), items.len());
    Ok(())
}

/// Run review command
fn run_review(
    config: &CadenceConfig,
    deck_path: &Path,
    id: &str,
    was_correct: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let mut items = deck::load_deck(deck_path)?;
    let slot = find_item_mut(&mut items, id)?;

    let updated = config.scheduler().record_review(slot, was_correct, now);
    *slot = updated.clone();
    deck::save_deck(deck_path, &items)?;

    let outcome = if was_correct {
        "correct".green().bold()
    } else {
        "incorrect".red().bold()
    };
    println!("{} {} ({})", "Reviewed".white().bold(), updated.id, outcome);
    println!("{}: {}", "Reviews".white().bold(), updated.review_count);

    if updated.learned {
        println!("{}", "Mastered: retired from the review rotation".green());
    } else if let Some(next) = updated.next_review_at {
        println!(
            "{}: {} (in {})",
            "Next Review".white().bold(),
            next.format("%Y-%m-%d %H:%M"),
            format_interval(next - now)
        );
    }
    Ok(())
}

/// Run preview command
fn run_preview(
    config: &CadenceConfig,
    deck_path: &Path,
    id: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let items = deck::load_deck(deck_path)?;
    let item = items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| anyhow!("No item with id {:?}", id))?;

    let preview = config.scheduler().preview(item, now);

    println!("{} {}", "=== Preview ===".cyan().bold(), item.id);
    println!("  {:<10} {}", "correct".green(), describe_schedule(&preview.if_correct, now));
    println!("  {:<10} {}", "incorrect".red(), describe_schedule(&preview.if_incorrect, now));
    Ok(())
}

fn describe_schedule(item: &ReviewableItem, now: DateTime<Utc>) -> String {
    match item.next_review_at {
        _ if item.learned => "mastered".to_string(),
        Some(next) => format!("again in {}", format_interval(next - now)),
        None => "due now".to_string(),
    }
}

/// Run progress command
fn run_progress(deck_path: &Path, days: u32, now: DateTime<Utc>) -> anyhow::Result<()> {
    let items = deck::load_deck(deck_path)?;
    let progress = calculate_progress(&items);

    println!("{}", "=== Study Progress ===".cyan().bold());
    println!();
    println!("{}: {}", "Total Cards".white().bold(), progress.total_cards);
    println!("{}: {}", "Learned".white().bold(), progress.learned_cards);
    println!("{}: {}", "In Rotation".white().bold(), progress.to_review_cards);
    println!(
        "{}: {}%",
        "Completion".white().bold(),
        progress.completion_percentage
    );

    let forecast = review_forecast(&items, now, days);
    if forecast.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", "=== Forecast ===".yellow().bold());
    let peak = forecast.iter().map(|d| d.due).max().unwrap_or(0).max(1);
    for day in &forecast {
        let width = (day.due * 30).div_ceil(peak);
        println!(
            "  {} {:>4} {}",
            day.date.format("%a %m-%d"),
            day.due,
            "#".repeat(width).green()
        );
    }
    Ok(())
}

/// Run streak command
fn run_streak(dates_path: &Path, lookback: u32, now: DateTime<Utc>) -> anyhow::Result<()> {
    let dates = deck::load_review_dates(dates_path)?;
    let streak = compute_streak(&dates, now.date_naive(), lookback);

    let label = if streak == 1 { "day" } else { "days" };
    let value = format!("{} {}", streak, label);
    let value = if streak == 0 {
        value.red()
    } else {
        value.green().bold()
    };
    println!("{}: {}", "Streak".white().bold(), value);
    Ok(())
}

/// Run advise command
fn run_advise(
    config: &CadenceConfig,
    metrics_path: &Path,
    level: Option<DifficultyLevel>,
) -> anyhow::Result<()> {
    let metrics = deck::load_metrics(metrics_path)?;
    let advice = config.advisor().advise(&metrics);

    let directive = match advice.directive {
        DifficultyDirective::Decrease => "decrease".red().bold(),
        DifficultyDirective::Maintain => "maintain".yellow().bold(),
        DifficultyDirective::Increase => "increase".green().bold(),
    };

    println!("{}", "=== Session Advice ===".cyan().bold());
    println!();
    println!("{}: {}", "Difficulty".white().bold(), directive);
    if let Some(current) = level {
        println!(
            "{}: {} -> {}",
            "Level".white().bold(),
            current,
            current.apply(advice.directive).to_string().bold()
        );
    }
    println!(
        "{}: {:.0}% over {} questions, streak {}",
        "Performance".white().bold(),
        metrics.correct_answer_rate * 100.0,
        metrics.attempted_questions,
        metrics.consecutive_correct_answers
    );

    if advice.focus.is_empty() {
        println!("{}: {}", "Focus".white().bold(), "none".dimmed());
    } else {
        println!("{}: {}", "Focus".white().bold(), advice.focus.join(", "));
    }
    Ok(())
}

/// Run config command
fn run_config(config: &CadenceConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn parse_level(s: &str) -> Result<DifficultyLevel, String> {
    DifficultyLevel::parse_name(s).ok_or_else(|| format!("unknown level {:?}, expected A1-C2", s))
}

fn find_item_mut<'a>(items: &'a mut [ReviewableItem], id: &str) -> anyhow::Result<&'a mut ReviewableItem> {
    items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| anyhow!("No item with id {:?}", id))
}
