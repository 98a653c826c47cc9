use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use strum::VariantArray;
use wayfare::AppError;
use wayfare_catalog::{Catalog, Category};
use wayfare_itinerary::{DayBuilder, DaySelection, verify_days};

/// wayfare - day-by-day travel itinerary planning
#[derive(Parser)]
#[command(name = "wayfare")]
#[command(about = "Day-by-day travel itinerary planning toolkit", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a catalog document and report what survived
    Catalog {
        /// Catalog JSON path (overrides the configured default)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Summarize a committed itinerary document
    Summary {
        /// Itinerary JSON path (an array of days)
        #[arg(long)]
        itinerary: PathBuf,
    },
    /// Re-run the commit gate over an itinerary document
    Check {
        /// Itinerary JSON path (an array of days)
        #[arg(long)]
        itinerary: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = wayfare::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    wayfare::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Catalog { path } => catalog_command(&config, path)?,
        Commands::Summary { itinerary } => summary_command(&itinerary)?,
        Commands::Check { itinerary } => check_command(&itinerary)?,
    }

    Ok(())
}

#[tracing::instrument(skip(config))]
fn catalog_command(config: &wayfare::Config, path: Option<PathBuf>) -> Result<(), AppError> {
    let path = path.unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    tracing::info!(path = %path.display(), "ingesting catalog");

    let raw = fs::read_to_string(&path)?;
    let catalog = Catalog::from_json(&raw)?;

    for category in Category::VARIANTS {
        println!("{}: {}", category, catalog.items(*category).len());
    }
    println!("total: {}", catalog.len());

    Ok(())
}

#[tracing::instrument]
fn summary_command(itinerary: &Path) -> Result<(), AppError> {
    let days = load_days(itinerary)?;
    let builder = DayBuilder::new(days);
    let summary = builder.summary();

    println!("days: {}", summary.total_days);
    println!("attractions: {}", summary.total_attractions);
    println!("restaurants: {}", summary.total_restaurants);
    println!("experiences: {}", summary.total_experiences);
    println!("budgeted cost: {:.2}", summary.total_estimated_cost);
    println!("average daily spend: {:.2}", summary.average_daily_spend);
    println!("itemized cost: {:.2}", builder.derived_cost_total());

    Ok(())
}

#[tracing::instrument]
fn check_command(itinerary: &Path) -> Result<(), AppError> {
    let days = load_days(itinerary)?;
    verify_days(&days)?;

    println!("ok: {} day(s)", days.len());
    Ok(())
}

fn load_days(path: &Path) -> Result<Vec<DaySelection>, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
