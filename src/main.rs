use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealweek::cli::menu::ExportSettings;
use mealweek::cli::GenerateArgs;
use mealweek::Planner;
use mealweek_mealplan::StdRandomness;

/// mealweek - Constrained weekly meal planning
#[derive(Parser)]
#[command(name = "mealweek")]
#[command(about = "Plan a week of breakfasts, lunches and dinners from a recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive planner
    Menu {
        /// Seed for reproducible plans (overrides config file)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a single plan from command-line preferences
    Generate(GenerateArgs),
    /// List the meals found in the configured catalog sources
    Catalog,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mealweek::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealweek::observability::init_observability(
        "mealweek",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Menu { seed } => menu_command(config, seed).await,
        Commands::Generate(args) => mealweek::cli::generate_once(config, args).await,
        Commands::Catalog => mealweek::cli::list_catalog(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn menu_command(config: mealweek::config::Config, seed: Option<u64>) -> Result<()> {
    let (catalog, issues) = mealweek::catalog::load_catalog(&config.catalog.sources).await;
    tracing::info!(
        meals = catalog.len(),
        issues = issues.len(),
        "Starting interactive planner"
    );

    let seed = seed.or(config.planner.seed);
    let mut planner = Planner::new(catalog, StdRandomness::from_seed_or_os(seed));

    let export = ExportSettings {
        directory: PathBuf::from(&config.export.directory),
        default_format: config.export.default_format.clone(),
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    mealweek::cli::menu::run(&mut planner, stdin, tokio::io::stdout(), &export).await
}
