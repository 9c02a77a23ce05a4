use std::path::Path;

use clap::Args;
use mealweek_mealplan::{ExportFormat, StdRandomness};

use crate::cli::menu::write_export;
use crate::config::Config;
use crate::planner::Planner;

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Dietary preferences, comma separated (none, vegan, gluten-free)
    #[arg(long, default_value = "")]
    pub diet: String,

    /// Ingredients to avoid, comma separated
    #[arg(long, default_value = "")]
    pub restrict: String,

    /// Daily calorie ceiling in kcal
    #[arg(long, default_value = "")]
    pub calories: String,

    /// Meal to leave out of the plan (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Also export the plan as txt, html or json
    #[arg(long)]
    pub format: Option<String>,

    /// Seed for a reproducible plan (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Generates one plan from command-line preferences and prints it.
#[tracing::instrument(skip(config))]
pub async fn generate_once(config: Config, args: GenerateArgs) -> anyhow::Result<()> {
    let (catalog, _) = crate::catalog::load_catalog(&config.catalog.sources).await;
    if catalog.is_empty() {
        tracing::warn!("catalog is empty, every slot will stay unfilled");
    }

    let seed = args.seed.or(config.planner.seed);
    let mut planner = Planner::new(catalog, StdRandomness::from_seed_or_os(seed));

    planner.set_preferences(&args.diet, &args.restrict, &args.calories)?;
    for name in &args.exclude {
        planner.exclude(name)?;
    }

    let plan = planner.generate()?;
    let text = mealweek_mealplan::export(plan, ExportFormat::Txt)?;
    println!("{}", text.content);

    if let Some(format) = args.format {
        let export = planner.export(&format)?;
        let path = write_export(Path::new(&config.export.directory), &export).await?;

        println!("\nMeal plan exported to {}", path.display());
    }

    Ok(())
}
