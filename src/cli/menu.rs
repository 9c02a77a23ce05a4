use std::path::{Path, PathBuf};

use mealweek_mealplan::{ExportFormat, Randomness};
use mealweek_shared::Error;
use mealweek_user::Insertion;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::planner::Planner;

const MENU: &str = "
Meal Planner Menu:
1. Set preferences
2. Generate weekly meal plan
3. View meal plan
4. Add meal to favorites
5. Exclude a meal
6. View favorite meals
7. Export meal plan
8. Quit";

/// Where and how the menu writes exports.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub directory: PathBuf,
    pub default_format: String,
}

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented terminal: reads answers from `input`, writes to `output`.
struct Terminal<I, O> {
    lines: Lines<I>,
    output: O,
}

impl<I, O> Terminal<I, O>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    async fn say(&mut self, text: impl AsRef<str>) -> std::io::Result<()> {
        self.output.write_all(text.as_ref().as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// `None` once the input is exhausted.
    async fn ask(&mut self, question: &str) -> std::io::Result<Option<String>> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        self.lines.next_line().await
    }
}

/// Runs the interactive menu until the user quits or the input ends.
pub async fn run<R, I, O>(
    planner: &mut Planner<R>,
    input: I,
    output: O,
    export: &ExportSettings,
) -> anyhow::Result<()>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut terminal = Terminal {
        lines: input.lines(),
        output,
    };

    loop {
        terminal.say(MENU).await?;

        let Some(choice) = terminal.ask("Choose an option: ").await? else {
            break;
        };

        tracing::debug!(choice = choice.trim(), "menu choice");

        let flow = match choice.trim() {
            "1" => set_preferences(planner, &mut terminal).await?,
            "2" => generate(planner, &mut terminal).await?,
            "3" => view_plan(planner, &mut terminal).await?,
            "4" => add_favorite(planner, &mut terminal).await?,
            "5" => exclude(planner, &mut terminal).await?,
            "6" => view_favorites(planner, &mut terminal).await?,
            "7" => export_plan(planner, &mut terminal, export).await?,
            "8" => {
                terminal.say("Goodbye!").await?;
                Flow::Quit
            }
            _ => {
                terminal.say("Invalid choice. Please try again.").await?;
                Flow::Continue
            }
        };

        if let Flow::Quit = flow {
            break;
        }
    }

    Ok(())
}

async fn set_preferences<R, I, O>(
    planner: &mut Planner<R>,
    terminal: &mut Terminal<I, O>,
) -> std::io::Result<Flow>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let Some(dietary) = terminal
        .ask("Enter dietary preferences (none, vegan, gluten-free): ")
        .await?
    else {
        return Ok(Flow::Quit);
    };

    let Some(restrictions) = terminal
        .ask("Enter any food restrictions (e.g., peanuts, dairy): ")
        .await?
    else {
        return Ok(Flow::Quit);
    };

    loop {
        let Some(calories) = terminal
            .ask("Enter daily caloric needs (optional, press Enter to skip): ")
            .await?
        else {
            return Ok(Flow::Quit);
        };

        match planner.set_preferences(&dietary, &restrictions, &calories) {
            Ok(profile) => {
                let summary = format!("Preferences saved. {profile}");
                terminal.say(summary).await?;

                return Ok(Flow::Continue);
            }
            Err(e @ (Error::InvalidCaloricNeeds(_) | Error::Validate(_))) => {
                terminal
                    .say(format!("Invalid caloric needs ({e}). Please enter a positive number."))
                    .await?;
            }
            Err(e) => {
                terminal.say(format!("Error: {e}")).await?;

                return Ok(Flow::Continue);
            }
        }
    }
}

async fn generate<R, I, O>(
    planner: &mut Planner<R>,
    terminal: &mut Terminal<I, O>,
) -> std::io::Result<Flow>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    match planner.generate() {
        Ok(plan) => {
            let message = format!(
                "Weekly meal plan generated successfully! ({} of 21 slots filled)",
                plan.filled_count()
            );
            terminal.say(message).await?;
        }
        Err(Error::PreferencesNotSet) => {
            terminal.say("Please set your preferences first.").await?;
        }
        Err(e) => terminal.say(format!("Error: {e}")).await?,
    }

    Ok(Flow::Continue)
}

async fn view_plan<R, I, O>(
    planner: &mut Planner<R>,
    terminal: &mut Terminal<I, O>,
) -> std::io::Result<Flow>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let rendered = planner
        .plan()
        .and_then(|plan| mealweek_mealplan::export(plan, ExportFormat::Txt));

    match rendered {
        Ok(export) => terminal.say(format!("\n{}", export.content)).await?,
        Err(Error::EmptyPlan) => {
            terminal
                .say("No meal plan generated yet. Please generate one first.")
                .await?;
        }
        Err(e) => terminal.say(format!("Error: {e}")).await?,
    }

    Ok(Flow::Continue)
}

async fn add_favorite<R, I, O>(
    planner: &mut Planner<R>,
    terminal: &mut Terminal<I, O>,
) -> std::io::Result<Flow>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    if planner.user().is_none() {
        terminal.say("Please set your preferences first.").await?;
        return Ok(Flow::Continue);
    }

    let Some(name) = terminal
        .ask("Enter the name of the meal to add to favorites: ")
        .await?
    else {
        return Ok(Flow::Quit);
    };

    let message = match planner.add_favorite(&name) {
        Ok((meal, Insertion::Added)) => format!("{} added to favorites!", meal.name),
        Ok((meal, Insertion::AlreadyPresent)) => {
            format!("{} is already in your favorites.", meal.name)
        }
        Err(Error::MealNotFound(_)) => "Meal not found. Please try again.".to_owned(),
        Err(e) => format!("Error: {e}"),
    };
    terminal.say(message).await?;

    Ok(Flow::Continue)
}

async fn exclude<R, I, O>(
    planner: &mut Planner<R>,
    terminal: &mut Terminal<I, O>,
) -> std::io::Result<Flow>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    if planner.user().is_none() {
        terminal.say("Please set your preferences first.").await?;
        return Ok(Flow::Continue);
    }

    let Some(name) = terminal
        .ask("Enter the name of the meal to exclude: ")
        .await?
    else {
        return Ok(Flow::Quit);
    };

    let message = match planner.exclude(&name) {
        Ok((meal, Insertion::Added)) => {
            format!("{} will be excluded from future meal plans.", meal.name)
        }
        Ok((meal, Insertion::AlreadyPresent)) => format!("{} is already excluded.", meal.name),
        Err(Error::MealNotFound(_)) => "Meal not found. Please try again.".to_owned(),
        Err(e) => format!("Error: {e}"),
    };
    terminal.say(message).await?;

    Ok(Flow::Continue)
}

async fn view_favorites<R, I, O>(
    planner: &mut Planner<R>,
    terminal: &mut Terminal<I, O>,
) -> std::io::Result<Flow>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let favorites = planner.favorites();

    if favorites.is_empty() {
        terminal.say("No favorite meals saved yet.").await?;
        return Ok(Flow::Continue);
    }

    let mut listing = String::from("\nYour Favorite Meals:");
    for meal in favorites {
        listing.push('\n');
        listing.push_str(&meal.to_string());
    }
    terminal.say(listing).await?;

    Ok(Flow::Continue)
}

async fn export_plan<R, I, O>(
    planner: &mut Planner<R>,
    terminal: &mut Terminal<I, O>,
    settings: &ExportSettings,
) -> std::io::Result<Flow>
where
    R: Randomness,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    if let Err(e) = planner.plan() {
        terminal.say(format!("Error: {e}")).await?;
        return Ok(Flow::Continue);
    }

    let question = format!(
        "Choose export format (txt/html/json) [{}]: ",
        settings.default_format
    );
    let Some(answer) = terminal.ask(&question).await? else {
        return Ok(Flow::Quit);
    };

    let format = match answer.trim() {
        "" => settings.default_format.as_str(),
        answer => answer,
    };

    let export = match planner.export(format) {
        Ok(export) => export,
        Err(e) => {
            terminal.say(format!("Error: {e}")).await?;
            return Ok(Flow::Continue);
        }
    };

    match write_export(&settings.directory, &export).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), format = %export.format, "meal plan exported");
            terminal
                .say(format!("Meal plan exported to {}", path.display()))
                .await?;
        }
        Err(e) => {
            tracing::error!("failed to write export: {e}");
            terminal.say(format!("Error: could not write export: {e}")).await?;
        }
    }

    Ok(Flow::Continue)
}

/// Writes `export` as `<directory>/<file_name>`, creating the directory.
pub async fn write_export(
    directory: &Path,
    export: &mealweek_mealplan::Export,
) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(directory).await?;

    let path = directory.join(&export.file_name);
    tokio::fs::write(&path, &export.content).await?;

    Ok(path)
}
