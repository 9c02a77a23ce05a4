use anyhow::Context;
use askama::Template;
use mealweek_shared::Error;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::WeeklyPlan;

pub const NO_MEAL_FOUND: &str = "No suitable meal found for this slot.";

#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    /// Plain structured text.
    Txt,
    /// Print-ready document, one page per day.
    Html,
    Json,
}

impl ExportFormat {
    pub fn parse(value: &str) -> mealweek_shared::Result<Self> {
        let value = value.trim();

        value
            .parse()
            .map_err(|_| Error::UnsupportedFormat(value.to_owned()))
    }

    pub fn extension(&self) -> &str {
        self.as_ref()
    }

    pub fn file_name(&self) -> String {
        format!("meal_plan.{}", self.extension())
    }
}

/// A rendered plan, ready to be written as `file_name`.
#[derive(Debug, Clone)]
pub struct Export {
    pub format: ExportFormat,
    pub file_name: String,
    pub content: String,
}

#[derive(Template)]
#[template(path = "plan.txt")]
struct TextTemplate {
    days: Vec<TextDay>,
}

struct TextDay {
    number: usize,
    lines: Vec<String>,
}

#[derive(Template)]
#[template(path = "plan.html")]
struct DocumentTemplate {
    days: Vec<DocumentDay>,
    filled: usize,
    total: usize,
}

struct DocumentDay {
    number: usize,
    calories: u64,
    slots: Vec<DocumentSlot>,
}

struct DocumentSlot {
    label: String,
    meal: Option<DocumentMeal>,
}

struct DocumentMeal {
    name: String,
    calories: u32,
    protein: u32,
    carbs: u32,
    fat: u32,
    prep_time: u32,
    servings: u32,
    ingredients: String,
    tags: String,
}

pub fn export(plan: &WeeklyPlan, format: ExportFormat) -> mealweek_shared::Result<Export> {
    let content = match format {
        ExportFormat::Txt => render_text(plan)?,
        ExportFormat::Html => render_document(plan)?,
        ExportFormat::Json => serde_json::to_string_pretty(plan)?,
    };

    tracing::info!(format = %format, bytes = content.len(), "meal plan exported");

    Ok(Export {
        format,
        file_name: format.file_name(),
        content,
    })
}

fn render_text(plan: &WeeklyPlan) -> mealweek_shared::Result<String> {
    let days = plan
        .days()
        .iter()
        .enumerate()
        .map(|(index, day)| TextDay {
            number: index + 1,
            lines: day
                .slots()
                .iter()
                .map(|slot| match &slot.meal {
                    Some(meal) => meal.to_string(),
                    None => NO_MEAL_FOUND.to_owned(),
                })
                .collect(),
        })
        .collect();

    Ok(TextTemplate { days }
        .render()
        .context("Failed to render text meal plan")?)
}

fn render_document(plan: &WeeklyPlan) -> mealweek_shared::Result<String> {
    let days = plan
        .days()
        .iter()
        .enumerate()
        .map(|(index, day)| DocumentDay {
            number: index + 1,
            calories: day.calories(),
            slots: day
                .slots()
                .iter()
                .map(|slot| DocumentSlot {
                    label: capitalize(slot.meal_type.as_ref()),
                    meal: slot.meal.as_ref().map(|meal| DocumentMeal {
                        name: meal.name.to_owned(),
                        calories: meal.nutrition.calories,
                        protein: meal.nutrition.protein,
                        carbs: meal.nutrition.carbs,
                        fat: meal.nutrition.fat,
                        prep_time: meal.prep_time,
                        servings: meal.servings,
                        ingredients: meal.ingredients.join(", "),
                        tags: meal
                            .dietary_tags
                            .iter()
                            .cloned()
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                })
                .collect(),
        })
        .collect();

    Ok(DocumentTemplate {
        days,
        filled: plan.filled_count(),
        total: plan.filled_count() + plan.unfilled_count(),
    }
    .render()
    .context("Failed to render meal plan document")?)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse(" TXT ").unwrap(), ExportFormat::Txt);
        assert_eq!(ExportFormat::parse("html").unwrap(), ExportFormat::Html);
        assert_eq!(ExportFormat::parse("Json").unwrap(), ExportFormat::Json);
        assert!(matches!(
            ExportFormat::parse("docx"),
            Err(Error::UnsupportedFormat(v)) if v == "docx"
        ));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ExportFormat::Txt.file_name(), "meal_plan.txt");
        assert_eq!(ExportFormat::Html.file_name(), "meal_plan.html");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("breakfast"), "Breakfast");
        assert_eq!(capitalize(""), "");
    }
}
