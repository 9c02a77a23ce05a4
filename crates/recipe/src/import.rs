use std::collections::BTreeSet;

use mealweek_shared::recipe::MealType;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{Meal, Nutrition};

/// One entry of a recipe source document, before normalization.
#[derive(Deserialize, Validate, Clone, Debug)]
pub struct RecipeRecord {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default = "default_servings")]
    #[validate(range(min = 1))]
    pub servings: u32,
    pub nutrition: Nutrition,
    pub meal_type: String,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Older sources name the same list `dietary_tags`; both are merged.
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}

fn default_servings() -> u32 {
    1
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

impl TryFrom<RecipeRecord> for Meal {
    type Error = mealweek_shared::Error;

    fn try_from(record: RecipeRecord) -> Result<Self, Self::Error> {
        record.validate()?;

        let Some(meal_type) = MealType::parse(&record.meal_type) else {
            mealweek_shared::bail!("unknown meal type '{}'", record.meal_type);
        };

        let dietary_tags = record
            .dietary_preferences
            .iter()
            .chain(&record.dietary_tags)
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect::<BTreeSet<_>>();

        Ok(Meal {
            name: record.name,
            ingredients: record.ingredients,
            prep_time: record.prep_time,
            servings: record.servings,
            nutrition: record.nutrition,
            meal_type,
            dietary_tags,
        })
    }
}
