use std::collections::BTreeSet;
use std::fmt;

use mealweek_shared::recipe::MealType;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A catalog recipe. Identity is the name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
    pub prep_time: u32,
    pub servings: u32,
    pub nutrition: Nutrition,
    pub meal_type: MealType,
    pub dietary_tags: BTreeSet<String>,
}

impl Meal {
    pub fn calories(&self) -> u32 {
        self.nutrition.calories
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags.contains(tag)
    }

    /// True when any ingredient equals `ingredient`, ignoring case and
    /// surrounding whitespace.
    pub fn contains_ingredient(&self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim().to_lowercase();

        self.ingredients
            .iter()
            .any(|i| i.trim().to_lowercase() == ingredient)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})\n  Calories: {} kcal, Protein: {}g, Carbs: {}g, Fat: {}g\n  Ingredients: {}",
            self.name,
            self.meal_type,
            self.nutrition.calories,
            self.nutrition.protein,
            self.nutrition.carbs,
            self.nutrition.fat,
            self.ingredients.join(", ")
        )
    }
}
