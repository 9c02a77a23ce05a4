//! Shared catalog and planner setup for the session tests.

#![allow(dead_code)]

use mealweek::Planner;
use mealweek_mealplan::StdRandomness;
use mealweek_recipe::Catalog;

/// Three meals per type, all vegan, none above 600 kcal.
pub const CATALOG_JSON: &str = r#"{
  "recipes": [
    {"name": "Oatmeal", "ingredients": ["oats", "water"], "prep_time": 5, "servings": 1,
     "nutrition": {"calories": 300, "protein": 10, "carbs": 50, "fat": 5},
     "meal_type": "breakfast", "dietary_preferences": ["vegan"]},
    {"name": "Fruit Bowl", "ingredients": ["banana", "apple"], "prep_time": 5, "servings": 1,
     "nutrition": {"calories": 250, "protein": 3, "carbs": 60, "fat": 1},
     "meal_type": "breakfast", "dietary_preferences": ["vegan", "gluten-free"]},
    {"name": "PB Toast", "ingredients": ["bread", "peanuts"], "prep_time": 5, "servings": 1,
     "nutrition": {"calories": 350, "protein": 12, "carbs": 40, "fat": 15},
     "meal_type": "breakfast", "dietary_preferences": ["vegan"]},
    {"name": "Lentil Soup", "ingredients": ["lentils", "carrot"], "prep_time": 30, "servings": 4,
     "nutrition": {"calories": 400, "protein": 18, "carbs": 55, "fat": 6},
     "meal_type": "lunch", "dietary_preferences": ["vegan", "gluten-free"]},
    {"name": "Hummus Wrap", "ingredients": ["tortilla", "chickpeas"], "prep_time": 10, "servings": 1,
     "nutrition": {"calories": 450, "protein": 15, "carbs": 60, "fat": 14},
     "meal_type": "lunch", "dietary_preferences": ["vegan"]},
    {"name": "Quinoa Salad", "ingredients": ["quinoa", "cucumber"], "prep_time": 15, "servings": 2,
     "nutrition": {"calories": 380, "protein": 12, "carbs": 50, "fat": 12},
     "meal_type": "lunch", "dietary_preferences": ["vegan", "gluten-free"]},
    {"name": "Veggie Curry", "ingredients": ["chickpeas", "rice"], "prep_time": 40, "servings": 4,
     "nutrition": {"calories": 550, "protein": 16, "carbs": 80, "fat": 14},
     "meal_type": "dinner", "dietary_preferences": ["vegan", "gluten-free"]},
    {"name": "Tofu Stir Fry", "ingredients": ["tofu", "broccoli"], "prep_time": 20, "servings": 2,
     "nutrition": {"calories": 500, "protein": 25, "carbs": 45, "fat": 20},
     "meal_type": "dinner", "dietary_preferences": ["vegan"]},
    {"name": "Bean Chili", "ingredients": ["beans", "tomato"], "prep_time": 45, "servings": 6,
     "nutrition": {"calories": 520, "protein": 22, "carbs": 70, "fat": 10},
     "meal_type": "dinner", "dietary_preferences": ["vegan", "gluten-free"]}
  ]
}"#;

pub fn catalog() -> Catalog {
    let (catalog, issues) = mealweek_recipe::load([("helpers", Ok::<_, String>(CATALOG_JSON))]);
    assert!(issues.is_empty(), "{issues:?}");

    catalog
}

pub fn planner(seed: u64) -> Planner<StdRandomness> {
    Planner::new(catalog(), StdRandomness::seeded(seed))
}
