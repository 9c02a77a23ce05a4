use std::collections::BTreeSet;

use mealweek_mealplan::Randomness;
use mealweek_recipe::{Meal, Nutrition};
use mealweek_shared::recipe::MealType;

/// Keeps catalog order and always takes the first eligible meal.
#[allow(dead_code)]
pub struct InOrder;

impl Randomness for InOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

#[allow(dead_code)]
pub fn meal(name: &str, meal_type: MealType, calories: u32) -> Meal {
    Meal {
        name: name.to_owned(),
        ingredients: vec!["water".to_owned(), "salt".to_owned()],
        prep_time: 15,
        servings: 2,
        nutrition: Nutrition {
            calories,
            protein: 20,
            carbs: 30,
            fat: 10,
        },
        meal_type,
        dietary_tags: BTreeSet::new(),
    }
}

#[allow(dead_code)]
pub fn with_ingredients(mut meal: Meal, ingredients: &[&str]) -> Meal {
    meal.ingredients = ingredients.iter().map(|i| i.to_string()).collect();
    meal
}

#[allow(dead_code)]
pub fn with_tags(mut meal: Meal, tags: &[&str]) -> Meal {
    meal.dietary_tags = tags.iter().map(|t| t.to_string()).collect();
    meal
}

/// `count` meals of each type, named like `Breakfast 3`.
#[allow(dead_code)]
pub fn balanced_meals(count: usize) -> Vec<Meal> {
    let mut meals = Vec::new();

    for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
        for i in 1..=count {
            let label = format!("{meal_type}");
            let name = format!("{}{} {i}", label[..1].to_uppercase(), &label[1..]);
            meals.push(meal(&name, meal_type, 300 + (i as u32 * 25)));
        }
    }

    meals
}
