use mealweek_recipe::Meal;

/// Outcome of adding a meal to favorites or exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    AlreadyPresent,
}

/// Favorites and exclusions kept for the session, each unique by meal name.
#[derive(Debug, Clone, Default)]
pub struct SelectionHistory {
    favorites: Vec<Meal>,
    excluded: Vec<Meal>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_favorite(&mut self, meal: &Meal) -> Insertion {
        let insertion = insert(&mut self.favorites, meal);
        tracing::info!(meal = %meal.name, ?insertion, "favorite");

        insertion
    }

    pub fn add_exclusion(&mut self, meal: &Meal) -> Insertion {
        let insertion = insert(&mut self.excluded, meal);
        tracing::info!(meal = %meal.name, ?insertion, "exclusion");

        insertion
    }

    pub fn favorites(&self) -> &[Meal] {
        &self.favorites
    }

    pub fn excluded(&self) -> &[Meal] {
        &self.excluded
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|m| m.name == name)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|m| m.name == name)
    }
}

fn insert(meals: &mut Vec<Meal>, meal: &Meal) -> Insertion {
    if meals.iter().any(|m| m.name == meal.name) {
        return Insertion::AlreadyPresent;
    }

    meals.push(meal.clone());

    Insertion::Added
}
