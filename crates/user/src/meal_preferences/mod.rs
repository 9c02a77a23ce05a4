mod update;

use std::collections::BTreeSet;
use std::fmt;

use mealweek_recipe::Meal;

pub use update::*;

/// Normalized dietary preferences, ingredient restrictions and optional
/// daily calorie ceiling of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceProfile {
    pub dietary_preferences: BTreeSet<String>,
    pub restrictions: BTreeSet<String>,
    pub caloric_needs: Option<u32>,
}

impl PreferenceProfile {
    /// An empty preference set, or one containing `none`, disables dietary filtering.
    pub fn accepts_any_diet(&self) -> bool {
        self.dietary_preferences.is_empty() || self.dietary_preferences.contains("none")
    }

    pub fn matches_diet(&self, meal: &Meal) -> bool {
        self.accepts_any_diet() || self.dietary_preferences.iter().any(|p| meal.has_tag(p))
    }

    pub fn permits_ingredients(&self, meal: &Meal) -> bool {
        self.restrictions
            .iter()
            .all(|restriction| !meal.contains_ingredient(restriction))
    }

    pub fn allows(&self, meal: &Meal) -> bool {
        self.matches_diet(meal) && self.permits_ingredients(meal)
    }
}

impl fmt::Display for PreferenceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |set: &BTreeSet<String>| set.iter().cloned().collect::<Vec<_>>().join(", ");

        write!(
            f,
            "Preferences: [{}], Restrictions: [{}], Caloric Needs: ",
            join(&self.dietary_preferences),
            join(&self.restrictions)
        )?;

        match self.caloric_needs {
            Some(calories) => write!(f, "{calories} kcal"),
            None => f.write_str("None"),
        }
    }
}
