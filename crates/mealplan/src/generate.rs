use std::collections::HashSet;

use mealweek_recipe::{Catalog, Meal};
use mealweek_shared::recipe::MealType;
use mealweek_user::PreferenceProfile;

use crate::{DAY_ORDER, DayPlan, Randomness, Slot, WeeklyPlan};

/// Builds a 7 day x 3 meal plan from the catalog.
///
/// The catalog is shuffled once per call and that order is kept for the
/// whole run. For every slot the eligible meals are those of the slot's meal
/// type that the profile allows, that are not excluded, that were not used
/// earlier in the run and, when the profile has a calorie ceiling, that fit in
/// what is left of the day's budget. One of them is picked at random; when
/// none remain the slot stays unfilled.
pub fn generate<R: Randomness>(
    catalog: &Catalog,
    profile: &PreferenceProfile,
    excluded: &[Meal],
    randomness: &mut R,
) -> WeeklyPlan {
    let mut candidates = catalog.iter().collect::<Vec<_>>();
    randomness.shuffle(&mut candidates);

    let excluded = excluded
        .iter()
        .map(|m| m.name.as_str())
        .collect::<HashSet<_>>();

    let mut used = HashSet::new();

    let days = std::array::from_fn(|day| {
        plan_day(
            day,
            &candidates,
            profile,
            &excluded,
            &mut used,
            randomness,
        )
    });

    let plan = WeeklyPlan::new(days);

    tracing::info!(
        candidates = candidates.len(),
        filled = plan.filled_count(),
        unfilled = plan.unfilled_count(),
        "weekly plan generated"
    );

    plan
}

fn plan_day<'a, R: Randomness>(
    day: usize,
    candidates: &[&'a Meal],
    profile: &PreferenceProfile,
    excluded: &HashSet<&str>,
    used: &mut HashSet<&'a str>,
    randomness: &mut R,
) -> DayPlan {
    let mut calories = 0u32;

    let slots = DAY_ORDER.map(|meal_type| {
        let eligible = eligible_meals(
            candidates,
            meal_type,
            profile,
            excluded,
            used,
            calories,
        );

        if eligible.is_empty() {
            tracing::debug!(day = day + 1, meal_type = %meal_type, "no suitable meal");

            return Slot::unfilled(meal_type);
        }

        let meal = eligible[randomness.pick(eligible.len())];
        used.insert(meal.name.as_str());
        calories = calories.saturating_add(meal.calories());

        Slot::filled(meal.clone())
    });

    DayPlan::new(slots)
}

fn eligible_meals<'a>(
    candidates: &[&'a Meal],
    meal_type: MealType,
    profile: &PreferenceProfile,
    excluded: &HashSet<&str>,
    used: &HashSet<&str>,
    day_calories: u32,
) -> Vec<&'a Meal> {
    candidates
        .iter()
        .copied()
        .filter(|meal| {
            meal.meal_type == meal_type
                && profile.allows(meal)
                && !used.contains(meal.name.as_str())
                && !excluded.contains(meal.name.as_str())
                && profile
                    .caloric_needs
                    .is_none_or(|ceiling| day_calories.saturating_add(meal.calories()) <= ceiling)
        })
        .collect()
}
