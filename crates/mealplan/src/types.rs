use mealweek_recipe::Meal;
use mealweek_shared::recipe::MealType;
use serde::Serialize;

/// Order in which the slots of a day are filled and rendered.
pub const DAY_ORDER: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Slot {
    pub meal_type: MealType,
    pub meal: Option<Meal>,
}

impl Slot {
    pub fn filled(meal: Meal) -> Self {
        Self {
            meal_type: meal.meal_type,
            meal: Some(meal),
        }
    }

    pub fn unfilled(meal_type: MealType) -> Self {
        Self {
            meal_type,
            meal: None,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.meal.is_some()
    }
}

/// Breakfast, lunch and dinner of one day, always in that order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayPlan {
    slots: [Slot; 3],
}

impl DayPlan {
    pub(crate) fn new(slots: [Slot; 3]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot; 3] {
        &self.slots
    }

    pub fn slot(&self, meal_type: MealType) -> &Slot {
        match meal_type {
            MealType::Breakfast => &self.slots[0],
            MealType::Lunch => &self.slots[1],
            MealType::Dinner => &self.slots[2],
        }
    }

    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.slots.iter().filter_map(|s| s.meal.as_ref())
    }

    /// Total kcal of the filled slots. Wider than a single meal's count so
    /// three large meals cannot overflow.
    pub fn calories(&self) -> u64 {
        self.meals().map(|m| u64::from(m.calories())).sum()
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeeklyPlan {
    days: [DayPlan; 7],
}

impl WeeklyPlan {
    pub(crate) fn new(days: [DayPlan; 7]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayPlan; 7] {
        &self.days
    }

    /// Zero-based day lookup.
    pub fn day(&self, index: usize) -> Option<&DayPlan> {
        self.days.get(index)
    }

    /// Filled slots with their zero-based day index.
    pub fn filled(&self) -> impl Iterator<Item = (usize, &Meal)> {
        self.days
            .iter()
            .enumerate()
            .flat_map(|(index, day)| day.meals().map(move |meal| (index, meal)))
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    pub fn unfilled_count(&self) -> usize {
        self.days.len() * DAY_ORDER.len() - self.filled_count()
    }
}
