pub mod meal_preferences;

mod history;

pub use history::*;
pub use meal_preferences::PreferenceProfile;
