use mealweek_mealplan::{Export, ExportFormat, Randomness, WeeklyPlan};
use mealweek_recipe::{Catalog, Meal};
use mealweek_shared::{Error, Result};
use mealweek_user::{Insertion, PreferenceProfile, SelectionHistory};

/// Everything one user accumulates during a session.
#[derive(Debug, Clone)]
pub struct UserState {
    pub profile: PreferenceProfile,
    pub plan: Option<WeeklyPlan>,
    pub history: SelectionHistory,
}

/// The command surface of a planning session.
///
/// Owns the read-only catalog, the single generator used for every plan and
/// the user state, which only exists once preferences have been set.
pub struct Planner<R> {
    catalog: Catalog,
    user: Option<UserState>,
    randomness: R,
}

impl<R: Randomness> Planner<R> {
    pub fn new(catalog: Catalog, randomness: R) -> Self {
        Self {
            catalog,
            user: None,
            randomness,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn user(&self) -> Option<&UserState> {
        self.user.as_ref()
    }

    /// Builds a profile from the raw answers and makes it current.
    pub fn set_preferences(
        &mut self,
        dietary_raw: &str,
        restrictions_raw: &str,
        caloric_raw: &str,
    ) -> Result<&PreferenceProfile> {
        let profile = PreferenceProfile::build(dietary_raw, restrictions_raw, caloric_raw)?;

        Ok(self.set_profile(profile))
    }

    /// Replaces the profile. Favorites and exclusions survive, a plan built
    /// for the previous profile does not.
    pub fn set_profile(&mut self, profile: PreferenceProfile) -> &PreferenceProfile {
        tracing::info!(%profile, "preferences updated");

        let user = match self.user.take() {
            Some(mut user) => {
                user.profile = profile;
                user.plan = None;
                user
            }
            None => UserState {
                profile,
                plan: None,
                history: SelectionHistory::new(),
            },
        };

        &self.user.insert(user).profile
    }

    /// Generates a fresh plan, replacing the previous one.
    pub fn generate(&mut self) -> Result<&WeeklyPlan> {
        let user = self.user.as_mut().ok_or(Error::PreferencesNotSet)?;

        let plan = mealweek_mealplan::generate(
            &self.catalog,
            &user.profile,
            user.history.excluded(),
            &mut self.randomness,
        );

        Ok(&*user.plan.insert(plan))
    }

    pub fn plan(&self) -> Result<&WeeklyPlan> {
        self.user
            .as_ref()
            .and_then(|user| user.plan.as_ref())
            .ok_or(Error::EmptyPlan)
    }

    pub fn add_favorite(&mut self, name: &str) -> Result<(&Meal, Insertion)> {
        let user = self.user.as_mut().ok_or(Error::PreferencesNotSet)?;
        let meal = find_meal(&self.catalog, name)?;

        Ok((meal, user.history.add_favorite(meal)))
    }

    /// Excludes a meal from every plan generated from now on.
    pub fn exclude(&mut self, name: &str) -> Result<(&Meal, Insertion)> {
        let user = self.user.as_mut().ok_or(Error::PreferencesNotSet)?;
        let meal = find_meal(&self.catalog, name)?;

        Ok((meal, user.history.add_exclusion(meal)))
    }

    pub fn favorites(&self) -> &[Meal] {
        self.user
            .as_ref()
            .map(|user| user.history.favorites())
            .unwrap_or_default()
    }

    pub fn export(&self, format_raw: &str) -> Result<Export> {
        let plan = self.plan()?;
        let format = ExportFormat::parse(format_raw)?;

        mealweek_mealplan::export(plan, format)
    }
}

fn find_meal<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Meal> {
    catalog
        .find_by_name(name)
        .ok_or_else(|| Error::MealNotFound(name.trim().to_owned()))
}
