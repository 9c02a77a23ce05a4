use std::collections::BTreeSet;

use validator::Validate;

use super::PreferenceProfile;

#[derive(Validate)]
pub struct UpdateInput {
    pub dietary_preferences: BTreeSet<String>,
    pub restrictions: BTreeSet<String>,
    #[validate(range(min = 1))]
    pub caloric_needs: Option<u32>,
}

impl UpdateInput {
    /// Parses the free-text answers given for each preference question.
    pub fn parse(
        dietary_raw: &str,
        restrictions_raw: &str,
        caloric_raw: &str,
    ) -> mealweek_shared::Result<Self> {
        let caloric_raw = caloric_raw.trim();
        let caloric_needs = if caloric_raw.is_empty() {
            None
        } else {
            let calories = caloric_raw
                .parse::<u32>()
                .map_err(|_| mealweek_shared::Error::InvalidCaloricNeeds(caloric_raw.to_owned()))?;

            Some(calories)
        };

        Ok(Self {
            dietary_preferences: split_list(dietary_raw),
            restrictions: split_list(restrictions_raw),
            caloric_needs,
        })
    }
}

impl PreferenceProfile {
    pub fn build(
        dietary_raw: &str,
        restrictions_raw: &str,
        caloric_raw: &str,
    ) -> mealweek_shared::Result<Self> {
        Self::try_from(UpdateInput::parse(
            dietary_raw,
            restrictions_raw,
            caloric_raw,
        )?)
    }
}

impl TryFrom<UpdateInput> for PreferenceProfile {
    type Error = mealweek_shared::Error;

    fn try_from(input: UpdateInput) -> Result<Self, Self::Error> {
        input.validate()?;

        Ok(Self {
            dietary_preferences: input.dietary_preferences,
            restrictions: input.restrictions,
            caloric_needs: input.caloric_needs,
        })
    }
}

fn split_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}
