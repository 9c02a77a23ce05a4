use std::fmt::Display;

use serde::Deserialize;

use crate::{Meal, RecipeRecord};

/// Problems met while loading recipe sources. None of them stop the load.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadIssue {
    #[error("recipe source {origin} unavailable: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    #[error("recipe source {origin} is malformed: {reason}")]
    MalformedSource { origin: String, reason: String },

    #[error("recipe {index} in {origin} rejected: {reason}")]
    InvalidRecord {
        origin: String,
        index: usize,
        reason: String,
    },
}

#[derive(Deserialize)]
struct RecipeDocument {
    recipes: Vec<serde_json::Value>,
}

/// Read-only pool of meals merged from every loaded source.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn all(&self) -> &[Meal] {
        &self.meals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meal> {
        self.meals.iter()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Case-insensitive exact match on the trimmed name. When two sources
    /// define the same name, the first loaded wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Meal> {
        let name = name.trim().to_lowercase();

        self.meals.iter().find(|m| m.name.to_lowercase() == name)
    }
}

impl FromIterator<Meal> for Catalog {
    fn from_iter<T: IntoIterator<Item = Meal>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Accumulates meals from several sources. Sources are additive: meals
/// sharing a name are all kept.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    meals: Vec<Meal>,
    issues: Vec<LoadIssue>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&mut self, origin: impl Into<String>, body: &str) -> &mut Self {
        let origin = origin.into();

        let document = match serde_json::from_str::<RecipeDocument>(body) {
            Ok(document) => document,
            Err(e) => {
                self.issue(LoadIssue::MalformedSource {
                    origin,
                    reason: e.to_string(),
                });

                return self;
            }
        };

        let before = self.meals.len();

        for (index, value) in document.recipes.into_iter().enumerate() {
            match parse_record(value) {
                Ok(meal) => self.meals.push(meal),
                Err(e) => self.issue(LoadIssue::InvalidRecord {
                    origin: origin.to_owned(),
                    index,
                    reason: e.to_string(),
                }),
            }
        }

        tracing::info!(
            origin = %origin,
            meals = self.meals.len() - before,
            "recipe source loaded"
        );

        self
    }

    pub fn unavailable(&mut self, origin: impl Into<String>, reason: impl Display) -> &mut Self {
        self.issue(LoadIssue::SourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        });

        self
    }

    pub fn finish(self) -> (Catalog, Vec<LoadIssue>) {
        tracing::info!(
            meals = self.meals.len(),
            issues = self.issues.len(),
            "catalog ready"
        );

        (Catalog::new(self.meals), self.issues)
    }

    fn issue(&mut self, issue: LoadIssue) {
        tracing::warn!("{issue}");
        self.issues.push(issue);
    }
}

fn parse_record(value: serde_json::Value) -> mealweek_shared::Result<Meal> {
    let record = serde_json::from_value::<RecipeRecord>(value)?;

    Meal::try_from(record)
}

/// Loads every source in order. A source whose body could not be obtained is
/// reported and skipped.
pub fn load<I, O, B, E>(sources: I) -> (Catalog, Vec<LoadIssue>)
where
    I: IntoIterator<Item = (O, Result<B, E>)>,
    O: Into<String>,
    B: AsRef<str>,
    E: Display,
{
    let mut loader = CatalogLoader::new();

    for (origin, body) in sources {
        match body {
            Ok(body) => loader.source(origin, body.as_ref()),
            Err(reason) => loader.unavailable(origin, reason),
        };
    }

    loader.finish()
}
