use std::fmt::Write as _;

use mealweek_recipe::Catalog;
use mealweek_shared::recipe::MealType;
use strum::VariantArray;

use crate::config::Config;

/// Prints every loaded meal, grouped by meal type.
pub async fn list_catalog(config: Config) -> anyhow::Result<()> {
    let (catalog, issues) = crate::catalog::load_catalog(&config.catalog.sources).await;

    print!("{}", render_catalog(&catalog));
    println!(
        "\n{} meals loaded from {} sources, {} problems reported",
        catalog.len(),
        config.catalog.sources.len(),
        issues.len()
    );

    Ok(())
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    for meal_type in MealType::VARIANTS {
        let meals = catalog
            .iter()
            .filter(|m| m.meal_type == *meal_type)
            .collect::<Vec<_>>();

        let _ = writeln!(out, "\n{meal_type} ({} meals):", meals.len());
        for meal in meals {
            let _ = writeln!(out, "{meal}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_groups_by_meal_type() {
        let (catalog, _) = mealweek_recipe::load([(
            "inline",
            Ok::<_, String>(
                r#"{"recipes": [
                    {"name": "Stew", "ingredients": ["beef"], "meal_type": "Dinner",
                     "nutrition": {"calories": 600, "protein": 40, "carbs": 30, "fat": 25}},
                    {"name": "Toast", "ingredients": ["bread"], "meal_type": "breakfast",
                     "nutrition": {"calories": 200, "protein": 6, "carbs": 30, "fat": 4}}
                ]}"#,
            ),
        )]);

        let rendered = render_catalog(&catalog);

        let breakfast = rendered.find("breakfast (1 meals):").unwrap();
        let lunch = rendered.find("lunch (0 meals):").unwrap();
        let dinner = rendered.find("dinner (1 meals):").unwrap();
        assert!(breakfast < lunch && lunch < dinner);
        assert!(rendered.find("Toast (breakfast)").unwrap() < lunch);
        assert!(rendered.find("Stew (dinner)").unwrap() > dinner);
    }
}
