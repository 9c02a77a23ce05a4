use mealweek_recipe::{CatalogLoader, LoadIssue, load};
use mealweek_shared::recipe::MealType;

const BREAKFASTS: &str = r#"{
    "recipes": [
        {
            "name": "Avocado Toast",
            "ingredients": ["bread", "avocado"],
            "prep_time": 10,
            "servings": 1,
            "nutrition": { "calories": 350, "protein": 9, "carbs": 35, "fat": 20 },
            "meal_type": "Breakfast",
            "dietary_preferences": ["vegan"]
        },
        {
            "name": "Greek Yogurt Bowl",
            "ingredients": ["yogurt", "honey", "granola"],
            "nutrition": { "calories": 280, "protein": 18, "carbs": 32, "fat": 8 },
            "meal_type": "breakfast",
            "dietary_preferences": ["vegetarian", "gluten-free"]
        }
    ]
}"#;

const MIXED: &str = r#"{
    "recipes": [
        {
            "name": "Avocado Toast",
            "ingredients": ["sourdough", "avocado", "chili"],
            "nutrition": { "calories": 390, "protein": 10, "carbs": 38, "fat": 22 },
            "meal_type": "breakfast",
            "dietary_tags": ["vegan"]
        },
        {
            "name": "Missing Nutrition",
            "ingredients": ["air"],
            "meal_type": "lunch"
        },
        {
            "name": "Chicken Curry",
            "ingredients": ["chicken", "rice", "curry paste"],
            "nutrition": { "calories": 650, "protein": 40, "carbs": 70, "fat": 20 },
            "meal_type": "DINNER",
            "dietary_preferences": []
        }
    ]
}"#;

#[test]
fn test_sources_are_merged_without_deduplication() {
    let (catalog, issues) = load([
        ("breakfasts.json", Ok::<_, String>(BREAKFASTS)),
        ("mixed.json", Ok(MIXED)),
    ]);

    assert_eq!(catalog.len(), 4);
    assert_eq!(
        catalog
            .iter()
            .filter(|m| m.name == "Avocado Toast")
            .count(),
        2
    );
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        &issues[0],
        LoadIssue::InvalidRecord { origin, index: 1, .. } if origin == "mixed.json"
    ));
}

#[test]
fn test_unavailable_and_malformed_sources_are_skipped() {
    let (catalog, issues) = load([
        ("missing.json", Err("No such file or directory".to_owned())),
        ("broken.json", Ok("{ \"recipes\": [".to_owned())),
        ("no_list.json", Ok("{ \"meals\": [] }".to_owned())),
        ("breakfasts.json", Ok(BREAKFASTS.to_owned())),
    ]);

    assert_eq!(catalog.len(), 2);
    assert_eq!(issues.len(), 3);
    assert!(matches!(issues[0], LoadIssue::SourceUnavailable { .. }));
    assert!(matches!(issues[1], LoadIssue::MalformedSource { .. }));
    assert!(matches!(issues[2], LoadIssue::MalformedSource { .. }));
}

#[test]
fn test_no_sources_gives_empty_catalog() {
    let (catalog, issues) = CatalogLoader::new().finish();

    assert!(catalog.is_empty());
    assert!(issues.is_empty());
}

#[test]
fn test_find_by_name_is_exact_and_case_insensitive() {
    let mut loader = CatalogLoader::new();
    loader.source("breakfasts.json", BREAKFASTS).source("mixed.json", MIXED);
    let (catalog, _) = loader.finish();

    let meal = catalog.find_by_name("  avocado TOAST ").unwrap();
    assert_eq!(meal.ingredients, vec!["bread", "avocado"]);

    let curry = catalog.find_by_name("chicken curry").unwrap();
    assert_eq!(curry.meal_type, MealType::Dinner);

    assert!(catalog.find_by_name("avocado").is_none());
    assert!(catalog.find_by_name("Chicken Curry Deluxe").is_none());
}
