//! Common test utilities for building recipes and inventories.
use junbi::prelude::*;

#[allow(dead_code)]
pub fn diet(id: &str) -> Diet {
    Diet::new(id).unwrap()
}

/// A recipe following `diets` and needing `ingredients`.
#[allow(dead_code)]
pub fn recipe(diets: &[&str], ingredients: &[&str]) -> Recipe {
    Recipe::new(
        diets.iter().map(|id| diet(id)),
        ingredients.iter().copied(),
    )
}

/// A recipe that only declares its diets, with no ingredient list at all.
#[allow(dead_code)]
pub fn diet_only_recipe(diets: &[&str]) -> Recipe {
    recipe(diets, &[])
}

#[allow(dead_code)]
pub fn inventory(items: &[(&str, u32)]) -> Inventory {
    items.iter().copied().collect()
}

/// A small set of recipes for ranking tests.
///
/// Against `create_sample_pantry()` and the `vegan` diet:
/// - "Salad" scores 1.0
/// - "Stir fry" scores 0.75
/// - "Curry" scores 0.5
/// - "Omelette" does not follow the diet
/// - "Paella" scores 0 (nothing in stock)
#[allow(dead_code)]
pub fn create_sample_recipes() -> Vec<Recipe> {
    vec![
        recipe(&["vegan", "vegetarian"], &["rice", "coconut", "curry paste", "lime"])
            .with_name("Curry"),
        recipe(&["vegetarian"], &["egg", "cheese"]).with_name("Omelette"),
        recipe(&["vegan"], &["lettuce", "tomato"]).with_name("Salad"),
        recipe(&["vegan"], &["tofu", "rice", "pepper", "ginger"]).with_name("Stir fry"),
        recipe(&["vegan"], &["saffron", "bomba rice"]).with_name("Paella"),
    ]
}

#[allow(dead_code)]
pub fn create_sample_pantry() -> Inventory {
    inventory(&[
        ("rice", 3),
        ("lime", 1),
        ("lettuce", 1),
        ("tomato", 4),
        ("tofu", 1),
        ("pepper", 2),
        ("egg", 6),
        ("cheese", 1),
        ("saffron", 0),
    ])
}

#[allow(dead_code)]
pub const RECIPE_JSON: &str = r#"{
    "name": "Fruit salad",
    "diets": ["diet1", "diet2"],
    "ingredients": ["apple", "orange", "tomato"]
}"#;

#[allow(dead_code)]
pub const INVENTORY_JSON: &str = r#"{"apple": 1, "orange": 1}"#;
