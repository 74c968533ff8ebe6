use crate::data::Inventory;
use crate::recipe::Recipe;

/// Computes the raw readiness of a recipe against an inventory.
///
/// The evaluator delegates scoring to this trait so the rule can be swapped
/// without touching diet matching or thresholding. Any
/// `Fn(&Recipe, &Inventory) -> f64` closure implements it.
///
/// Implementations should return a value within `0.0..=1.0`; the evaluator
/// clamps anything outside that range.
pub trait ReadinessCalculator: Send + Sync {
    fn calculate(&self, recipe: &Recipe, inventory: &Inventory) -> f64;
}

impl<F> ReadinessCalculator for F
where
    F: Fn(&Recipe, &Inventory) -> f64 + Send + Sync,
{
    fn calculate(&self, recipe: &Recipe, inventory: &Inventory) -> f64 {
        self(recipe, inventory)
    }
}

/// The default rule: the share of listed ingredient entries that are in stock.
///
/// Every entry of `recipe.ingredients` counts, repeats included, and each
/// contributes at most one unit, so surplus stock of one item cannot make up
/// for another that is missing. A recipe without ingredients scores `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientRatio;

impl ReadinessCalculator for IngredientRatio {
    fn calculate(&self, recipe: &Recipe, inventory: &Inventory) -> f64 {
        if recipe.ingredients.is_empty() {
            return 0.0;
        }
        let available = recipe
            .ingredients
            .iter()
            .fold(0u64, |available, ingredient| {
                available + u64::from(inventory.count(ingredient).min(1))
            });

        available as f64 / recipe.ingredients.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Diet;

    fn recipe(ingredients: &[&str]) -> Recipe {
        Recipe::new([Diet::new("diet1").unwrap()], ingredients.iter().copied())
    }

    #[test]
    fn test_all_ingredients_available() {
        let inventory = Inventory::from_iter([("apple", 1), ("orange", 1)]);
        let score = IngredientRatio.calculate(&recipe(&["apple", "orange"]), &inventory);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_missing_ingredient_lowers_score() {
        let inventory = Inventory::from_iter([("apple", 1), ("orange", 1)]);
        let score = IngredientRatio.calculate(&recipe(&["apple", "orange", "tomato"]), &inventory);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_surplus_stock_is_capped_per_ingredient() {
        let inventory = Inventory::from_iter([("apple", 5)]);
        let score = IngredientRatio.calculate(&recipe(&["apple", "orange"]), &inventory);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_repeated_ingredients_count_per_entry() {
        let inventory = Inventory::from_iter([("apple", 1)]);
        let score = IngredientRatio.calculate(&recipe(&["apple", "apple", "orange"]), &inventory);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_counts_score_zero() {
        let inventory = Inventory::from_iter([("apple", 0), ("orange", 0)]);
        let score = IngredientRatio.calculate(&recipe(&["apple", "orange"]), &inventory);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_no_ingredients_scores_zero() {
        let score = IngredientRatio.calculate(&recipe(&[]), &Inventory::new());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_closure_is_a_calculator() {
        let fixed = |_: &Recipe, _: &Inventory| 0.05;
        assert_eq!(fixed.calculate(&recipe(&["apple"]), &Inventory::new()), 0.05);
    }
}
