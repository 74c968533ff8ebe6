use crate::data::Inventory;
use crate::error::ReadinessError;
use crate::recipe::{Diet, Recipe};
use crate::score::ReadinessScore;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, trace};

mod builder;
mod calculator;
mod report;

pub use builder::{DEFAULT_THRESHOLD, ReadinessConfig, ReadinessEvaluatorBuilder};
pub use calculator::{IngredientRatio, ReadinessCalculator};
pub use report::{Outcome, RankedRecipe, ReadinessReport};

/// Decides whether a recipe can be cooked from an inventory under a requested diet.
///
/// An evaluator is immutable once built and can be shared across threads.
/// The default instance scores with [`IngredientRatio`] and rejects scores at
/// or below [`DEFAULT_THRESHOLD`].
pub struct ReadinessEvaluator {
    threshold: f64,
    calculator: Box<dyn ReadinessCalculator>,
}

impl ReadinessEvaluator {
    pub fn builder() -> ReadinessEvaluatorBuilder {
        ReadinessEvaluatorBuilder::new()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scores `recipe` against `inventory` for the requested `diet`.
    ///
    /// # Returns
    ///
    /// * `Some(score)`: the recipe follows `diet` and its score is above the threshold.
    /// * `None`: the recipe does not follow `diet`, or it scored at or below the threshold.
    pub fn get_readiness(
        &self,
        recipe: &Recipe,
        inventory: &Inventory,
        diet: &Diet,
    ) -> Option<ReadinessScore> {
        self.outcome(recipe, inventory, diet).score()
    }

    /// Same as [`get_readiness`](Self::get_readiness), for arguments that arrive as untyped JSON.
    ///
    /// `diet` must be a diet argument, `{"diet": "<id>"}`. It is validated first,
    /// so a wrongly typed diet fails even when the other arguments are also bad.
    pub fn get_readiness_json(
        &self,
        recipe: &Value,
        inventory: &Value,
        diet: &Value,
    ) -> Result<Option<ReadinessScore>, ReadinessError> {
        let diet = Diet::try_from(diet)?;
        let recipe: Recipe =
            Recipe::deserialize(recipe).map_err(ReadinessError::InvalidRecipe)?;
        let inventory: Inventory =
            Inventory::deserialize(inventory).map_err(ReadinessError::InvalidInventory)?;
        Ok(self.get_readiness(&recipe, &inventory, &diet))
    }

    /// Evaluates like `get_readiness`, but keeps the reasoning: the outcome and
    /// which ingredients are in stock or missing.
    pub fn explain(&self, recipe: &Recipe, inventory: &Inventory, diet: &Diet) -> ReadinessReport {
        let outcome = self.outcome(recipe, inventory, diet);
        let (available, missing): (Vec<String>, Vec<String>) = recipe
            .required_ingredients()
            .map(str::to_string)
            .partition(|ingredient| inventory.has(ingredient));

        ReadinessReport {
            outcome,
            threshold: self.threshold,
            available,
            missing,
        }
    }

    /// Evaluates every recipe and returns the ready ones, best score first.
    /// Recipes with equal scores keep their input order.
    pub fn rank<'r>(
        &self,
        recipes: &'r [Recipe],
        inventory: &Inventory,
        diet: &Diet,
    ) -> Vec<RankedRecipe<'r>> {
        let mut ranked: Vec<RankedRecipe<'r>> = recipes
            .iter()
            .filter_map(|recipe| {
                self.get_readiness(recipe, inventory, diet)
                    .map(|score| RankedRecipe { recipe, score })
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    fn outcome(&self, recipe: &Recipe, inventory: &Inventory, diet: &Diet) -> Outcome {
        if !recipe.follows(diet) {
            debug!(recipe = recipe.label(), %diet, "recipe does not follow requested diet");
            return Outcome::DietMismatch;
        }

        let raw = self.calculator.calculate(recipe, inventory);
        let score = ReadinessScore::new(raw);
        trace!(recipe = recipe.label(), %diet, raw, %score, "computed readiness");

        if score.value() <= self.threshold {
            debug!(
                recipe = recipe.label(),
                %score,
                threshold = self.threshold,
                "readiness at or below threshold"
            );
            Outcome::BelowThreshold(score)
        } else {
            Outcome::Ready(score)
        }
    }
}

impl Default for ReadinessEvaluator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            calculator: Box::new(IngredientRatio),
        }
    }
}

impl fmt::Debug for ReadinessEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadinessEvaluator")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
