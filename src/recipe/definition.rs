use super::diet::Diet;
use crate::error::ReadinessError;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

/// A recipe as seen by the readiness evaluator: the diets it follows and the
/// ingredients it needs.
///
/// Only the ingredient identifiers matter for scoring. Quantities are not
/// modelled; each listed ingredient is required once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Serialized in sorted order.
    #[serde(default, serialize_with = "serialize_sorted")]
    pub diets: AHashSet<Diet>,
    /// May be absent in the source data when the recipe is only checked for
    /// diet compatibility.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<D, I, S>(diets: D, ingredients: I) -> Self
    where
        D: IntoIterator<Item = Diet>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            diets: diets.into_iter().collect(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses a recipe from JSON, e.g. `{"diets": ["vegan"], "ingredients": ["rice"]}`.
    pub fn from_json(json: &str) -> Result<Self, ReadinessError> {
        serde_json::from_str(json).map_err(ReadinessError::InvalidRecipe)
    }

    pub fn follows(&self, diet: &Diet) -> bool {
        self.diets.contains(diet)
    }

    /// The distinct ingredients this recipe requires, in first-listed order.
    /// Used for reports; scoring weighs every listed entry.
    pub fn required_ingredients(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(String::as_str).unique()
    }

    /// Name used in log output.
    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

fn serialize_sorted<S: Serializer>(
    diets: &AHashSet<Diet>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(diets.iter().sorted())
}
