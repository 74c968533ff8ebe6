use crate::error::ReadinessError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Available item counts, keyed by ingredient identifier.
///
/// The JSON form is a plain object: `{"apple": 1, "orange": 2}`. Counts are
/// unsigned, so negative quantities are rejected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: AHashMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an inventory from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ReadinessError> {
        serde_json::from_str(json).map_err(ReadinessError::InvalidInventory)
    }

    /// Sets the available count for an ingredient, replacing any previous count.
    pub fn insert(&mut self, ingredient: impl Into<String>, count: u32) {
        self.items.insert(ingredient.into(), count);
    }

    /// Number of units available. Unknown ingredients count as zero.
    pub fn count(&self, ingredient: &str) -> u32 {
        self.items.get(ingredient).copied().unwrap_or(0)
    }

    pub fn has(&self, ingredient: &str) -> bool {
        self.count(ingredient) > 0
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(ingredient, count)| (ingredient.into(), count))
                .collect(),
        }
    }
}
