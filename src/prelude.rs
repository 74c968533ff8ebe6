//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the junbi crate.
//!
//! # Example
//!
//! ```rust
//! use junbi::prelude::*;
//!
//! # fn run_example() -> Result<(), ReadinessError> {
//! let recipe = Recipe::from_json(r#"{"diets": ["diet1"], "ingredients": ["apple", "orange"]}"#)?;
//! let inventory = Inventory::from_json(r#"{"apple": 1, "orange": 1}"#)?;
//!
//! let evaluator = ReadinessEvaluator::default();
//! let score = evaluator.get_readiness(&recipe, &inventory, &Diet::new("diet1")?);
//! assert_eq!(score.map(ReadinessScore::value), Some(1.0));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Evaluation
pub use crate::evaluator::{
    DEFAULT_THRESHOLD, IngredientRatio, Outcome, RankedRecipe, ReadinessCalculator,
    ReadinessConfig, ReadinessEvaluator, ReadinessEvaluatorBuilder, ReadinessReport,
};

// Data structures
pub use crate::data::Inventory;
pub use crate::recipe::{Diet, Recipe};
pub use crate::score::ReadinessScore;

// Error types
pub use crate::error::ReadinessError;
