//! # Junbi - Recipe Readiness Scoring
//!
//! **Junbi** answers one question: given what is in the pantry, how ready is
//! this recipe to cook for someone following a particular diet?
//!
//! ## Core Workflow
//!
//! 1.  **Describe the recipe**: a [`Recipe`](recipe::Recipe) lists the diets it follows and the
//!     ingredients it needs. Recipes can be built in code or parsed from JSON.
//! 2.  **Describe the pantry**: an [`Inventory`](data::Inventory) maps ingredient identifiers
//!     to the number of units available.
//! 3.  **Evaluate**: a [`ReadinessEvaluator`](evaluator::ReadinessEvaluator) checks the diet,
//!     scores the recipe, and applies the readiness threshold (`0.1` by default).
//!
//! A recipe that does not follow the requested diet, or whose score is at or
//! below the threshold, yields `None`. Errors are reserved for malformed input,
//! such as a diet argument of the wrong type at the JSON boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use junbi::prelude::*;
//!
//! fn main() -> Result<(), ReadinessError> {
//!     let vegan = Diet::new("vegan")?;
//!     let recipe = Recipe::new([vegan.clone()], ["rice", "beans", "lime"]).with_name("Rice bowl");
//!
//!     let mut pantry = Inventory::new();
//!     pantry.insert("rice", 2);
//!     pantry.insert("beans", 1);
//!
//!     let evaluator = ReadinessEvaluator::default();
//!     match evaluator.get_readiness(&recipe, &pantry, &vegan) {
//!         Some(score) => println!("-> Ready to cook: {}", score),
//!         None => println!("-> Not ready"),
//!     }
//!
//!     // The report keeps the reasoning.
//!     let report = evaluator.explain(&recipe, &pantry, &vegan);
//!     assert_eq!(report.missing, vec!["lime".to_string()]);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Scoring
//!
//! The scoring rule is pluggable through [`ReadinessCalculator`](evaluator::ReadinessCalculator),
//! which closures implement directly:
//!
//! ```rust
//! use junbi::prelude::*;
//!
//! # fn main() -> Result<(), ReadinessError> {
//! let evaluator = ReadinessEvaluator::builder()
//!     .threshold(0.5)
//!     .calculator(|recipe: &Recipe, inventory: &Inventory| {
//!         let stocked = recipe.ingredients.iter().filter(|i| inventory.has(i)).count();
//!         stocked as f64 / recipe.ingredients.len().max(1) as f64
//!     })
//!     .build()?;
//! assert_eq!(evaluator.threshold(), 0.5);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod evaluator;
pub mod prelude;
pub mod recipe;
pub mod score;
