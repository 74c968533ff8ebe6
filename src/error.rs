use thiserror::Error;

/// Errors raised while building an evaluator or reading its untyped inputs.
///
/// A recipe that does not follow the requested diet, or that scores at or
/// below the readiness threshold, is not an error: those cases are reported
/// as `None` by the evaluator.
#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("Expected a diet argument of the form {{\"diet\": \"<id>\"}}, but found {found}")]
    InvalidDietType { found: String },

    #[error("Diet identifiers must not be empty")]
    EmptyDiet,

    #[error("Readiness threshold must be a finite number within 0..=1, got {0}")]
    InvalidThreshold(f64),

    #[error("Failed to parse recipe JSON: {0}")]
    InvalidRecipe(#[source] serde_json::Error),

    #[error("Failed to parse inventory JSON: {0}")]
    InvalidInventory(#[source] serde_json::Error),
}
