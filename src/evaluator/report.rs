use crate::recipe::Recipe;
use crate::score::ReadinessScore;
use serde::Serialize;
use std::fmt;

/// How a single readiness evaluation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "score", rename_all = "snake_case")]
pub enum Outcome {
    /// The recipe follows the diet and scored above the threshold.
    Ready(ReadinessScore),
    /// The recipe does not follow the requested diet. No score was computed.
    DietMismatch,
    /// The recipe follows the diet but scored at or below the threshold.
    BelowThreshold(ReadinessScore),
}

impl Outcome {
    pub fn score(self) -> Option<ReadinessScore> {
        match self {
            Outcome::Ready(score) => Some(score),
            Outcome::DietMismatch | Outcome::BelowThreshold(_) => None,
        }
    }
}

/// The full explanation of an evaluation, as produced by
/// [`ReadinessEvaluator::explain`](super::ReadinessEvaluator::explain).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessReport {
    pub outcome: Outcome,
    pub threshold: f64,
    /// Distinct required ingredients with at least one unit in stock.
    pub available: Vec<String>,
    /// Distinct required ingredients with no stock.
    pub missing: Vec<String>,
}

impl ReadinessReport {
    /// The score that `get_readiness` returns for the same inputs.
    pub fn score(&self) -> Option<ReadinessScore> {
        self.outcome.score()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.outcome, Outcome::Ready(_))
    }
}

impl fmt::Display for ReadinessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Ready(score) => write!(f, "ready (score {})", score)?,
            Outcome::DietMismatch => return write!(f, "does not follow the requested diet"),
            Outcome::BelowThreshold(score) => write!(
                f,
                "not ready (score {} <= threshold {})",
                score, self.threshold
            )?,
        }
        if !self.missing.is_empty() {
            write!(f, "; missing: {}", self.missing.join(", "))?;
        }
        Ok(())
    }
}

/// A recipe that passed evaluation, paired with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRecipe<'r> {
    pub recipe: &'r Recipe,
    pub score: ReadinessScore,
}
