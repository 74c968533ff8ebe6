use super::ReadinessEvaluator;
use super::calculator::{IngredientRatio, ReadinessCalculator};
use crate::error::ReadinessError;
use serde::{Deserialize, Serialize};

/// Score at or below which a recipe is reported as not ready.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Plain evaluator settings, deserializable from whatever format the caller
/// keeps its settings in. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    pub threshold: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

pub struct ReadinessEvaluatorBuilder {
    threshold: f64,
    calculator: Box<dyn ReadinessCalculator>,
}

impl ReadinessEvaluatorBuilder {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            calculator: Box::new(IngredientRatio),
        }
    }

    pub fn with_config(mut self, config: ReadinessConfig) -> Self {
        self.threshold = config.threshold;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replaces the scoring rule. Closures of type `Fn(&Recipe, &Inventory) -> f64` work too.
    pub fn calculator(mut self, calculator: impl ReadinessCalculator + 'static) -> Self {
        self.calculator = Box::new(calculator);
        self
    }

    pub fn build(self) -> Result<ReadinessEvaluator, ReadinessError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ReadinessError::InvalidThreshold(self.threshold));
        }
        Ok(ReadinessEvaluator {
            threshold: self.threshold,
            calculator: self.calculator,
        })
    }
}

impl Default for ReadinessEvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
