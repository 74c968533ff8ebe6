use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Fraction of a recipe's ingredients covered by an inventory, within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct ReadinessScore(f64);

impl ReadinessScore {
    /// Wraps a raw score, clamping it into `0.0..=1.0`. `NaN` and `-0.0` become `0.0`.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            Self(0.0)
        } else {
            // `+ 0.0` normalizes `-0.0`.
            Self(raw.clamp(0.0, 1.0) + 0.0)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

// Scores are never NaN, so a total order is sound.
impl PartialEq for ReadinessScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReadinessScore {}

impl PartialOrd for ReadinessScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReadinessScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialEq<f64> for ReadinessScore {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for ReadinessScore {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for ReadinessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        if rounded.fract() == 0.0 {
            write!(f, "{}", rounded as i64)
        } else {
            write!(f, "{:.3}", rounded)
        }
    }
}

impl From<ReadinessScore> for f64 {
    fn from(score: ReadinessScore) -> Self {
        score.0
    }
}
