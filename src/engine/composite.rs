//! Composite role score: fixed-weight blend of the rounded sub-scores.

use super::{config::CompositeWeights, stats::to_score, types::SubScores};

pub fn composite_score(scores: &SubScores, weights: &CompositeWeights) -> f64 {
    weights.volume * f64::from(scores.volume)
        + weights.consistency * f64::from(scores.consistency)
        + weights.high_value * f64::from(scores.high_value)
        + weights.momentum * f64::from(scores.momentum)
}

/// Composite rounded half away from zero.
pub fn role_score(scores: &SubScores, weights: &CompositeWeights) -> u8 {
    to_score(composite_score(scores, weights))
}
