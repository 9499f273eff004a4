//! Defuzzification: collapsing an aggregate curve to one crisp value.

use fuzzrate_core::{FuzzrateError, Result, Universe};

/// Policy for defuzzifying an aggregate curve that sums to zero (no rule
/// fired). The centroid is undefined there, and silently producing NaN
/// is never acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefuzzPolicy {
    /// Signal [`FuzzrateError::DegenerateAggregate`].
    #[default]
    Strict,

    /// Fall back to the midpoint of the output universe.
    Midpoint,
}

/// Discrete centroid (center of gravity) of a curve over the universe
/// samples: `Σ(y_i · μ_i) / Σ(μ_i)`.
///
/// Returns `None` when the curve sums to zero, which for degrees in
/// `[0, 1]` means every sample is zero.
pub fn centroid(universe: &Universe, degrees: &[f64]) -> Option<f64> {
    debug_assert_eq!(universe.len(), degrees.len());

    let weight: f64 = degrees.iter().sum();
    if weight == 0.0 {
        return None;
    }
    let moment: f64 = universe
        .samples()
        .iter()
        .zip(degrees)
        .map(|(&y, &mu)| y * mu)
        .sum();
    Some(moment / weight)
}

/// Centroid defuzzification with the degenerate case resolved per
/// `policy`.
///
/// # Errors
///
/// Returns [`FuzzrateError::DegenerateAggregate`] for a zero-sum curve
/// under [`DefuzzPolicy::Strict`].
pub fn defuzz(universe: &Universe, degrees: &[f64], policy: DefuzzPolicy) -> Result<f64> {
    match centroid(universe, degrees) {
        Some(value) => Ok(value),
        None => match policy {
            DefuzzPolicy::Strict => Err(FuzzrateError::DegenerateAggregate),
            DefuzzPolicy::Midpoint => Ok(universe.midpoint()),
        },
    }
}
