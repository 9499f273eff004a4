//! Discretized universes of discourse.

use crate::error::{FuzzrateError, Result};

/// An evenly spaced discretization of a closed interval `[min, max]`.
///
/// Every membership function in a linguistic variable is sampled over one
/// universe, so curves produced from the same universe are always
/// index-aligned.
///
/// Invariants (enforced at construction):
/// - samples are strictly increasing
/// - the first sample is exactly `min`, the last exactly `max`
/// - `step` is positive and evenly divides `max - min`
///
/// # Examples
///
/// ```
/// use fuzzrate_core::Universe;
///
/// let fare = Universe::new(0.0, 50.0, 5.0).unwrap();
/// assert_eq!(fare.len(), 11);
/// assert_eq!(fare.samples()[0], 0.0);
/// assert_eq!(fare.samples()[10], 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
    samples: Vec<f64>,
}

/// Relative tolerance for checking that `step` divides the span.
const DIVISIBILITY_TOLERANCE: f64 = 1e-9;

impl Universe {
    /// Creates a universe over `[min, max]` sampled every `step`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzrateError::ModelDefinition`] if the bounds are not
    /// finite, `max <= min`, `step <= 0`, or `step` does not evenly
    /// divide `max - min`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(FuzzrateError::ModelDefinition(format!(
                "universe bounds must be finite, got [{min}, {max}] step {step}"
            )));
        }
        if max <= min {
            return Err(FuzzrateError::ModelDefinition(format!(
                "universe max ({max}) must exceed min ({min})"
            )));
        }
        if step <= 0.0 {
            return Err(FuzzrateError::ModelDefinition(format!(
                "universe step must be positive, got {step}"
            )));
        }

        let span = max - min;
        let intervals = (span / step).round();
        if (intervals * step - span).abs() > DIVISIBILITY_TOLERANCE * span.max(1.0) {
            return Err(FuzzrateError::ModelDefinition(format!(
                "step {step} does not evenly divide [{min}, {max}]"
            )));
        }

        let len = intervals as usize + 1;
        let mut samples: Vec<f64> = (0..len).map(|i| min + step * i as f64).collect();
        // The last sample is pinned so the closed-interval invariant holds
        // exactly even when `min + step * n` accumulates rounding error.
        samples[len - 1] = max;

        Ok(Universe {
            min,
            max,
            step,
            samples,
        })
    }

    /// Lower bound of the interval.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the interval.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Spacing between consecutive samples.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples (intervals + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A universe always holds at least two samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The ordered sample points.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Midpoint of the interval, used as the fallback defuzzification
    /// value for degenerate aggregates.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Clamps a crisp value to the interval.
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}
