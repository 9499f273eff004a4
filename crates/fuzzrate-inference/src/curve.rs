//! Activation and aggregate curves over the output universe.

use fuzzrate_core::MembershipFunction;

/// An output membership function clipped at a rule's firing strength
/// (Mamdani min-implication). Ephemeral: built fresh per inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationCurve {
    degrees: Vec<f64>,
}

impl ActivationCurve {
    /// Clips `mf` at `strength`, pointwise `min(strength, degree)`.
    pub fn clip(mf: &MembershipFunction, strength: f64) -> Self {
        ActivationCurve {
            degrees: mf.degrees().iter().map(|&d| d.min(strength)).collect(),
        }
    }

    /// Clipped degrees, index-aligned with the output universe.
    #[inline]
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }
}

/// Pointwise maximum across activation curves. Starts at all zeros, so
/// aggregating nothing (or only zero-strength activations) yields the
/// all-zero curve the defuzzifier treats as degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateCurve {
    degrees: Vec<f64>,
}

impl AggregateCurve {
    /// All-zero curve over `len` output samples.
    pub fn new(len: usize) -> Self {
        AggregateCurve {
            degrees: vec![0.0; len],
        }
    }

    /// Merges an activation curve in, sample by sample.
    pub fn include(&mut self, activation: &ActivationCurve) {
        debug_assert_eq!(self.degrees.len(), activation.degrees().len());
        for (agg, &act) in self.degrees.iter_mut().zip(activation.degrees()) {
            *agg = agg.max(act);
        }
    }

    /// Aggregated degrees, index-aligned with the output universe.
    #[inline]
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Consumes the curve, returning its degrees.
    #[inline]
    pub fn into_degrees(self) -> Vec<f64> {
        self.degrees
    }
}
