//! Fuzzification: evaluating crisp inputs against discretized membership
//! functions.

use fuzzrate_core::{LinguisticVariable, Universe};

/// Membership degree of a crisp value on a discretized curve, by linear
/// interpolation between the two bracketing universe samples.
///
/// Values outside the universe clamp to the boundary sample's degree; no
/// extrapolation. `degrees` must hold one entry per universe sample.
///
/// # Examples
///
/// ```
/// use fuzzrate_core::Universe;
/// use fuzzrate_inference::interp_membership;
///
/// let u = Universe::new(0.0, 10.0, 1.0).unwrap();
/// let degrees = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
/// assert_eq!(interp_membership(&u, &degrees, 3.5), 0.5);
/// assert_eq!(interp_membership(&u, &degrees, -2.0), 0.0);
/// ```
pub fn interp_membership(universe: &Universe, degrees: &[f64], x: f64) -> f64 {
    let samples = universe.samples();
    debug_assert_eq!(samples.len(), degrees.len());

    if x <= samples[0] {
        return degrees[0];
    }
    let last = samples.len() - 1;
    if x >= samples[last] {
        return degrees[last];
    }

    for i in 0..last {
        let (x1, x2) = (samples[i], samples[i + 1]);
        if x <= x2 {
            let t = (x - x1) / (x2 - x1);
            return degrees[i] + t * (degrees[i + 1] - degrees[i]);
        }
    }

    degrees[last]
}

/// Evaluates a crisp value against every term of a variable, yielding one
/// degree per term label.
pub fn fuzzify<'v>(variable: &'v LinguisticVariable, x: f64) -> Vec<(&'v str, f64)> {
    variable
        .terms()
        .iter()
        .map(|term| {
            (
                term.label(),
                interp_membership(variable.universe(), term.degrees(), x),
            )
        })
        .collect()
}
