//! Membership function shapes and their discretized samples.

use crate::error::{FuzzrateError, Result};
use crate::universe::Universe;

/// Breakpoint shape of a membership function.
///
/// Both shapes are piecewise linear: degree 0 outside the support, 1 on
/// the plateau, linear ramps between. A triangle is the degenerate
/// trapezoid whose plateau is a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Trapezoid with breakpoints `a <= b <= c <= d`; plateau on `[b, c]`.
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
    /// Triangle with breakpoints `a <= b <= c`; peak at `b`.
    Triangle { a: f64, b: f64, c: f64 },
}

impl Shape {
    /// Creates a trapezoid shape.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzrateError::ModelDefinition`] if the breakpoints are
    /// not finite or not in `a <= b <= c <= d` order.
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        if ![a, b, c, d].iter().all(|v| v.is_finite()) {
            return Err(FuzzrateError::ModelDefinition(format!(
                "trapezoid breakpoints must be finite, got [{a}, {b}, {c}, {d}]"
            )));
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzrateError::ModelDefinition(format!(
                "trapezoid breakpoints must be ordered a <= b <= c <= d, got [{a}, {b}, {c}, {d}]"
            )));
        }
        Ok(Shape::Trapezoid { a, b, c, d })
    }

    /// Creates a triangle shape.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzrateError::ModelDefinition`] if the breakpoints are
    /// not finite or not in `a <= b <= c` order.
    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self> {
        if ![a, b, c].iter().all(|v| v.is_finite()) {
            return Err(FuzzrateError::ModelDefinition(format!(
                "triangle breakpoints must be finite, got [{a}, {b}, {c}]"
            )));
        }
        if !(a <= b && b <= c) {
            return Err(FuzzrateError::ModelDefinition(format!(
                "triangle breakpoints must be ordered a <= b <= c, got [{a}, {b}, {c}]"
            )));
        }
        Ok(Shape::Triangle { a, b, c })
    }

    /// Evaluates the membership degree at a crisp point.
    ///
    /// The plateau test runs first so degenerate shoulders (`a == b` or
    /// `c == d`) evaluate to 1 at the interval boundary rather than
    /// falling into a zero-width ramp.
    pub fn degree(&self, x: f64) -> f64 {
        let (a, b, c, d) = match *self {
            Shape::Trapezoid { a, b, c, d } => (a, b, c, d),
            Shape::Triangle { a, b, c } => (a, b, b, c),
        };

        if x >= b && x <= c {
            1.0
        } else if x <= a || x >= d {
            0.0
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (d - x) / (d - c)
        }
    }
}

/// A labelled membership function discretized over a universe.
///
/// Holds one degree per universe sample, so same-universe functions are
/// always index-aligned for pointwise curve operations.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipFunction {
    label: String,
    shape: Shape,
    degrees: Vec<f64>,
}

impl MembershipFunction {
    /// Samples `shape` over every point of `universe`.
    pub fn new(label: impl Into<String>, shape: Shape, universe: &Universe) -> Self {
        let degrees = universe.samples().iter().map(|&x| shape.degree(x)).collect();
        MembershipFunction {
            label: label.into(),
            shape,
            degrees,
        }
    }

    /// Display label of the fuzzy set (reporting only, never control flow).
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The breakpoint shape this function was sampled from.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Degrees at the universe samples, all in `[0, 1]`.
    #[inline]
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }
}
