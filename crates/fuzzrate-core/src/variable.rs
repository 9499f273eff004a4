//! Linguistic variables: labelled fuzzy sets over one universe.

use crate::membership::{MembershipFunction, Shape};
use crate::universe::Universe;

/// A named collection of membership functions sharing one universe.
///
/// # Examples
///
/// ```
/// use fuzzrate_core::{LinguisticVariable, Shape, Universe};
///
/// let quality = LinguisticVariable::new("quality", Universe::new(0.0, 10.0, 1.0).unwrap())
///     .with_term("low", Shape::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
///     .with_term("medium", Shape::trapezoid(3.0, 4.0, 6.0, 7.0).unwrap())
///     .with_term("high", Shape::trapezoid(6.0, 7.0, 10.0, 10.0).unwrap());
///
/// assert_eq!(quality.terms().len(), 3);
/// assert!(quality.term("medium").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: Vec<MembershipFunction>,
}

impl LinguisticVariable {
    /// Creates a variable with no terms yet.
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        LinguisticVariable {
            name: name.into(),
            universe,
            terms: Vec::new(),
        }
    }

    /// Adds a term, sampling its shape over this variable's universe.
    pub fn with_term(mut self, label: impl Into<String>, shape: Shape) -> Self {
        self.terms
            .push(MembershipFunction::new(label, shape, &self.universe));
        self
    }

    /// Variable name, used to address inputs and rule antecedents.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared universe of this variable's terms.
    #[inline]
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// All terms in insertion order.
    #[inline]
    pub fn terms(&self) -> &[MembershipFunction] {
        &self.terms
    }

    /// Looks up a term by label.
    pub fn term(&self, label: &str) -> Option<&MembershipFunction> {
        self.terms.iter().find(|t| t.label() == label)
    }
}
