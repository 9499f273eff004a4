//! Rule expressions: typed antecedent trees and their consequents.

/// Premise of a fuzzy rule.
///
/// Leaves name a `(variable, term)` pair; branches combine children with
/// fuzzy OR (pointwise max over degrees) or fuzzy AND (min). Built with
/// the [`Antecedent::term`] constructor and the [`or`](Antecedent::or) /
/// [`and`](Antecedent::and) combinators:
///
/// ```
/// use fuzzrate_inference::Antecedent;
///
/// let premise = Antecedent::term("fare", "high").or(Antecedent::term("quality", "low"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Antecedent {
    /// "variable is term"
    Term { variable: String, term: String },
    /// Fuzzy OR: maximum over the children's strengths.
    Any(Vec<Antecedent>),
    /// Fuzzy AND: minimum over the children's strengths.
    All(Vec<Antecedent>),
}

impl Antecedent {
    /// Creates the leaf proposition "`variable` is `term`".
    pub fn term(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Antecedent::Term {
            variable: variable.into(),
            term: term.into(),
        }
    }

    /// Combines with fuzzy OR.
    pub fn or(self, rhs: Antecedent) -> Self {
        Antecedent::Any(vec![self, rhs])
    }

    /// Combines with fuzzy AND.
    pub fn and(self, rhs: Antecedent) -> Self {
        Antecedent::All(vec![self, rhs])
    }
}

/// A Mamdani rule: when the antecedent fires, the output membership
/// function named by `consequent` is clipped at the firing strength.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: Antecedent,
    consequent: String,
}

impl Rule {
    /// Creates a rule mapping an antecedent onto an output term label.
    pub fn new(antecedent: Antecedent, consequent: impl Into<String>) -> Self {
        Rule {
            antecedent,
            consequent: consequent.into(),
        }
    }

    /// The rule's premise.
    #[inline]
    pub fn antecedent(&self) -> &Antecedent {
        &self.antecedent
    }

    /// Label of the output term this rule activates.
    #[inline]
    pub fn consequent(&self) -> &str {
        &self.consequent
    }
}
