//! The Mamdani inference engine: wiring fuzzification, rule evaluation,
//! aggregation, and defuzzification into one call.

use std::collections::HashMap;

use rayon::prelude::*;

use fuzzrate_core::{FuzzrateError, LinguisticVariable, Result};

use crate::curve::{ActivationCurve, AggregateCurve};
use crate::defuzz::{defuzz, DefuzzPolicy};
use crate::fuzzify::{fuzzify, interp_membership};
use crate::rule::{Antecedent, Rule};

/// Crisp input values keyed by variable name.
///
/// # Examples
///
/// ```
/// use fuzzrate_inference::Inputs;
///
/// let inputs = Inputs::new().with("fare", 25.0).with("quality", 5.0);
/// assert_eq!(inputs.get("fare"), Some(25.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inputs(HashMap<String, f64>);

impl Inputs {
    /// Creates an empty input set.
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Adds a value, chaining.
    pub fn with(mut self, variable: impl Into<String>, value: f64) -> Self {
        self.set(variable, value);
        self
    }

    /// Adds or replaces a value.
    pub fn set(&mut self, variable: impl Into<String>, value: f64) {
        self.0.insert(variable.into(), value);
    }

    /// Looks up a value by variable name.
    pub fn get(&self, variable: &str) -> Option<f64> {
        self.0.get(variable).copied()
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

/// Outcome of one inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceResult {
    /// Centroid of the aggregate curve: the crisp output value.
    pub crisp: f64,
    /// Aggregated degrees over the output universe, for display.
    pub aggregate: Vec<f64>,
    /// Membership of the aggregate at `crisp`, for display.
    pub activation: f64,
}

/// A Mamdani fuzzy inference engine.
///
/// Owns the input variables, the output variable, the rule base, and the
/// defuzzification policy. Inference is a pure function of the engine and
/// its inputs: no state is retained between calls, so a shared engine can
/// evaluate concurrently without locking.
///
/// # Examples
///
/// ```
/// use fuzzrate_core::{LinguisticVariable, Shape, Universe};
/// use fuzzrate_inference::{Antecedent, Inputs, MamdaniEngine, Rule};
///
/// let speed = LinguisticVariable::new("speed", Universe::new(0.0, 100.0, 10.0).unwrap())
///     .with_term("slow", Shape::trapezoid(0.0, 0.0, 20.0, 50.0).unwrap())
///     .with_term("fast", Shape::trapezoid(50.0, 80.0, 100.0, 100.0).unwrap());
/// let danger = LinguisticVariable::new("danger", Universe::new(0.0, 10.0, 1.0).unwrap())
///     .with_term("low", Shape::trapezoid(0.0, 0.0, 3.0, 5.0).unwrap())
///     .with_term("high", Shape::trapezoid(5.0, 7.0, 10.0, 10.0).unwrap());
///
/// let engine = MamdaniEngine::new(danger)
///     .with_input(speed)
///     .with_rule(Rule::new(Antecedent::term("speed", "slow"), "low"))
///     .with_rule(Rule::new(Antecedent::term("speed", "fast"), "high"));
///
/// let result = engine.infer(&Inputs::new().with("speed", 10.0)).unwrap();
/// assert!(result.crisp < 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct MamdaniEngine {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: Vec<Rule>,
    policy: DefuzzPolicy,
}

impl MamdaniEngine {
    /// Creates an engine producing values over `output`'s universe.
    pub fn new(output: LinguisticVariable) -> Self {
        MamdaniEngine {
            inputs: Vec::new(),
            output,
            rules: Vec::new(),
            policy: DefuzzPolicy::default(),
        }
    }

    /// Adds an input variable.
    pub fn with_input(mut self, variable: LinguisticVariable) -> Self {
        self.inputs.push(variable);
        self
    }

    /// Adds a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the degenerate-aggregate policy (default: [`DefuzzPolicy::Strict`]).
    pub fn with_defuzz_policy(mut self, policy: DefuzzPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The output variable.
    #[inline]
    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    /// Input variables in insertion order.
    #[inline]
    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    /// Looks up an input variable by name.
    pub fn input(&self, name: &str) -> Option<&LinguisticVariable> {
        self.inputs.iter().find(|v| v.name() == name)
    }

    /// The rule base in insertion order.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs the full pipeline for one set of crisp inputs.
    ///
    /// # Errors
    ///
    /// - [`FuzzrateError::InvalidInput`] for NaN or infinite values
    /// - [`FuzzrateError::MissingInput`] when an input variable got no value
    /// - [`FuzzrateError::UnknownVariable`] / [`FuzzrateError::UnknownTerm`]
    ///   when inputs or rules reference names the model doesn't define
    /// - [`FuzzrateError::DegenerateAggregate`] when no rule fires under
    ///   the [`DefuzzPolicy::Strict`] policy
    pub fn infer(&self, inputs: &Inputs) -> Result<InferenceResult> {
        for (name, _) in inputs.iter() {
            if self.input(name).is_none() {
                return Err(FuzzrateError::UnknownVariable(name.to_string()));
            }
        }

        // Fuzzification: one degree per (variable, term).
        let mut table: HashMap<&str, HashMap<&str, f64>> = HashMap::with_capacity(self.inputs.len());
        for variable in &self.inputs {
            let value = inputs
                .get(variable.name())
                .ok_or_else(|| FuzzrateError::MissingInput(variable.name().to_string()))?;
            if !value.is_finite() {
                return Err(FuzzrateError::InvalidInput {
                    variable: variable.name().to_string(),
                    value,
                });
            }
            table.insert(variable.name(), fuzzify(variable, value).into_iter().collect());
        }

        // Rule evaluation and aggregation.
        let mut aggregate = AggregateCurve::new(self.output.universe().len());
        for rule in &self.rules {
            let strength = self.strength(rule.antecedent(), &table)?;
            let consequent = self.output.term(rule.consequent()).ok_or_else(|| {
                FuzzrateError::UnknownTerm {
                    variable: self.output.name().to_string(),
                    term: rule.consequent().to_string(),
                }
            })?;
            tracing::debug!(
                consequent = rule.consequent(),
                strength,
                "rule activation"
            );
            aggregate.include(&ActivationCurve::clip(consequent, strength));
        }

        // Defuzzification.
        let crisp = defuzz(self.output.universe(), aggregate.degrees(), self.policy)?;
        let activation = interp_membership(self.output.universe(), aggregate.degrees(), crisp);

        Ok(InferenceResult {
            crisp,
            aggregate: aggregate.into_degrees(),
            activation,
        })
    }

    /// Evaluates independent input sets in parallel.
    ///
    /// Each item yields its own `Result`; result order matches input
    /// order.
    pub fn infer_batch(&self, batches: &[Inputs]) -> Vec<Result<InferenceResult>> {
        batches.par_iter().map(|inputs| self.infer(inputs)).collect()
    }

    /// Firing strength of an antecedent from the fuzzified degree table.
    fn strength(
        &self,
        antecedent: &Antecedent,
        table: &HashMap<&str, HashMap<&str, f64>>,
    ) -> Result<f64> {
        match antecedent {
            Antecedent::Term { variable, term } => {
                let degrees = table
                    .get(variable.as_str())
                    .ok_or_else(|| FuzzrateError::UnknownVariable(variable.clone()))?;
                degrees
                    .get(term.as_str())
                    .copied()
                    .ok_or_else(|| FuzzrateError::UnknownTerm {
                        variable: variable.clone(),
                        term: term.clone(),
                    })
            }
            Antecedent::Any(children) => children.iter().try_fold(0.0_f64, |acc, child| {
                Ok(acc.max(self.strength(child, table)?))
            }),
            Antecedent::All(children) => children.iter().try_fold(1.0_f64, |acc, child| {
                Ok(acc.min(self.strength(child, table)?))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzrate_core::{Shape, Universe};

    fn heat_engine() -> MamdaniEngine {
        let temperature =
            LinguisticVariable::new("temperature", Universe::new(0.0, 40.0, 4.0).unwrap())
                .with_term("cold", Shape::trapezoid(0.0, 0.0, 8.0, 16.0).unwrap())
                .with_term("hot", Shape::trapezoid(24.0, 32.0, 40.0, 40.0).unwrap());
        let power = LinguisticVariable::new("power", Universe::new(0.0, 10.0, 1.0).unwrap())
            .with_term("low", Shape::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
            .with_term("high", Shape::trapezoid(6.0, 8.0, 10.0, 10.0).unwrap());

        MamdaniEngine::new(power)
            .with_input(temperature)
            .with_rule(Rule::new(Antecedent::term("temperature", "cold"), "high"))
            .with_rule(Rule::new(Antecedent::term("temperature", "hot"), "low"))
    }

    #[test]
    fn test_cold_demands_high_power() {
        let result = heat_engine()
            .infer(&Inputs::new().with("temperature", 2.0))
            .unwrap();
        // power-high trapezoid at full strength: samples 7 at 0.5, 8..10 at 1.
        let expected = (7.0 * 0.5 + 8.0 + 9.0 + 10.0) / 3.5;
        assert!((result.crisp - expected).abs() < 1e-12);
        assert_eq!(result.activation, 1.0);
    }

    #[test]
    fn test_inference_is_deterministic() {
        let engine = heat_engine();
        let inputs = Inputs::new().with("temperature", 27.5);
        let a = engine.infer(&inputs).unwrap();
        let b = engine.infer(&inputs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_input() {
        let err = heat_engine().infer(&Inputs::new()).unwrap_err();
        assert!(matches!(err, FuzzrateError::MissingInput(_)));
    }

    #[test]
    fn test_non_finite_input() {
        let err = heat_engine()
            .infer(&Inputs::new().with("temperature", f64::NAN))
            .unwrap_err();
        assert!(matches!(err, FuzzrateError::InvalidInput { .. }));
    }

    #[test]
    fn test_unknown_input_variable() {
        let err = heat_engine()
            .infer(&Inputs::new().with("temperature", 5.0).with("humidity", 0.4))
            .unwrap_err();
        assert!(matches!(err, FuzzrateError::UnknownVariable(_)));
    }

    #[test]
    fn test_unknown_consequent_term() {
        let engine = heat_engine().with_rule(Rule::new(
            Antecedent::term("temperature", "cold"),
            "turbo",
        ));
        let err = engine
            .infer(&Inputs::new().with("temperature", 2.0))
            .unwrap_err();
        assert!(matches!(err, FuzzrateError::UnknownTerm { .. }));
    }

    #[test]
    fn test_no_rule_fires_strict() {
        // 20.0 sits in the gap between the cold and hot supports.
        let err = heat_engine()
            .infer(&Inputs::new().with("temperature", 20.0))
            .unwrap_err();
        assert!(matches!(err, FuzzrateError::DegenerateAggregate));
    }

    #[test]
    fn test_no_rule_fires_midpoint() {
        let result = heat_engine()
            .with_defuzz_policy(DefuzzPolicy::Midpoint)
            .infer(&Inputs::new().with("temperature", 20.0))
            .unwrap();
        assert_eq!(result.crisp, 5.0);
        assert_eq!(result.activation, 0.0);
    }

    #[test]
    fn test_or_takes_max_and_takes_min() {
        let engine = MamdaniEngine::new(
            LinguisticVariable::new("out", Universe::new(0.0, 10.0, 1.0).unwrap())
                .with_term("mid", Shape::trapezoid(3.0, 4.0, 6.0, 7.0).unwrap()),
        )
        .with_input(
            LinguisticVariable::new("a", Universe::new(0.0, 10.0, 1.0).unwrap())
                .with_term("x", Shape::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
                .with_term("y", Shape::trapezoid(2.0, 4.0, 10.0, 10.0).unwrap()),
        );

        // At a = 2.5 the discretized ramps give x = 0.75 and y = 0.25.
        let probe = |antecedent: Antecedent, expected: f64| {
            let engine = engine.clone().with_rule(Rule::new(antecedent, "mid"));
            let result = engine.infer(&Inputs::new().with("a", 2.5)).unwrap();
            let peak = result.aggregate.iter().cloned().fold(0.0_f64, f64::max);
            assert!((peak - expected).abs() < 1e-12);
        };

        probe(
            Antecedent::term("a", "x").or(Antecedent::term("a", "y")),
            0.75,
        );
        probe(
            Antecedent::term("a", "x").and(Antecedent::term("a", "y")),
            0.25,
        );
    }

    #[test]
    fn test_batch_matches_sequential() {
        let engine = heat_engine();
        let batch: Vec<Inputs> = [0.0, 10.0, 30.0, 40.0]
            .iter()
            .map(|&t| Inputs::new().with("temperature", t))
            .collect();

        let parallel = engine.infer_batch(&batch);
        for (inputs, result) in batch.iter().zip(parallel) {
            match (engine.infer(inputs), result) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                other => panic!("batch diverged from sequential: {other:?}"),
            }
        }
    }
}
