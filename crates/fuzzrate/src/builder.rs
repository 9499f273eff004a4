//! Building a runnable engine from a declarative model configuration.

use fuzzrate_config::{AntecedentConfig, DefuzzificationPolicy, ModelConfig, ShapeConfig};
use fuzzrate_core::{FuzzrateError, LinguisticVariable, Result, Shape, Universe};
use fuzzrate_inference::{Antecedent, DefuzzPolicy, MamdaniEngine, Rule};

/// Turns a model description into a Mamdani engine.
///
/// The variable named by `config.output` becomes the output; every other
/// variable becomes an input. Universe and shape numerics are validated
/// here through the core constructors.
///
/// # Errors
///
/// Returns [`FuzzrateError::ModelDefinition`] for invalid universes or
/// breakpoints and [`FuzzrateError::UnknownVariable`] when the output
/// name matches no variable.
pub fn build_engine(config: &ModelConfig) -> Result<MamdaniEngine> {
    let mut output = None;
    let mut inputs = Vec::new();

    for vc in &config.variables {
        let universe = Universe::new(vc.range[0], vc.range[1], vc.step)?;
        let mut variable = LinguisticVariable::new(&vc.name, universe);
        for term in &vc.terms {
            variable = variable.with_term(&term.label, shape(&term.shape)?);
        }
        if vc.name == config.output {
            output = Some(variable);
        } else {
            inputs.push(variable);
        }
    }

    let output = output.ok_or_else(|| FuzzrateError::UnknownVariable(config.output.clone()))?;

    let mut engine = MamdaniEngine::new(output).with_defuzz_policy(policy(config.defuzzification));
    for variable in inputs {
        engine = engine.with_input(variable);
    }
    for rule in &config.rules {
        engine = engine.with_rule(Rule::new(antecedent(&rule.when), &rule.then));
    }
    Ok(engine)
}

fn shape(config: &ShapeConfig) -> Result<Shape> {
    match *config {
        ShapeConfig::Trapezoid([a, b, c, d]) => Shape::trapezoid(a, b, c, d),
        ShapeConfig::Triangle([a, b, c]) => Shape::triangle(a, b, c),
    }
}

fn policy(config: DefuzzificationPolicy) -> DefuzzPolicy {
    match config {
        DefuzzificationPolicy::Strict => DefuzzPolicy::Strict,
        DefuzzificationPolicy::Midpoint => DefuzzPolicy::Midpoint,
    }
}

fn antecedent(config: &AntecedentConfig) -> Antecedent {
    match config {
        AntecedentConfig::Term { variable, term } => Antecedent::term(variable, term),
        AntecedentConfig::Any { any } => Antecedent::Any(any.iter().map(antecedent).collect()),
        AntecedentConfig::All { all } => Antecedent::All(all.iter().map(antecedent).collect()),
    }
}
