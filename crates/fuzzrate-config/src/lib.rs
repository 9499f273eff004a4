//! Configuration system for Fuzzrate.
//!
//! Describe a complete fuzzy model - variables, terms, rules, output,
//! defuzzification policy - in TOML or YAML and load it without code
//! changes. The facade crate turns a `ModelConfig` into a runnable
//! engine.
//!
//! # Examples
//!
//! Load a model from a TOML string:
//!
//! ```
//! use fuzzrate_config::ModelConfig;
//!
//! let config = ModelConfig::from_toml_str(r#"
//!     output = "risk"
//!
//!     [[variables]]
//!     name = "load"
//!     range = [0.0, 100.0]
//!     step = 10.0
//!
//!     [[variables.terms]]
//!     label = "high"
//!     shape = "trapezoid"
//!     points = [50.0, 80.0, 100.0, 100.0]
//!
//!     [[variables]]
//!     name = "risk"
//!     range = [0.0, 10.0]
//!     step = 1.0
//!
//!     [[variables.terms]]
//!     label = "high"
//!     shape = "trapezoid"
//!     points = [6.0, 7.0, 10.0, 10.0]
//!
//!     [[rules]]
//!     when = { variable = "load", term = "high" }
//!     then = "high"
//! "#).unwrap();
//!
//! assert_eq!(config.output, "risk");
//! assert_eq!(config.variables.len(), 2);
//! ```
//!
//! Use the shipped driver-rating model when no file is given:
//!
//! ```
//! use fuzzrate_config::ModelConfig;
//!
//! let config = ModelConfig::load("model.toml").unwrap_or_else(|_| ModelConfig::driver_rating());
//! assert_eq!(config.output, "rating");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A complete declarative fuzzy model.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ModelConfig {
    /// Name of the output variable; must match one of `variables`.
    pub output: String,

    /// Policy for a zero-sum aggregate at defuzzification.
    #[serde(default)]
    pub defuzzification: DefuzzificationPolicy,

    /// All variables, inputs and output alike.
    #[serde(default)]
    pub variables: Vec<VariableConfig>,

    /// The rule base.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl ModelConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped driver-rating model: fare and ride quality in, a 0-10
    /// driver rating out, three rules. This is the authoritative code
    /// form of the model; the TOML form in the demo stays in lockstep
    /// with it (covered by tests).
    pub fn driver_rating() -> Self {
        ModelConfig {
            output: "rating".into(),
            defuzzification: DefuzzificationPolicy::Strict,
            variables: vec![
                VariableConfig {
                    name: "fare".into(),
                    range: [0.0, 50.0],
                    step: 5.0,
                    terms: vec![
                        TermConfig {
                            label: "low".into(),
                            shape: ShapeConfig::Trapezoid([0.0, 0.0, 10.0, 15.0]),
                        },
                        TermConfig {
                            label: "medium".into(),
                            shape: ShapeConfig::Triangle([15.0, 25.0, 35.0]),
                        },
                        TermConfig {
                            label: "high".into(),
                            shape: ShapeConfig::Trapezoid([35.0, 40.0, 50.0, 50.0]),
                        },
                    ],
                },
                VariableConfig {
                    name: "quality".into(),
                    range: [0.0, 10.0],
                    step: 1.0,
                    terms: vec![
                        TermConfig {
                            label: "low".into(),
                            shape: ShapeConfig::Trapezoid([0.0, 0.0, 2.0, 4.0]),
                        },
                        TermConfig {
                            label: "medium".into(),
                            shape: ShapeConfig::Trapezoid([3.0, 4.0, 6.0, 7.0]),
                        },
                        TermConfig {
                            label: "high".into(),
                            shape: ShapeConfig::Trapezoid([6.0, 7.0, 10.0, 10.0]),
                        },
                    ],
                },
                VariableConfig {
                    name: "rating".into(),
                    range: [0.0, 10.0],
                    step: 1.0,
                    terms: vec![
                        TermConfig {
                            label: "low".into(),
                            shape: ShapeConfig::Trapezoid([0.0, 0.0, 2.0, 4.0]),
                        },
                        TermConfig {
                            label: "medium".into(),
                            shape: ShapeConfig::Trapezoid([3.0, 4.0, 6.0, 7.0]),
                        },
                        TermConfig {
                            label: "high".into(),
                            shape: ShapeConfig::Trapezoid([6.0, 7.0, 10.0, 10.0]),
                        },
                    ],
                },
            ],
            rules: vec![
                RuleConfig {
                    when: AntecedentConfig::Any {
                        any: vec![
                            AntecedentConfig::term("fare", "high"),
                            AntecedentConfig::term("quality", "low"),
                        ],
                    },
                    then: "low".into(),
                },
                RuleConfig {
                    when: AntecedentConfig::term("quality", "medium"),
                    then: "medium".into(),
                },
                RuleConfig {
                    when: AntecedentConfig::Any {
                        any: vec![
                            AntecedentConfig::term("quality", "high"),
                            AntecedentConfig::term("fare", "low"),
                        ],
                    },
                    then: "high".into(),
                },
            ],
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the output variable name.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the defuzzification policy.
    pub fn with_defuzzification(mut self, policy: DefuzzificationPolicy) -> Self {
        self.defuzzification = policy;
        self
    }

    /// Adds a variable.
    pub fn with_variable(mut self, variable: VariableConfig) -> Self {
        self.variables.push(variable);
        self
    }

    /// Adds a rule.
    pub fn with_rule(mut self, rule: RuleConfig) -> Self {
        self.rules.push(rule);
        self
    }

    /// Checks structural completeness: an output that exists among the
    /// variables, at least one input, at least one rule, and no
    /// termless variables. Shape and universe numerics are validated
    /// when the model is built into an engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.is_empty() {
            return Err(ConfigError::Invalid("no output variable named".into()));
        }
        if !self.variables.iter().any(|v| v.name == self.output) {
            return Err(ConfigError::Invalid(format!(
                "output '{}' is not among the variables",
                self.output
            )));
        }
        if self.variables.len() < 2 {
            return Err(ConfigError::Invalid(
                "model needs at least one input variable besides the output".into(),
            ));
        }
        if self.rules.is_empty() {
            return Err(ConfigError::Invalid("model has no rules".into()));
        }
        for variable in &self.variables {
            if variable.terms.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "variable '{}' has no terms",
                    variable.name
                )));
            }
        }
        Ok(())
    }
}

/// Policy for a zero-sum aggregate curve at defuzzification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzificationPolicy {
    /// Fail with a degenerate-aggregate error.
    #[default]
    Strict,

    /// Fall back to the output universe midpoint.
    Midpoint,
}

/// One linguistic variable: a sampled range plus labelled terms.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct VariableConfig {
    /// Variable name, referenced by inputs and rules.
    pub name: String,

    /// Closed interval `[min, max]` of the universe.
    pub range: [f64; 2],

    /// Sample spacing over the range.
    pub step: f64,

    /// Labelled membership functions.
    #[serde(default)]
    pub terms: Vec<TermConfig>,
}

/// One labelled membership function.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TermConfig {
    /// Term label, referenced by rules.
    pub label: String,

    /// Breakpoint shape.
    #[serde(flatten)]
    pub shape: ShapeConfig,
}

/// Membership shape as breakpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "shape", content = "points", rename_all = "snake_case")]
pub enum ShapeConfig {
    /// Trapezoid breakpoints `[a, b, c, d]`.
    Trapezoid([f64; 4]),

    /// Triangle breakpoints `[a, b, c]`.
    Triangle([f64; 3]),
}

/// One rule: an antecedent tree and the output term it activates.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleConfig {
    /// The premise.
    pub when: AntecedentConfig,

    /// Label of the output term.
    pub then: String,
}

/// Antecedent tree: a leaf proposition, or a fuzzy OR/AND over children.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged, rename_all = "snake_case")]
pub enum AntecedentConfig {
    /// "variable is term"
    Term { variable: String, term: String },

    /// Fuzzy OR (max) over children.
    Any { any: Vec<AntecedentConfig> },

    /// Fuzzy AND (min) over children.
    All { all: Vec<AntecedentConfig> },
}

impl AntecedentConfig {
    /// Leaf proposition "`variable` is `term`".
    pub fn term(variable: impl Into<String>, term: impl Into<String>) -> Self {
        AntecedentConfig::Term {
            variable: variable.into(),
            term: term.into(),
        }
    }
}
