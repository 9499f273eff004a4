//! Error types for Fuzzrate

use thiserror::Error;

/// Main error type for Fuzzrate operations
#[derive(Debug, Error)]
pub enum FuzzrateError {
    /// Crisp input was NaN or infinite
    #[error("invalid input for '{variable}': {value} is not finite")]
    InvalidInput { variable: String, value: f64 },

    /// Aggregate curve sums to zero, so the centroid is undefined
    #[error("degenerate aggregate: no rule fired, centroid is undefined")]
    DegenerateAggregate,

    /// Error in model definition (universes, shapes, wiring)
    #[error("model definition error: {0}")]
    ModelDefinition(String),

    /// No crisp value was supplied for an input variable
    #[error("missing input for variable '{0}'")]
    MissingInput(String),

    /// A rule or input references a variable the engine doesn't know
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// A rule references a term its variable doesn't define
    #[error("unknown term '{term}' on variable '{variable}'")]
    UnknownTerm { variable: String, term: String },
}

/// Result type alias for Fuzzrate operations
pub type Result<T> = std::result::Result<T, FuzzrateError>;
