//! Fuzzrate - Mamdani fuzzy inference in Rust
//!
//! Rate a ride: fuzzify fare and ride quality against trapezoidal
//! membership functions, fire a fixed rule base with fuzzy OR/AND
//! (max/min), aggregate with pointwise max, and defuzzify the result via
//! the centroid method.
//!
//! # Example
//!
//! ```
//! use fuzzrate::DriverRatingModel;
//!
//! let model = DriverRatingModel::new();
//! let result = model.rate(25.0, 5.0).unwrap();
//!
//! assert!((result.rating - 5.0).abs() < 1e-9);
//! ```
//!
//! The generic engine behind the shipped model is available for custom
//! models, either in code ([`MamdaniEngine`]) or declaratively from
//! TOML/YAML ([`ModelConfig`] + [`build_engine`]).

// Core types
pub use fuzzrate_core::{
    FuzzrateError, LinguisticVariable, MembershipFunction, Result, Shape, Universe,
};

// Inference pipeline
pub use fuzzrate_inference::{
    centroid, interp_membership, Antecedent, DefuzzPolicy, InferenceResult, Inputs, MamdaniEngine,
    Rule,
};

// Declarative model configuration
pub use fuzzrate_config::{ConfigError, ModelConfig};

mod builder;
mod driver;

pub use builder::build_engine;
pub use driver::{DriverRatingModel, RatingResult};

pub mod prelude {
    pub use super::{
        build_engine, Antecedent, DefuzzPolicy, DriverRatingModel, Inputs, LinguisticVariable,
        MamdaniEngine, ModelConfig, RatingResult, Rule, Shape, Universe,
    };
}
