//! Fuzzrate Inference - the Mamdani pipeline
//!
//! This crate implements the inference stages over the types from
//! `fuzzrate-core`:
//! - Fuzzification: crisp values → per-term membership degrees
//! - Rule evaluation: antecedent expressions combined with fuzzy OR/AND
//!   (max/min), clipped onto output terms (min-implication)
//! - Aggregation: pointwise max across activation curves
//! - Defuzzification: discrete centroid with an explicit policy for
//!   zero-sum aggregates
//!
//! [`MamdaniEngine`] wires the stages together; each call to
//! [`MamdaniEngine::infer`] is a pure computation over immutable state,
//! so one engine can serve any number of calls (or threads) without
//! coordination.

pub mod curve;
pub mod defuzz;
pub mod engine;
pub mod fuzzify;
pub mod rule;

pub use curve::{ActivationCurve, AggregateCurve};
pub use defuzz::{centroid, defuzz, DefuzzPolicy};
pub use engine::{Inputs, InferenceResult, MamdaniEngine};
pub use fuzzify::{fuzzify, interp_membership};
pub use rule::{Antecedent, Rule};
