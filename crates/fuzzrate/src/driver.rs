//! The shipped driver-rating model: fare and ride quality in, a 0-10
//! driver rating out.

use fuzzrate_config::ModelConfig;
use fuzzrate_core::Result;
use fuzzrate_inference::{Inputs, MamdaniEngine};

use crate::builder::build_engine;

/// Crisp outcome of rating one ride.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingResult {
    /// Driver rating in `[0, 10]`.
    pub rating: f64,
    /// Aggregate curve over the rating universe, for display.
    pub aggregate: Vec<f64>,
    /// Membership of the aggregate at `rating`, for display.
    pub activation: f64,
}

/// The fixed fare/quality model behind [`rate`](DriverRatingModel::rate).
///
/// Rule base:
/// 1. fare is high OR quality is low, then rating is low
/// 2. quality is medium, then rating is medium
/// 3. quality is high OR fare is low, then rating is high
///
/// Out-of-range inputs clamp to the fare `[0, 50]` and quality `[0, 10]`
/// universes; NaN and infinite inputs are rejected.
///
/// # Examples
///
/// ```
/// use fuzzrate::DriverRatingModel;
///
/// let model = DriverRatingModel::new();
/// assert!(model.rate(0.0, 10.0).unwrap().rating > 8.0);
/// assert!(model.rate(50.0, 0.0).unwrap().rating < 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct DriverRatingModel {
    engine: MamdaniEngine,
}

impl DriverRatingModel {
    /// Builds the fixed model.
    pub fn new() -> Self {
        let engine = build_engine(&ModelConfig::driver_rating())
            .expect("shipped driver-rating model is valid");
        DriverRatingModel { engine }
    }

    /// Rates one ride.
    ///
    /// # Errors
    ///
    /// Returns [`fuzzrate_core::FuzzrateError::InvalidInput`] when fare
    /// or quality is NaN or infinite. The rule base covers the whole
    /// clamped input plane, so every finite input produces a rating.
    pub fn rate(&self, fare: f64, quality: f64) -> Result<RatingResult> {
        let inputs = Inputs::new().with("fare", fare).with("quality", quality);
        let result = self.engine.infer(&inputs)?;
        Ok(RatingResult {
            rating: result.crisp,
            aggregate: result.aggregate,
            activation: result.activation,
        })
    }

    /// Rates many rides in parallel; result order matches input order.
    pub fn rate_all(&self, rides: &[(f64, f64)]) -> Vec<Result<RatingResult>> {
        let batches: Vec<Inputs> = rides
            .iter()
            .map(|&(fare, quality)| Inputs::new().with("fare", fare).with("quality", quality))
            .collect();
        self.engine
            .infer_batch(&batches)
            .into_iter()
            .map(|result| {
                result.map(|r| RatingResult {
                    rating: r.crisp,
                    aggregate: r.aggregate,
                    activation: r.activation,
                })
            })
            .collect()
    }

    /// The underlying engine, for consumers that want the membership
    /// functions themselves (e.g. visualization).
    #[inline]
    pub fn engine(&self) -> &MamdaniEngine {
        &self.engine
    }
}

impl Default for DriverRatingModel {
    fn default() -> Self {
        Self::new()
    }
}
