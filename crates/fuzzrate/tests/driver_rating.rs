//! End-to-end tests of the shipped driver-rating model.

use fuzzrate::prelude::*;

#[test]
fn test_best_ride_rates_high() {
    let model = DriverRatingModel::new();
    let result = model.rate(0.0, 10.0).unwrap();

    // Only rule 3 fires, at full strength, so the aggregate is the whole
    // rating-high trapezoid: samples 7..=10 at degree 1.
    assert!((result.rating - 8.5).abs() < 1e-9);
    assert_eq!(
        result.aggregate,
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]
    );
}

#[test]
fn test_worst_ride_rates_low() {
    let model = DriverRatingModel::new();
    let result = model.rate(50.0, 0.0).unwrap();

    // Only rule 1 fires, at full strength: rating-low has samples 0..=2
    // at degree 1 and sample 3 at 0.5.
    let expected = (1.0 + 2.0 + 3.0 * 0.5) / 3.5;
    assert!((result.rating - expected).abs() < 1e-9);
    assert!(result.rating > 1.0 && result.rating < 3.0);
}

#[test]
fn test_medium_ride_rates_medium() {
    let model = DriverRatingModel::new();
    let result = model.rate(25.0, 5.0).unwrap();
    assert!((result.rating - 5.0).abs() < 1e-9);
}

#[test]
fn test_rating_is_deterministic() {
    let model = DriverRatingModel::new();
    let a = model.rate(17.3, 6.8).unwrap();
    let b = model.rate(17.3, 6.8).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_out_of_range_inputs_clamp() {
    let model = DriverRatingModel::new();
    let clamped = model.rate(-10.0, 15.0).unwrap();
    let boundary = model.rate(0.0, 10.0).unwrap();
    assert_eq!(clamped, boundary);
}

#[test]
fn test_rule_base_is_total_over_the_input_plane() {
    // The quality terms' supports overlap enough to cover [0, 10], so at
    // least one rule fires for every clamped input. Swept at 0.25 steps.
    let model = DriverRatingModel::new();
    for fare_step in 0..=200 {
        for quality_step in 0..=40 {
            let fare = fare_step as f64 * 0.25;
            let quality = quality_step as f64 * 0.25;
            let result = model.rate(fare, quality).unwrap();
            assert!(
                (0.0..=10.0).contains(&result.rating),
                "rating {} out of range for fare {fare}, quality {quality}",
                result.rating
            );
        }
    }
}

#[test]
fn test_aggregate_curve_spans_rating_universe() {
    let model = DriverRatingModel::new();
    let result = model.rate(12.0, 7.5).unwrap();
    assert_eq!(result.aggregate.len(), 11);
    assert!(result.aggregate.iter().all(|&d| (0.0..=1.0).contains(&d)));
    assert!((0.0..=1.0).contains(&result.activation));
}

/// The same model assembled by hand through the core API; guards the
/// declarative form in `ModelConfig::driver_rating` against drift.
fn hand_built_engine() -> MamdaniEngine {
    let fare = LinguisticVariable::new("fare", Universe::new(0.0, 50.0, 5.0).unwrap())
        .with_term("low", Shape::trapezoid(0.0, 0.0, 10.0, 15.0).unwrap())
        .with_term("medium", Shape::triangle(15.0, 25.0, 35.0).unwrap())
        .with_term("high", Shape::trapezoid(35.0, 40.0, 50.0, 50.0).unwrap());
    let quality = LinguisticVariable::new("quality", Universe::new(0.0, 10.0, 1.0).unwrap())
        .with_term("low", Shape::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
        .with_term("medium", Shape::trapezoid(3.0, 4.0, 6.0, 7.0).unwrap())
        .with_term("high", Shape::trapezoid(6.0, 7.0, 10.0, 10.0).unwrap());
    let rating = LinguisticVariable::new("rating", Universe::new(0.0, 10.0, 1.0).unwrap())
        .with_term("low", Shape::trapezoid(0.0, 0.0, 2.0, 4.0).unwrap())
        .with_term("medium", Shape::trapezoid(3.0, 4.0, 6.0, 7.0).unwrap())
        .with_term("high", Shape::trapezoid(6.0, 7.0, 10.0, 10.0).unwrap());

    MamdaniEngine::new(rating)
        .with_input(fare)
        .with_input(quality)
        .with_rule(Rule::new(
            Antecedent::term("fare", "high").or(Antecedent::term("quality", "low")),
            "low",
        ))
        .with_rule(Rule::new(Antecedent::term("quality", "medium"), "medium"))
        .with_rule(Rule::new(
            Antecedent::term("quality", "high").or(Antecedent::term("fare", "low")),
            "high",
        ))
}

#[test]
fn test_config_form_matches_hand_built_engine() {
    let model = DriverRatingModel::new();
    let hand_built = hand_built_engine();

    for &(fare, quality) in &[
        (0.0, 10.0),
        (50.0, 0.0),
        (25.0, 5.0),
        (12.5, 3.5),
        (42.0, 8.25),
        (7.0, 1.0),
    ] {
        let from_config = model.rate(fare, quality).unwrap();
        let inputs = Inputs::new().with("fare", fare).with("quality", quality);
        let from_code = hand_built.infer(&inputs).unwrap();
        assert_eq!(from_config.rating, from_code.crisp);
        assert_eq!(from_config.aggregate, from_code.aggregate);
    }
}

#[test]
fn test_toml_form_matches_shipped_model() {
    let toml = r#"
        output = "rating"

        [[variables]]
        name = "fare"
        range = [0.0, 50.0]
        step = 5.0

        [[variables.terms]]
        label = "low"
        shape = "trapezoid"
        points = [0.0, 0.0, 10.0, 15.0]

        [[variables.terms]]
        label = "medium"
        shape = "triangle"
        points = [15.0, 25.0, 35.0]

        [[variables.terms]]
        label = "high"
        shape = "trapezoid"
        points = [35.0, 40.0, 50.0, 50.0]

        [[variables]]
        name = "quality"
        range = [0.0, 10.0]
        step = 1.0

        [[variables.terms]]
        label = "low"
        shape = "trapezoid"
        points = [0.0, 0.0, 2.0, 4.0]

        [[variables.terms]]
        label = "medium"
        shape = "trapezoid"
        points = [3.0, 4.0, 6.0, 7.0]

        [[variables.terms]]
        label = "high"
        shape = "trapezoid"
        points = [6.0, 7.0, 10.0, 10.0]

        [[variables]]
        name = "rating"
        range = [0.0, 10.0]
        step = 1.0

        [[variables.terms]]
        label = "low"
        shape = "trapezoid"
        points = [0.0, 0.0, 2.0, 4.0]

        [[variables.terms]]
        label = "medium"
        shape = "trapezoid"
        points = [3.0, 4.0, 6.0, 7.0]

        [[variables.terms]]
        label = "high"
        shape = "trapezoid"
        points = [6.0, 7.0, 10.0, 10.0]

        [[rules]]
        then = "low"
        [rules.when]
        any = [
            { variable = "fare", term = "high" },
            { variable = "quality", term = "low" },
        ]

        [[rules]]
        then = "medium"
        when = { variable = "quality", term = "medium" }

        [[rules]]
        then = "high"
        [rules.when]
        any = [
            { variable = "quality", term = "high" },
            { variable = "fare", term = "low" },
        ]
    "#;

    let config = ModelConfig::from_toml_str(toml).unwrap();
    config.validate().unwrap();
    let engine = build_engine(&config).unwrap();
    let model = DriverRatingModel::new();

    for &(fare, quality) in &[(0.0, 10.0), (50.0, 0.0), (25.0, 5.0), (33.0, 4.75)] {
        let inputs = Inputs::new().with("fare", fare).with("quality", quality);
        let from_toml = engine.infer(&inputs).unwrap();
        let shipped = model.rate(fare, quality).unwrap();
        assert_eq!(from_toml.crisp, shipped.rating);
    }
}
