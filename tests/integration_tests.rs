//! Integration tests for the glo rating engine
//!
//! These tests drive the public API the way an owning application would:
//! - Converting strokes and solving per-round performance ratings
//! - Feeding performance ratings into stream and batch updates
//! - Tuning the model through configuration
//! - Reporting caller errors

use approx::{assert_abs_diff_eq, assert_relative_eq};
use glo_rating::config::AppConfig;
use glo_rating::{
    batch_update, expected_score, k_factor, round_performance_rating, solve_performance_rating,
    stream_update, to_score, to_strokes, BatchRatingData, GloCalculator, GloError, Saturation,
    SolverOptions,
};

#[test]
fn test_solver_convergence_scenario() {
    let rating =
        solve_performance_rating(&[1500.0, 1500.0], 1.0, &SolverOptions::default()).unwrap();
    assert_abs_diff_eq!(rating, 1500.0, epsilon = 0.25);
}

#[test]
fn test_solver_saturation_scenario() {
    let options = SolverOptions::default()
        .with_min_return(0.0)
        .with_max_return(2000.0);
    let rating = solve_performance_rating(&[1500.0, 1500.0], 2.0, &options).unwrap();
    assert_abs_diff_eq!(rating, 2000.0, epsilon = 0.25);
}

#[test]
fn test_k_factor_scenario() {
    assert_relative_eq!(k_factor(1500.0), 17.54, max_relative = 0.01);
    assert_eq!(k_factor(2000.0), 12.0);
}

#[test]
fn test_stream_scenario() {
    let result = stream_update(1480.0, 1300.0, 1300.0, 1.0);
    assert_relative_eq!(result.player_rating, 1471.44, max_relative = 0.0005);
    assert_relative_eq!(result.hole_rating, 1316.62, max_relative = 0.0005);
}

#[test]
fn test_batch_scenario() {
    let rating = batch_update(1500.0, &[1680.0, 1500.0], &[1500.0, 1500.0], &[0.0, 0.0]).unwrap();
    assert_relative_eq!(rating, 1504.55, max_relative = 0.0005);
}

#[test]
fn test_zero_delta_leaves_ratings_unchanged() {
    // Actual and expected scores coincide exactly
    let result = stream_update(1500.0, 1500.0, 1500.0, 0.0);
    assert_eq!(result.player_rating, 1500.0);
    assert_eq!(result.hole_rating, 1500.0);
}

#[test]
fn test_strokes_score_roundtrip() {
    for score in [0.01, 0.25, 0.5, 0.75, 0.99] {
        let strokes = to_strokes(score).unwrap();
        assert_abs_diff_eq!(to_score(strokes), score, epsilon = 1e-6);
    }
}

#[test]
fn test_complete_round_workflow() {
    let calculator = GloCalculator::default();
    let player_rating = calculator.initial_rating();
    let hole_ratings = [1420.0, 1510.0, 1605.0, 1380.0];
    let strokes = [0.0, -1.0, 1.0, 0.0];

    // Step 1: performance rating for the round
    let performance_rating =
        round_performance_rating(&hole_ratings, &strokes, &SolverOptions::default()).unwrap();
    let modeled: f64 = hole_ratings
        .iter()
        .map(|&hole| expected_score(hole, performance_rating))
        .sum();
    let observed: f64 = strokes.iter().map(|&s| to_score(s)).sum();
    assert_abs_diff_eq!(modeled, observed, epsilon = 0.01);

    // Step 2: stream each hole
    let mut player = player_rating;
    let mut holes = hole_ratings;
    for (hole, &s) in holes.iter_mut().zip(&strokes) {
        let result = calculator.stream_update(&glo_rating::StreamRatingData {
            player_rating: player,
            hole_rating: *hole,
            performance_rating,
            strokes: s,
        });
        player = result.player_rating;
        *hole = result.hole_rating;
    }

    // The birdie hole loses rating, the bogey hole gains it
    assert!(holes[1] < hole_ratings[1]);
    assert!(holes[2] > hole_ratings[2]);

    // Step 3: the batch variant only produces a player rating
    let batch = calculator
        .batch_update(&BatchRatingData {
            player_rating,
            hole_ratings: hole_ratings.to_vec(),
            performance_ratings: vec![performance_rating; 4],
            strokes: strokes.to_vec(),
        })
        .unwrap();
    assert!(batch.is_finite());
    assert!((batch - player_rating).abs() < 4.0 * k_factor(player_rating));
}

#[test]
fn test_caller_errors() {
    assert!(matches!(
        to_strokes(0.0),
        Err(GloError::InvalidScoreDomain { .. })
    ));
    assert!(matches!(
        to_strokes(1.0),
        Err(GloError::InvalidScoreDomain { .. })
    ));

    assert_eq!(
        solve_performance_rating(&[], 1.0, &SolverOptions::default()),
        Err(GloError::EmptyHoleSet)
    );

    let inverted = SolverOptions::default()
        .with_min_return(2000.0)
        .with_max_return(1000.0);
    assert!(matches!(
        solve_performance_rating(&[1500.0], 0.5, &inverted),
        Err(GloError::InvalidSolverBounds { .. })
    ));

    let zero_tolerance = SolverOptions::default().with_tolerance(0.0);
    assert!(matches!(
        solve_performance_rating(&[1500.0], 0.5, &zero_tolerance),
        Err(GloError::InvalidSolverBounds { .. })
    ));

    assert!(matches!(
        batch_update(1500.0, &[1500.0], &[1500.0, 1500.0], &[0.0]),
        Err(GloError::LengthMismatch { .. })
    ));
}

#[test]
fn test_saturation_is_reported() {
    let calculator = GloCalculator::default();
    let outcome = calculator
        .solve_performance_rating_detailed(&[1500.0, 1500.0], 2.0, &SolverOptions::default())
        .unwrap();
    assert_eq!(outcome.saturated, Some(Saturation::Max));
}

#[test]
fn test_configured_calculator_from_toml() {
    let config = AppConfig::from_toml_str(
        r#"
        [rating]
        rd = 400.0
        k_player_default = 10.0

        [solver]
        tolerance = 0.1
        "#,
    )
    .unwrap();
    let calculator = GloCalculator::new(config.rating, config.solver).unwrap();

    assert_eq!(calculator.k_factor(2000.0), 10.0);
    assert_relative_eq!(
        calculator.expected_score(1500.0, 1900.0),
        1.0 / 1.1,
        max_relative = 1e-12
    );

    let rating = calculator
        .solve_performance_rating(&[1300.0, 1400.0], 1.0, &SolverOptions::default())
        .unwrap();
    assert_abs_diff_eq!(rating, 1350.0, epsilon = 0.1);
}
