//! Rating updates from observed rounds
//!
//! Two modes are supported. A stream update consumes one round and moves
//! both the player and the hole. A batch update aggregates several rounds
//! into a single player update and leaves hole ratings untouched.

use tracing::debug;

use crate::config::GloConfig;
use crate::error::{GloError, Result};
use crate::rating::expected::expected_score_with_rd;
use crate::rating::kfactor::player_k_factor;
use crate::rating::score::to_score;
use crate::types::{BatchRatingData, HoleSignals, Rating, RatingResult, StreamRatingData};

/// Blend a fresh performance rating into the prior rating.
///
/// Only `r_weight` of the gap is taken, which damps single-round variance
/// before the rating enters the expected-score computation.
pub fn modify_player_rating(
    player_rating: Rating,
    performance_rating: Rating,
    config: &GloConfig,
) -> Rating {
    player_rating + config.r_weight * (performance_rating - player_rating)
}

/// Adjust a hole rating with auxiliary signals.
///
/// No signal has an effect yet; the hole rating is returned unchanged.
pub fn modify_hole_rating(hole_rating: Rating, _signals: &HoleSignals) -> Rating {
    hole_rating
}

/// Update a player and a hole from a single round
pub fn stream_update(data: &StreamRatingData, config: &GloConfig) -> RatingResult {
    let modified_hole_rating = modify_hole_rating(data.hole_rating, &HoleSignals::default());
    let modified_player_rating =
        modify_player_rating(data.player_rating, data.performance_rating, config);

    let expected_score =
        expected_score_with_rd(modified_hole_rating, modified_player_rating, config.rd);
    let actual_score = to_score(data.strokes);

    // K-factor follows the unblended prior
    let player_k_factor = player_k_factor(data.player_rating, config);

    let result = RatingResult {
        player_rating: data.player_rating + player_k_factor * (actual_score - expected_score),
        hole_rating: data.hole_rating + config.k_hole * (expected_score - actual_score),
    };

    debug!(
        expected_score,
        actual_score,
        player_k_factor,
        player_rating = result.player_rating,
        hole_rating = result.hole_rating,
        "Stream rating update"
    );

    result
}

/// Aggregate several rounds into one player rating update.
///
/// Fails with [`GloError::LengthMismatch`] unless the three sequences have
/// equal length. An empty batch leaves the rating unchanged.
pub fn batch_update(data: &BatchRatingData, config: &GloConfig) -> Result<Rating> {
    let rounds = data.hole_ratings.len();
    if data.performance_ratings.len() != rounds || data.strokes.len() != rounds {
        return Err(GloError::LengthMismatch {
            hole_ratings: rounds,
            performance_ratings: data.performance_ratings.len(),
            strokes: data.strokes.len(),
        });
    }

    let (total_expected_score, total_actual_score) = data
        .hole_ratings
        .iter()
        .zip(&data.performance_ratings)
        .zip(&data.strokes)
        .fold(
            (0.0, 0.0),
            |(expected, actual), ((&hole_rating, &performance_rating), &strokes)| {
                let hole_rating = modify_hole_rating(hole_rating, &HoleSignals::default());
                let player_rating =
                    modify_player_rating(data.player_rating, performance_rating, config);
                (
                    expected + expected_score_with_rd(hole_rating, player_rating, config.rd),
                    actual + to_score(strokes),
                )
            },
        );

    let player_k_factor = player_k_factor(data.player_rating, config);
    let new_rating =
        data.player_rating + player_k_factor * (total_actual_score - total_expected_score);

    debug!(
        rounds,
        total_expected_score,
        total_actual_score,
        player_k_factor,
        player_rating = new_rating,
        "Batch rating update"
    );

    Ok(new_rating)
}
