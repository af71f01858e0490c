//! Logistic expected-score model

use crate::types::{Rating, Score};

/// Default logistic scale
pub const DEFAULT_RD: f64 = 360.0;

/// Probability that a player rated `player_rating` outperforms a hole rated
/// `hole_rating`, on a logistic curve with scale `rd`.
pub fn expected_score_with_rd(hole_rating: Rating, player_rating: Rating, rd: f64) -> Score {
    1.0 / (1.0 + 10f64.powf((hole_rating - player_rating) / rd))
}

/// [`expected_score_with_rd`] using the default scale
pub fn expected_score(hole_rating: Rating, player_rating: Rating) -> Score {
    expected_score_with_rd(hole_rating, player_rating, DEFAULT_RD)
}
