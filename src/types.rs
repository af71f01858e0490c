//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};

/// Strength of a player or a hole, conventionally centered at 1500
pub type Rating = f64;

/// Normalized performance in the open interval (0, 1); 0.5 is an even outcome
pub type Score = f64;

/// Raw performance relative to the hole; lower is better
pub type Strokes = f64;

/// New ratings produced by a single-round update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    pub player_rating: Rating,
    pub hole_rating: Rating,
}

impl RatingResult {
    /// Change in player rating relative to the prior
    pub fn player_delta(&self, prior: Rating) -> f64 {
        self.player_rating - prior
    }

    /// Change in hole rating relative to the prior
    pub fn hole_delta(&self, prior: Rating) -> f64 {
        self.hole_rating - prior
    }
}

/// Input for a single-round ("stream") update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamRatingData {
    pub player_rating: Rating,
    pub hole_rating: Rating,
    pub performance_rating: Rating,
    pub strokes: Strokes,
}

/// Input for a multi-round ("batch") update
///
/// Index `i` of each sequence describes round `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRatingData {
    pub player_rating: Rating,
    pub hole_ratings: Vec<Rating>,
    pub performance_ratings: Vec<Rating>,
    pub strokes: Vec<Strokes>,
}

/// Auxiliary signals that may later adjust a hole rating before it enters
/// the expected-score computation. Currently accepted and ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoleSignals {
    /// Par of the hole
    pub par: Option<f64>,
    /// Number of players who completed the hole in the same round
    pub field_size: Option<u32>,
    /// Playing-conditions multiplier (1.0 = neutral)
    pub weather_factor: Option<f64>,
}
