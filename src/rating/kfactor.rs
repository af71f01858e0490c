//! Player volatility coefficient

use crate::config::GloConfig;
use crate::types::Rating;

const K_CURVE_SCALE: f64 = 16.0;
const K_CURVE_FLOOR: f64 = 0.5625;
const K_CURVE_SPREAD: f64 = 250_000.0;

/// K-factor for a player at `player_rating`.
///
/// Below `k_player_threshold` the coefficient grows with the distance from
/// the threshold, so less established players move faster. At or above it
/// the constant `k_player_default` applies. The step at the threshold is
/// not smoothed.
pub fn player_k_factor(player_rating: Rating, config: &GloConfig) -> f64 {
    if player_rating < config.k_player_threshold {
        let distance = config.k_player_threshold - player_rating;
        K_CURVE_SCALE * (K_CURVE_FLOOR + distance.powi(2) / K_CURVE_SPREAD).sqrt()
    } else {
        config.k_player_default
    }
}

/// [`player_k_factor`] with the default configuration
pub fn k_factor(player_rating: Rating) -> f64 {
    player_k_factor(player_rating, &GloConfig::default())
}
