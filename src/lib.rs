//! Glo - Elo-style skill ratings for players measured against course holes
//!
//! Players never meet each other directly. Each hole carries its own rating,
//! a round's strokes are mapped onto win-probability scores, and ratings move
//! by the gap between the observed and the modeled outcome.
//!
//! The functions at the crate root use the default model constants. Use
//! [`GloCalculator`] to tune them.
//!
//! ```
//! let performance = glo_rating::solve_performance_rating(
//!     &[1500.0, 1500.0],
//!     1.0,
//!     &glo_rating::SolverOptions::default(),
//! )
//! .unwrap();
//! assert!((performance - 1500.0).abs() <= 0.25);
//!
//! let result = glo_rating::stream_update(1480.0, 1300.0, 1300.0, 1.0);
//! assert!(result.player_rating < 1480.0);
//! assert!(result.hole_rating > 1300.0);
//! ```

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types
pub use config::{GloConfig, SolverBounds, SolverConfig, SolverOptions};
pub use error::{GloError, Result};
pub use rating::{GloCalculator, PerformanceRatingSolver, Saturation, SolverOutcome};
pub use types::*;

// Conversions and the score model are total and need no configuration
pub use rating::{expected_score, k_factor, to_score, to_strokes, total_score};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Solve for the rating that explains `total_score` against `hole_ratings`
pub fn solve_performance_rating(
    hole_ratings: &[Rating],
    total_score: Score,
    options: &SolverOptions,
) -> Result<Rating> {
    GloCalculator::default().solve_performance_rating(hole_ratings, total_score, options)
}

/// Performance rating of a round from its per-hole strokes
pub fn round_performance_rating(
    hole_ratings: &[Rating],
    strokes: &[Strokes],
    options: &SolverOptions,
) -> Result<Rating> {
    GloCalculator::default().round_performance_rating(hole_ratings, strokes, options)
}

/// Update a player and a hole from one round
pub fn stream_update(
    player_rating: Rating,
    hole_rating: Rating,
    performance_rating: Rating,
    strokes: Strokes,
) -> RatingResult {
    rating::stream_update(
        &StreamRatingData {
            player_rating,
            hole_rating,
            performance_rating,
            strokes,
        },
        &GloConfig::default(),
    )
}

/// Aggregate several rounds into one player rating update
pub fn batch_update(
    player_rating: Rating,
    hole_ratings: &[Rating],
    performance_ratings: &[Rating],
    strokes: &[Strokes],
) -> Result<Rating> {
    rating::batch_update(
        &BatchRatingData {
            player_rating,
            hole_ratings: hole_ratings.to_vec(),
            performance_ratings: performance_ratings.to_vec(),
            strokes: strokes.to_vec(),
        },
        &GloConfig::default(),
    )
}
