//! Glo rating model
//!
//! Players are rated against course holes rather than each other. Strokes
//! are mapped to scores, a performance rating is solved per round, and
//! ratings are updated from the gap between actual and expected scores.

pub mod adjuster;
pub mod calculator;
pub mod expected;
pub mod kfactor;
pub mod score;
pub mod solver;

// Re-export commonly used types
pub use adjuster::{batch_update, modify_hole_rating, modify_player_rating, stream_update};
pub use calculator::{CalculatorConfig, GloCalculator};
pub use expected::{expected_score, expected_score_with_rd, DEFAULT_RD};
pub use kfactor::{k_factor, player_k_factor};
pub use score::{to_score, to_strokes, total_score};
pub use solver::{PerformanceRatingSolver, Saturation, SolverOutcome};
