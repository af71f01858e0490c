//! Performance rating solver
//!
//! Finds the single rating `R` that would have produced an observed total
//! score against a known set of hole ratings, i.e. the root of
//! `sum(expected_score(hole_i, R)) - total_score`. The sum is monotone in
//! `R` but has no algebraic inverse, so the root is bracketed by bisection
//! inside the configured search bounds.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::SolverBounds;
use crate::error::{GloError, Result};
use crate::rating::expected::{expected_score_with_rd, DEFAULT_RD};
use crate::rating::score::total_score;
use crate::types::{Rating, Score, Strokes};

/// Which search bound the solver ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    Min,
    Max,
}

/// Result of a performance rating search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverOutcome {
    pub rating: Rating,
    /// Number of bisection steps taken
    pub iterations: u32,
    /// The expected-score sum hit the target exactly before convergence
    pub exact: bool,
    /// Set when the result lies within `tolerance` of a search bound
    pub saturated: Option<Saturation>,
}

/// Bisection solver over a fixed logistic scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceRatingSolver {
    rd: f64,
    bounds: SolverBounds,
}

impl Default for PerformanceRatingSolver {
    fn default() -> Self {
        Self::new(DEFAULT_RD, SolverBounds::default())
    }
}

impl PerformanceRatingSolver {
    pub fn new(rd: f64, bounds: SolverBounds) -> Self {
        Self { rd, bounds }
    }

    pub fn bounds(&self) -> &SolverBounds {
        &self.bounds
    }

    fn expected_total(&self, hole_ratings: &[Rating], candidate: Rating) -> Score {
        hole_ratings
            .iter()
            .map(|&hole_rating| expected_score_with_rd(hole_rating, candidate, self.rd))
            .sum()
    }

    /// Solve for the performance rating, reporting how the search ended
    pub fn solve_detailed(
        &self,
        hole_ratings: &[Rating],
        total_score: Score,
    ) -> Result<SolverOutcome> {
        if hole_ratings.is_empty() {
            return Err(GloError::EmptyHoleSet);
        }

        let min_return = self.bounds.min_return();
        let max_return = self.bounds.max_return();
        let tolerance = self.bounds.tolerance();

        let mut offset = (max_return - min_return) / 2.0;
        let mut candidate = min_return + offset;
        let mut iterations = 0;
        let mut exact = false;

        while offset > tolerance {
            offset /= 2.0;
            iterations += 1;

            let sum = self.expected_total(hole_ratings, candidate);
            trace!(iterations, candidate, sum, target = total_score, "bisection step");

            if sum < total_score {
                candidate += offset;
            } else if sum > total_score {
                candidate -= offset;
            } else {
                exact = true;
                break;
            }
        }

        let saturated = if max_return - candidate <= tolerance {
            Some(Saturation::Max)
        } else if candidate - min_return <= tolerance {
            Some(Saturation::Min)
        } else {
            None
        };

        if let Some(bound) = saturated {
            warn!(
                rating = candidate,
                total_score,
                holes = hole_ratings.len(),
                "Performance rating saturated at {:?} search bound",
                bound
            );
        }

        debug!(rating = candidate, iterations, exact, "Solved performance rating");

        Ok(SolverOutcome {
            rating: candidate,
            iterations,
            exact,
            saturated,
        })
    }

    /// Solve for the performance rating
    pub fn solve(&self, hole_ratings: &[Rating], total_score: Score) -> Result<Rating> {
        self.solve_detailed(hole_ratings, total_score)
            .map(|outcome| outcome.rating)
    }

    /// Solve for the performance rating of a round given per-hole strokes
    pub fn solve_round(&self, hole_ratings: &[Rating], strokes: &[Strokes]) -> Result<Rating> {
        if hole_ratings.len() != strokes.len() {
            return Err(GloError::LengthMismatch {
                hole_ratings: hole_ratings.len(),
                performance_ratings: hole_ratings.len(),
                strokes: strokes.len(),
            });
        }
        self.solve(hole_ratings, total_score(strokes))
    }
}
