//! Configurable front door to the rating operations
//!
//! [`GloCalculator`] bundles a validated [`GloConfig`] and [`SolverConfig`]
//! so callers can tune the model without threading configuration through
//! every call.

use serde::{Deserialize, Serialize};

use crate::config::{GloConfig, SolverConfig, SolverOptions};
use crate::error::{GloError, Result};
use crate::rating::adjuster;
use crate::rating::expected::expected_score_with_rd;
use crate::rating::kfactor::player_k_factor;
use crate::rating::solver::{PerformanceRatingSolver, SolverOutcome};
use crate::types::{
    BatchRatingData, HoleSignals, Rating, RatingResult, Score, StreamRatingData, Strokes,
};

/// Serialized form of a calculator's configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub rating: GloConfig,
    pub solver: SolverConfig,
}

impl CalculatorConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.rating.validate()?;
        self.solver.validate()
    }
}

/// Glo rating calculator
#[derive(Debug, Clone, Default)]
pub struct GloCalculator {
    config: CalculatorConfig,
}

impl GloCalculator {
    /// Create a new calculator, rejecting invalid configuration
    pub fn new(rating: GloConfig, solver: SolverConfig) -> Result<Self> {
        let config = CalculatorConfig { rating, solver };
        config.validate()?;

        Ok(Self { config })
    }

    pub fn rating_config(&self) -> &GloConfig {
        &self.config.rating
    }

    pub fn solver_config(&self) -> &SolverConfig {
        &self.config.solver
    }

    /// Rating assigned to a new player or hole
    pub fn initial_rating(&self) -> Rating {
        self.config.rating.initial_rating
    }

    pub fn expected_score(&self, hole_rating: Rating, player_rating: Rating) -> Score {
        expected_score_with_rd(hole_rating, player_rating, self.config.rating.rd)
    }

    pub fn k_factor(&self, player_rating: Rating) -> f64 {
        player_k_factor(player_rating, &self.config.rating)
    }

    pub fn modify_player_rating(
        &self,
        player_rating: Rating,
        performance_rating: Rating,
    ) -> Rating {
        adjuster::modify_player_rating(player_rating, performance_rating, &self.config.rating)
    }

    pub fn modify_hole_rating(&self, hole_rating: Rating, signals: &HoleSignals) -> Rating {
        adjuster::modify_hole_rating(hole_rating, signals)
    }

    /// Build a solver for this configuration with per-call overrides applied
    pub fn solver(&self, options: &SolverOptions) -> Result<PerformanceRatingSolver> {
        let bounds = self.config.solver.resolve(options)?;
        Ok(PerformanceRatingSolver::new(self.config.rating.rd, bounds))
    }

    pub fn solve_performance_rating_detailed(
        &self,
        hole_ratings: &[Rating],
        total_score: Score,
        options: &SolverOptions,
    ) -> Result<SolverOutcome> {
        self.solver(options)?.solve_detailed(hole_ratings, total_score)
    }

    pub fn solve_performance_rating(
        &self,
        hole_ratings: &[Rating],
        total_score: Score,
        options: &SolverOptions,
    ) -> Result<Rating> {
        self.solver(options)?.solve(hole_ratings, total_score)
    }

    /// Performance rating of a round from its per-hole strokes
    pub fn round_performance_rating(
        &self,
        hole_ratings: &[Rating],
        strokes: &[Strokes],
        options: &SolverOptions,
    ) -> Result<Rating> {
        self.solver(options)?.solve_round(hole_ratings, strokes)
    }

    pub fn stream_update(&self, data: &StreamRatingData) -> RatingResult {
        adjuster::stream_update(data, &self.config.rating)
    }

    pub fn batch_update(&self, data: &BatchRatingData) -> Result<Rating> {
        adjuster::batch_update(data, &self.config.rating)
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Replace configuration from JSON; missing keys take their defaults
    pub fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: CalculatorConfig =
            serde_json::from_value(config).map_err(|e| GloError::ConfigurationError {
                message: format!("Invalid calculator configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}
