//! Performance rating solver configuration
//!
//! Search bounds come from three layers: the built-in defaults, a
//! [`SolverConfig`] owned by the caller, and per-call [`SolverOptions`].
//! They are resolved once into validated [`SolverBounds`] before the solver
//! runs, so an explicit zero is always treated as a real value.

use serde::{Deserialize, Serialize};

use crate::error::{GloError, Result};
use crate::types::Rating;

/// Default search bounds for the performance rating solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub min_return: Rating,
    pub max_return: Rating,
    /// Half-interval width at which the bisection stops
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_return: 0.0,
            max_return: 3000.0,
            tolerance: 0.25,
        }
    }
}

impl SolverConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.resolve(&SolverOptions::default()).map(|_| ())
    }

    /// Apply per-call overrides and validate the result
    pub fn resolve(&self, options: &SolverOptions) -> Result<SolverBounds> {
        SolverBounds::new(
            options.min_return.unwrap_or(self.min_return),
            options.max_return.unwrap_or(self.max_return),
            options.tolerance.unwrap_or(self.tolerance),
        )
    }
}

/// Per-call overrides; `None` falls back to the [`SolverConfig`] value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    pub min_return: Option<Rating>,
    pub max_return: Option<Rating>,
    pub tolerance: Option<f64>,
}

impl SolverOptions {
    pub fn with_min_return(mut self, min_return: Rating) -> Self {
        self.min_return = Some(min_return);
        self
    }

    pub fn with_max_return(mut self, max_return: Rating) -> Self {
        self.max_return = Some(max_return);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
}

/// Validated search interval; `min_return < max_return` and `tolerance > 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverBounds {
    min_return: Rating,
    max_return: Rating,
    tolerance: f64,
}

impl SolverBounds {
    pub fn new(min_return: Rating, max_return: Rating, tolerance: f64) -> Result<Self> {
        if !min_return.is_finite() || !max_return.is_finite() {
            return Err(GloError::InvalidSolverBounds {
                reason: format!(
                    "bounds must be finite, got [{}, {}]",
                    min_return, max_return
                ),
            });
        }

        if max_return <= min_return {
            return Err(GloError::InvalidSolverBounds {
                reason: format!(
                    "max_return ({}) must be greater than min_return ({})",
                    max_return, min_return
                ),
            });
        }

        // NaN fails this comparison too
        if !(tolerance > 0.0) {
            return Err(GloError::InvalidSolverBounds {
                reason: format!("tolerance must be positive, got {}", tolerance),
            });
        }

        Ok(Self {
            min_return,
            max_return,
            tolerance,
        })
    }

    pub fn min_return(&self) -> Rating {
        self.min_return
    }

    pub fn max_return(&self) -> Rating {
        self.max_return
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for SolverBounds {
    fn default() -> Self {
        let config = SolverConfig::default();
        Self {
            min_return: config.min_return,
            max_return: config.max_return,
            tolerance: config.tolerance,
        }
    }
}
