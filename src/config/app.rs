//! Application configuration
//!
//! Combines the rating and solver sections with logging settings, loaded
//! from environment variables or a TOML file and validated before use.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

use super::rating::GloConfig;
use super::solver::SolverConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: GloConfig,
    pub solver: SolverConfig,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, target: &mut T) -> Result<()> {
    if let Ok(value) = env::var(name) {
        *target = value
            .parse()
            .map_err(|_| anyhow!("Invalid {} value: {}", name, value))?;
    }
    Ok(())
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(log_level) = env::var("GLO_LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Rating settings
        parse_var("GLO_RD", &mut config.rating.rd)?;
        parse_var("GLO_K_HOLE", &mut config.rating.k_hole)?;
        parse_var("GLO_K_PLAYER_DEFAULT", &mut config.rating.k_player_default)?;
        parse_var(
            "GLO_K_PLAYER_THRESHOLD",
            &mut config.rating.k_player_threshold,
        )?;
        parse_var("GLO_R_WEIGHT", &mut config.rating.r_weight)?;
        parse_var("GLO_INITIAL_RATING", &mut config.rating.initial_rating)?;

        // Solver settings
        parse_var("GLO_SOLVER_MIN_RETURN", &mut config.solver.min_return)?;
        parse_var("GLO_SOLVER_MAX_RETURN", &mut config.solver.max_return)?;
        parse_var("GLO_SOLVER_TOLERANCE", &mut config.solver.tolerance)?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    config.rating.validate()?;
    config.solver.validate()?;

    Ok(())
}
