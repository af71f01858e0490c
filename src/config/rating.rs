//! Rating system configuration

use serde::{Deserialize, Serialize};

use crate::error::{GloError, Result};
use crate::types::Rating;

/// Tunable constants of the Glo rating model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GloConfig {
    /// Logistic scale: a rating gap of `rd` means 10:1 odds
    pub rd: f64,
    /// Fixed K-factor applied to hole ratings
    pub k_hole: f64,
    /// K-factor for players rated at or above `k_player_threshold`
    pub k_player_default: f64,
    /// Rating at which the player K-factor becomes constant
    pub k_player_threshold: Rating,
    /// Weight of the performance rating when blending it into the prior
    pub r_weight: f64,
    /// Rating assigned to new players and holes
    pub initial_rating: Rating,
}

impl Default for GloConfig {
    fn default() -> Self {
        Self {
            rd: 360.0,
            k_hole: 35.0,
            k_player_default: 12.0,
            k_player_threshold: 1900.0,
            r_weight: 0.2,
            initial_rating: 1500.0,
        }
    }
}

impl GloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("rd", self.rd),
            ("k_hole", self.k_hole),
            ("k_player_default", self.k_player_default),
            ("k_player_threshold", self.k_player_threshold),
            ("r_weight", self.r_weight),
            ("initial_rating", self.initial_rating),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(GloError::ConfigurationError {
                message: format!("{} must be a finite number", name),
            });
        }

        if self.rd <= 0.0 {
            return Err(GloError::ConfigurationError {
                message: "RD must be positive".to_string(),
            });
        }

        if self.k_hole < 0.0 {
            return Err(GloError::ConfigurationError {
                message: "Hole K-factor must be non-negative".to_string(),
            });
        }

        if self.k_player_default <= 0.0 {
            return Err(GloError::ConfigurationError {
                message: "Default player K-factor must be positive".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.r_weight) {
            return Err(GloError::ConfigurationError {
                message: "Performance weight must be within [0, 1]".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glo_config_default() {
        let config = GloConfig::default();
        assert_eq!(config.rd, 360.0);
        assert_eq!(config.k_hole, 35.0);
        assert_eq!(config.k_player_default, 12.0);
        assert_eq!(config.k_player_threshold, 1900.0);
        assert_eq!(config.r_weight, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_glo_config_validation() {
        let mut config = GloConfig::default();

        config.rd = 0.0;
        assert!(config.validate().is_err());

        config = GloConfig::default();
        config.k_hole = -1.0;
        assert!(config.validate().is_err());

        config = GloConfig::default();
        config.k_player_default = 0.0;
        assert!(config.validate().is_err());

        config = GloConfig::default();
        config.r_weight = 1.5;
        assert!(config.validate().is_err());

        config = GloConfig::default();
        config.initial_rating = f64::NAN;
        assert!(config.validate().is_err());

        // Zero hole K-factor freezes hole ratings, which is allowed
        config = GloConfig::default();
        config.k_hole = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GloConfig = toml::from_str("k_hole = 20.0").unwrap();
        assert_eq!(config.k_hole, 20.0);
        assert_eq!(config.rd, 360.0);
    }
}
