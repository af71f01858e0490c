//! Error types for the rating engine
//!
//! Every failure is a caller-input error detected at the call boundary.
//! Nothing here is retryable: the same input always produces the same error.

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GloError>;

/// Errors reported by the rating operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GloError {
    #[error("Score {score} is outside the open interval (0, 1)")]
    InvalidScoreDomain { score: f64 },

    #[error("Invalid solver bounds: {reason}")]
    InvalidSolverBounds { reason: String },

    #[error("Performance rating requires at least one hole rating")]
    EmptyHoleSet,

    #[error(
        "Round sequences differ in length: {hole_ratings} hole ratings, \
         {performance_ratings} performance ratings, {strokes} stroke results"
    )]
    LengthMismatch {
        hole_ratings: usize,
        performance_ratings: usize,
        strokes: usize,
    },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GloError::InvalidScoreDomain { score: 1.0 };
        assert_eq!(
            err.to_string(),
            "Score 1 is outside the open interval (0, 1)"
        );

        let err = GloError::LengthMismatch {
            hole_ratings: 2,
            performance_ratings: 3,
            strokes: 2,
        };
        assert!(err.to_string().contains("3 performance ratings"));
    }
}
