//! Conversion between strokes and normalized scores

use crate::error::{GloError, Result};
use crate::types::{Score, Strokes};

/// Convert strokes `(-inf, inf)` to a score in `(0, 1)`.
///
/// Zero strokes maps to 0.5; every two strokes below zero is worth
/// another factor of ten in odds.
pub fn to_score(strokes: Strokes) -> Score {
    1.0 / (1.0 + 10f64.powf(strokes / 2.0))
}

/// Convert a score back to strokes.
///
/// Fails with [`GloError::InvalidScoreDomain`] unless `0 < score < 1`.
pub fn to_strokes(score: Score) -> Result<Strokes> {
    if !(score > 0.0 && score < 1.0) {
        return Err(GloError::InvalidScoreDomain { score });
    }
    Ok(2.0 * ((1.0 - score) / score).log10())
}

/// Observed total score of a round
pub fn total_score(strokes: &[Strokes]) -> Score {
    strokes.iter().copied().map(to_score).sum()
}
