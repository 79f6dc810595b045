use thiserror::Error;
use tracing::warn;

use crate::review::ScaleKind;

/// Why a raw score could not be normalized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("unknown or invalid scale: {0:?}")]
    UnrecognizedScale(String),
    #[error("score is missing or not a number")]
    InvalidScore,
}

/// Rescale `score` from its original range onto `0..=target_scale`.
///
/// Out-of-range inputs are not clamped: 11 on a ten-point scale becomes 110
/// on a 100-point target.
pub fn try_normalize(
    score: Option<f64>,
    scale: &ScaleKind,
    target_scale: f64,
) -> Result<f64, NormalizeError> {
    let original_max = match scale.max() {
        Some(max) => max,
        None => return Err(NormalizeError::UnrecognizedScale(scale.to_string())),
    };

    let score = match score {
        Some(s) if !s.is_nan() => s,
        _ => return Err(NormalizeError::InvalidScore),
    };

    Ok((score / original_max) * target_scale)
}

/// [`try_normalize`] with diagnostics: unrecognized scales are logged and
/// every failure becomes `None`.
pub fn normalize(score: Option<f64>, scale: &ScaleKind, target_scale: f64) -> Option<f64> {
    match try_normalize(score, scale, target_scale) {
        Ok(normalized) => Some(normalized),
        Err(NormalizeError::UnrecognizedScale(tag)) => {
            warn!(scale = %tag, "unknown or invalid scale");
            None
        }
        Err(NormalizeError::InvalidScore) => None,
    }
}
