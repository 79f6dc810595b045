use std::fmt;

use serde::{Deserialize, Serialize};

/// Rounded score at or above which a badge is `Excellent`
pub const DEFAULT_EXCELLENT: i64 = 85;
/// Rounded score at or above which a badge is `Good`
pub const DEFAULT_GOOD: i64 = 70;

/// Cut-offs between badge tiers, compared against the rounded score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeThresholds {
    #[serde(default = "default_excellent")]
    pub excellent: i64,
    #[serde(default = "default_good")]
    pub good: i64,
}

fn default_excellent() -> i64 {
    DEFAULT_EXCELLENT
}

fn default_good() -> i64 {
    DEFAULT_GOOD
}

impl Default for BadgeThresholds {
    fn default() -> Self {
        Self {
            excellent: DEFAULT_EXCELLENT,
            good: DEFAULT_GOOD,
        }
    }
}

/// Display tier for an aggregate critic score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBadge {
    Excellent,
    Good,
    Average,
    /// No aggregate could be computed
    Unscored,
}

impl ScoreBadge {
    pub fn classify(score: Option<f64>, thresholds: &BadgeThresholds) -> Self {
        match rounded(score) {
            None => ScoreBadge::Unscored,
            Some(n) if n >= thresholds.excellent => ScoreBadge::Excellent,
            Some(n) if n >= thresholds.good => ScoreBadge::Good,
            Some(_) => ScoreBadge::Average,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBadge::Excellent => "excellent",
            ScoreBadge::Good => "good",
            ScoreBadge::Average => "average",
            ScoreBadge::Unscored => "unscored",
        }
    }
}

impl fmt::Display for ScoreBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round half up, toward positive infinity (`-2.5` becomes `-2`); non-finite
/// scores have no rounded value.
pub fn rounded(score: Option<f64>) -> Option<i64> {
    score
        .filter(|s| s.is_finite())
        .map(|s| (s + 0.5).floor() as i64)
}

/// `"87/100"`, or `"N/A"` when there is no score
pub fn display_score(score: Option<f64>) -> String {
    match rounded(score) {
        Some(n) => format!("{n}/100"),
        None => "N/A".to_string(),
    }
}
