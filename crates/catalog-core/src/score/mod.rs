//! Critic score pipeline
//!
//! Raw review scores are rescaled onto a common range ([`normalize`]) and
//! then combined into one weighted mean per product ([`aggregate`]). Every
//! failure along the way degrades to `None` plus a `warn` diagnostic; nothing
//! here returns a [`crate::error::CatalogError`].

mod aggregate;
mod badge;
mod normalize;

pub use aggregate::{
    aggregate, explain, AggregateError, Contribution, ReviewOutcome, ScoreBreakdown,
};
pub use badge::{display_score, rounded, BadgeThresholds, ScoreBadge};
pub use normalize::{normalize, try_normalize, NormalizeError};

/// Target scale used for display scores
pub const TARGET_SCALE: f64 = 100.0;
