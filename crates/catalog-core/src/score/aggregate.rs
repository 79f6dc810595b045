use thiserror::Error;
use tracing::{trace, warn};

use super::normalize::{try_normalize, NormalizeError};
use super::TARGET_SCALE;
use crate::review::Review;
use crate::weights::{ResolvedWeight, WeightError, WeightTable};

/// Failure of the aggregate as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("weight table is missing or empty")]
    MissingWeights,
}

/// What happened to a single review during aggregation
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    /// The review contributed `normalized * weight` to the mean
    Counted {
        normalized: f64,
        weight: ResolvedWeight,
    },
    /// Skipped: the score or its scale could not be normalized
    Unnormalized(NormalizeError),
    /// Skipped: no weight for the publication and no usable default
    Unweighted(WeightError),
}

impl ReviewOutcome {
    pub fn is_counted(&self) -> bool {
        matches!(self, ReviewOutcome::Counted { .. })
    }
}

/// One review and its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution<'a> {
    pub review: &'a Review,
    pub outcome: ReviewOutcome,
}

/// Per-review view of an aggregation, used by the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown<'a> {
    pub contributions: Vec<Contribution<'a>>,
    pub total_weighted_score: f64,
    pub total_weight: f64,
}

impl ScoreBreakdown<'_> {
    /// The weighted mean, or `None` when nothing contributed weight
    pub fn score(&self) -> Option<f64> {
        weighted_mean(self.total_weighted_score, self.total_weight)
    }

    pub fn counted(&self) -> usize {
        self.contributions
            .iter()
            .filter(|c| c.outcome.is_counted())
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.contributions.len() - self.counted()
    }
}

/// Weighted mean of the reviews' normalized scores on a 0-100 scale.
///
/// Reviews that cannot be normalized or weighted are left out of both the
/// numerator and the denominator. Returns `None` when the table is missing or
/// empty, or when no review contributes any weight.
pub fn aggregate(reviews: &[Review], weights: Option<&WeightTable>) -> Option<f64> {
    let table = usable_table(weights).ok()?;

    let mut total_weighted_score = 0.0;
    let mut total_weight = 0.0;

    for review in reviews {
        if let ReviewOutcome::Counted { normalized, weight } = assess(review, table) {
            total_weighted_score += normalized * weight.value;
            total_weight += weight.value;
        }
    }

    weighted_mean(total_weighted_score, total_weight)
}

/// Same computation as [`aggregate`], keeping every review's outcome.
pub fn explain<'a>(
    reviews: &'a [Review],
    weights: Option<&WeightTable>,
) -> Result<ScoreBreakdown<'a>, AggregateError> {
    let table = usable_table(weights)?;

    let mut breakdown = ScoreBreakdown {
        contributions: Vec::with_capacity(reviews.len()),
        total_weighted_score: 0.0,
        total_weight: 0.0,
    };

    for review in reviews {
        let outcome = assess(review, table);
        if let ReviewOutcome::Counted { normalized, weight } = &outcome {
            breakdown.total_weighted_score += normalized * weight.value;
            breakdown.total_weight += weight.value;
        }
        breakdown.contributions.push(Contribution { review, outcome });
    }

    Ok(breakdown)
}

fn usable_table(weights: Option<&WeightTable>) -> Result<&WeightTable, AggregateError> {
    match weights {
        Some(table) if !table.is_empty() => Ok(table),
        _ => {
            warn!("weight table is missing or empty, critic score unavailable");
            Err(AggregateError::MissingWeights)
        }
    }
}

fn assess(review: &Review, table: &WeightTable) -> ReviewOutcome {
    let normalized = match try_normalize(review.score, &review.scale, TARGET_SCALE) {
        Ok(n) => n,
        Err(err) => {
            match &err {
                NormalizeError::UnrecognizedScale(tag) => {
                    warn!(
                        publication = %review.publication,
                        scale = %tag,
                        "unknown or invalid scale"
                    );
                }
                NormalizeError::InvalidScore => {
                    trace!(publication = %review.publication, "review has no numeric score");
                }
            }
            return ReviewOutcome::Unnormalized(err);
        }
    };

    match table.weight_for(&review.publication) {
        Ok(weight) => ReviewOutcome::Counted { normalized, weight },
        Err(err) => {
            warn!(
                publication = %review.publication,
                "no weight for publication and no usable default, skipping review"
            );
            ReviewOutcome::Unweighted(err)
        }
    }
}

fn weighted_mean(total_weighted_score: f64, total_weight: f64) -> Option<f64> {
    if total_weight == 0.0 {
        None
    } else {
        Some(total_weighted_score / total_weight)
    }
}
