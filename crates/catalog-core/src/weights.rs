//! Publication weight table
//!
//! Maps a publication name to its relative influence on the aggregate critic
//! score. The `default` entry is the fallback for publications the table does
//! not list. No publication roster is built in; the table is always supplied
//! by the weight data source.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Key of the fallback weight
pub const DEFAULT_KEY: &str = "default";

/// A weight resolved for a single review
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeight {
    pub value: f64,
    /// True when the publication had no usable entry and `default` was used
    pub from_default: bool,
}

/// Why a review's publication could not be given a weight
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    #[error("no usable weight for publication {publication:?} and no usable default")]
    Unresolved { publication: String },
}

/// Publication name to weight mapping, with a `default` fallback.
///
/// Entries whose value is not a finite, non-negative number are retained so
/// that the table is not considered empty, but they never resolve to a weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    entries: HashMap<String, Option<f64>>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight(mut self, publication: impl Into<String>, weight: f64) -> Self {
        self.entries.insert(publication.into(), usable(Some(weight)));
        self
    }

    pub fn with_default(self, weight: f64) -> Self {
        self.with_weight(DEFAULT_KEY, weight)
    }

    /// Number of entries, including `default` and unusable entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fallback weight, if present and usable
    pub fn default_weight(&self) -> Option<f64> {
        self.entries.get(DEFAULT_KEY).copied().flatten()
    }

    /// The publication's own weight, if present and usable
    pub fn explicit_weight(&self, publication: &str) -> Option<f64> {
        self.entries.get(publication).copied().flatten()
    }

    /// Resolve the weight for a publication, falling back to `default`.
    pub fn weight_for(&self, publication: &str) -> Result<ResolvedWeight, WeightError> {
        if let Some(value) = self.explicit_weight(publication) {
            return Ok(ResolvedWeight {
                value,
                from_default: false,
            });
        }

        self.default_weight()
            .map(|value| ResolvedWeight {
                value,
                from_default: true,
            })
            .ok_or_else(|| WeightError::Unresolved {
                publication: publication.to_string(),
            })
    }

    /// Entries sorted by publication name; unusable values are `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

fn usable(weight: Option<f64>) -> Option<f64> {
    weight.filter(|w| w.is_finite() && *w >= 0.0)
}

impl<'de> Deserialize<'de> for WeightTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .map(|(publication, value)| (publication, usable(value.as_f64())))
            .collect();
        Ok(Self { entries })
    }
}

impl FromIterator<(String, f64)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(publication, weight)| (publication, usable(Some(weight))))
                .collect(),
        }
    }
}
