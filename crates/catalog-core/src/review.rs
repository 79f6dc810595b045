//! Critic reviews and the rating scales they are published on

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Wire tag for ten-point scales
pub const TEN_POINT_TAG: &str = "out of 10";
/// Wire tag for five-star scales
pub const FIVE_STAR_TAG: &str = "out of 5 stars";
/// Wire tag for percentage scales
pub const PERCENT_TAG: &str = "percent";

/// The range a raw review score was published on.
///
/// Tags that match none of the known scales are kept as
/// [`ScaleKind::Unrecognized`] rather than rejected at load time; the
/// normalizer reports them and the review simply does not contribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// 0-10
    TenPoint,
    /// 0-5 stars
    FiveStar,
    /// 0-100
    Percent,
    /// Any other tag, kept verbatim
    Unrecognized(String),
}

impl ScaleKind {
    /// Upper bound of the original range, or `None` for unrecognized scales.
    pub fn max(&self) -> Option<f64> {
        match self {
            ScaleKind::TenPoint => Some(10.0),
            ScaleKind::FiveStar => Some(5.0),
            ScaleKind::Percent => Some(100.0),
            ScaleKind::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ScaleKind::Unrecognized(_))
    }

    /// Canonical wire tag
    pub fn as_str(&self) -> &str {
        match self {
            ScaleKind::TenPoint => TEN_POINT_TAG,
            ScaleKind::FiveStar => FIVE_STAR_TAG,
            ScaleKind::Percent => PERCENT_TAG,
            ScaleKind::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for ScaleKind {
    fn from(tag: &str) -> Self {
        // Variant names are accepted alongside the published tags
        let folded: String = tag
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match (tag, folded.as_str()) {
            (TEN_POINT_TAG, _) | (_, "tenpoint") => ScaleKind::TenPoint,
            (FIVE_STAR_TAG, _) | (_, "fivestar") => ScaleKind::FiveStar,
            (PERCENT_TAG, _) | (_, "percent") => ScaleKind::Percent,
            _ => ScaleKind::Unrecognized(tag.to_string()),
        }
    }
}

impl From<String> for ScaleKind {
    fn from(tag: String) -> Self {
        ScaleKind::from(tag.as_str())
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScaleKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScaleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Non-string tags (numbers, null) are unrecognized too
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(tag) => ScaleKind::from(tag),
            other => ScaleKind::Unrecognized(other.to_string()),
        })
    }
}

/// A single critic review of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Publication the review appeared in; used to look up its weight.
    /// Missing names are empty and resolve through the `default` weight.
    #[serde(default)]
    pub publication: String,
    /// Raw score; `None` when the source value was missing or not a number
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: Option<f64>,
    /// Scale the raw score was published on
    #[serde(default = "missing_scale")]
    pub scale: ScaleKind,
}

impl Review {
    pub fn new(publication: impl Into<String>, score: f64, scale: ScaleKind) -> Self {
        Self {
            publication: publication.into(),
            score: Some(score),
            scale,
        }
    }
}

fn missing_scale() -> ScaleKind {
    ScaleKind::Unrecognized(String::new())
}

/// Accept any JSON value, keeping only numbers.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}
