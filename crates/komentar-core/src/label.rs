//! Sentiment labels as stored in the annotated comment dataset.
//!
//! The dataset encodes sentiment as an integer: 0 = negative, 1 = neutral,
//! 2 = positive. Values outside that range are kept as-is and rendered with
//! their raw integer form wherever a display name is needed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three known sentiment categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// Fixed chart order, independent of the order labels appear in the data.
    pub const ALL: [Sentiment; 3] = [Self::Negative, Self::Neutral, Self::Positive];

    /// Integer code used by the dataset.
    pub fn code(self) -> i64 {
        match self {
            Self::Negative => 0,
            Self::Neutral => 1,
            Self::Positive => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Negative),
            1 => Some(Self::Neutral),
            2 => Some(Self::Positive),
            _ => None,
        }
    }

    /// Human-readable (Indonesian) name shown on charts.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Negative => "Negatif",
            Self::Neutral => "Netral",
            Self::Positive => "Positif",
        }
    }

    /// Position of this category in [`Sentiment::ALL`].
    pub fn index(self) -> usize {
        self.code() as usize
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw integer label of a dataset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentLabel(pub i64);

impl SentimentLabel {
    pub fn sentiment(self) -> Option<Sentiment> {
        Sentiment::from_code(self.0)
    }

    /// Chart title name: "Negatif" / "Netral" / "Positif", or the raw integer.
    pub fn display_name(self) -> String {
        match self.sentiment() {
            Some(s) => s.display_name().to_string(),
            None => self.0.to_string(),
        }
    }
}

impl From<Sentiment> for SentimentLabel {
    fn from(s: Sentiment) -> Self {
        Self(s.code())
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an integer sentiment label: {0:?}")]
pub struct ParseLabelError(pub String);

impl FromStr for SentimentLabel {
    type Err = ParseLabelError;

    /// Accepts integers and integral floats (`"2"`, `" 2 "`, `"2.0"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Ok(v) = t.parse::<i64>() {
            return Ok(Self(v));
        }
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(Self(v as i64)),
            _ => Err(ParseLabelError(s.to_string())),
        }
    }
}
