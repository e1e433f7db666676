use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// Identifiers of the scoring backends understood by the tool.
///
/// The order is the order backends are offered in the interactive menu.
/// Result files embed one of these identifiers in their name, so the list
/// also drives result-file recognition.
pub const KNOWN_BACKENDS: [&str; 3] = ["lexicon", "pattern", "remote"];

/// Categorical sentiment bucket derived from a score.
///
/// Serialises to exactly `"Positive"`, `"Negative"` or `"Neutral"`, the
/// three strings written verbatim into result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// The label string as it appears in result files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(SentimentLabel::Positive),
            "Negative" => Ok(SentimentLabel::Negative),
            "Neutral" => Ok(SentimentLabel::Neutral),
            other => Err(SentimentError::InvalidLabel(other.to_string())),
        }
    }
}

/// A single analysed review as persisted to a result file.
///
/// The serde renames produce the exact CSV header
/// `Review,Sentiment Score,Sentiment Classification`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// The review text, unchanged from the source file.
    #[serde(rename = "Review")]
    pub review: String,
    /// Sentiment score in `[-1.0, 1.0]` produced by the backend.
    #[serde(rename = "Sentiment Score")]
    pub score: f64,
    /// Label derived from the score; never stored without it.
    #[serde(rename = "Sentiment Classification")]
    pub label: SentimentLabel,
}

/// Aggregate snapshot recomputed on demand from a persisted result set.
///
/// Counts and total are exact integers; consumers derive display
/// percentages from them. Never persisted, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    /// Number of records in the result set.
    pub total: usize,
    /// Records labelled `Positive`.
    pub positive: usize,
    /// Records labelled `Negative`.
    pub negative: usize,
    /// Records labelled `Neutral`.
    pub neutral: usize,
    /// Arithmetic mean of all sentiment scores.
    pub score: f64,
    /// Classification of the mean score through the per-review thresholds.
    pub classification: SentimentLabel,
}
