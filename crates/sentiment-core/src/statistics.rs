//! Aggregate statistics over persisted analysis results.
//!
//! Recomputes distribution summaries from a result set read back from disk.
//! Per-record labels are taken from storage as-is; only the overall
//! classification is re-derived, by running the mean score through the same
//! thresholds used per review.

use crate::classifier::classify;
use crate::error::{Result, SentimentError};
use crate::models::{AnalysisRecord, SentimentLabel, StatisticsSummary};

/// Stateless statistics engine over analysis record sequences.
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Summarise a result set.
    ///
    /// Counts each label, averages the stored scores and classifies the
    /// mean. The overall label is mean-based, not a majority vote: a small
    /// result set with one strong outlier reflects average sentiment rather
    /// than count plurality.
    ///
    /// Returns [`SentimentError::EmptyResultSet`] for a zero-record input:
    /// the mean is undefined there and the engine never divides by zero.
    pub fn summarize(records: &[AnalysisRecord]) -> Result<StatisticsSummary> {
        if records.is_empty() {
            return Err(SentimentError::EmptyResultSet);
        }

        let total = records.len();
        let positive = Self::count_label(records, SentimentLabel::Positive);
        let negative = Self::count_label(records, SentimentLabel::Negative);
        let neutral = Self::count_label(records, SentimentLabel::Neutral);

        let score = records.iter().map(|r| r.score).sum::<f64>() / total as f64;

        Ok(StatisticsSummary {
            total,
            positive,
            negative,
            neutral,
            score,
            classification: classify(score),
        })
    }

    /// Number of records carrying `label`.
    fn count_label(records: &[AnalysisRecord], label: SentimentLabel) -> usize {
        records.iter().filter(|r| r.label == label).count()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
