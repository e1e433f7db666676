//! Batch scoring dispatcher.
//!
//! Applies one scoring backend across an ordered review sequence, pairing
//! every review with its score and classification. Execution is strictly
//! sequential and in input order; the only blocking point is the backend
//! call itself.

use sentiment_core::classifier::classify;
use sentiment_core::error::{Result, SentimentError};
use sentiment_core::models::AnalysisRecord;
use tracing::debug;

use crate::backends::ScoringBackend;

/// Run `backend` over `reviews`, producing one record per review in input
/// order.
///
/// Whitespace-only reviews short-circuit to a score of exactly `0.0`
/// without invoking the backend, since backends are not guaranteed to
/// handle empty input gracefully. Every other review invokes the backend exactly
/// once and the classifier exactly once; nothing is dropped, reordered or
/// deduplicated.
///
/// A backend failure aborts the whole run with
/// [`SentimentError::Backend`] naming the failing review's position; no
/// fabricated score is ever substituted. An empty input yields an empty
/// output, which downstream persistence refuses to write silently.
pub fn run_analysis(
    reviews: &[String],
    backend: &dyn ScoringBackend,
) -> Result<Vec<AnalysisRecord>> {
    let mut records: Vec<AnalysisRecord> = Vec::with_capacity(reviews.len());

    for (index, review) in reviews.iter().enumerate() {
        let score = if review.trim().is_empty() {
            0.0
        } else {
            backend
                .score(review)
                .map_err(|e| SentimentError::Backend {
                    backend: backend.id().to_string(),
                    review_index: index,
                    message: e.to_string(),
                })?
        };

        let label = classify(score);
        debug!(index, score, label = %label, "scored review");

        records.push(AnalysisRecord {
            review: review.clone(),
            score,
            label,
        });
    }

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::models::SentimentLabel;

    use crate::backends::LexiconBackend;

    // ── Fakes ─────────────────────────────────────────────────────────────────

    /// Backend that maps known phrases to fixed scores.
    #[derive(Debug)]
    struct FixedBackend;

    impl ScoringBackend for FixedBackend {
        fn id(&self) -> &'static str {
            "lexicon"
        }

        fn score(&self, text: &str) -> Result<f64> {
            Ok(match text {
                "I love this!" => 0.9,
                "I hate this." => -0.9,
                _ => 0.01,
            })
        }
    }

    /// Backend that fails on every invocation.
    #[derive(Debug)]
    struct FailingBackend;

    impl ScoringBackend for FailingBackend {
        fn id(&self) -> &'static str {
            "remote"
        }

        fn score(&self, _text: &str) -> Result<f64> {
            Err(anyhow::anyhow!("service unavailable").into())
        }
    }

    fn reviews(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    // ── Ordering and length ───────────────────────────────────────────────────

    #[test]
    fn test_run_preserves_length_and_order() {
        let input = reviews(&["I love this!", "I hate this.", "It exists."]);
        let records = run_analysis(&input, &FixedBackend).unwrap();

        assert_eq!(records.len(), input.len());
        for (record, review) in records.iter().zip(&input) {
            assert_eq!(&record.review, review);
        }
    }

    #[test]
    fn test_run_labels_in_input_order() {
        let input = reviews(&["I love this!", "I hate this.", "It exists."]);
        let records = run_analysis(&input, &FixedBackend).unwrap();

        let labels: Vec<SentimentLabel> = records.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral,
            ]
        );
    }

    #[test]
    fn test_run_with_real_lexicon_backend() {
        let input = reviews(&["I love this!", "I hate this.", "It exists."]);
        let records = run_analysis(&input, &LexiconBackend::new()).unwrap();

        let labels: Vec<SentimentLabel> = records.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral,
            ]
        );
    }

    #[test]
    fn test_run_keeps_neutral_records() {
        // Neutral results are records like any other, never filtered out.
        let input = reviews(&["meh", "whatever"]);
        let records = run_analysis(&input, &FixedBackend).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.label == SentimentLabel::Neutral));
    }

    // ── Whitespace short-circuit ──────────────────────────────────────────────

    #[test]
    fn test_run_whitespace_review_scores_zero_without_backend() {
        // FailingBackend errors on every call; a whitespace-only review must
        // never reach it.
        let input = reviews(&["   "]);
        let records = run_analysis(&input, &FailingBackend).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].score, 0.0);
        assert_eq!(records[0].label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_run_empty_string_review_scores_zero() {
        let input = reviews(&[""]);
        let records = run_analysis(&input, &FailingBackend).unwrap();
        assert_eq!(records[0].score, 0.0);
        assert_eq!(records[0].label, SentimentLabel::Neutral);
    }

    // ── Empty input ───────────────────────────────────────────────────────────

    #[test]
    fn test_run_empty_input_gives_empty_output() {
        let records = run_analysis(&[], &FixedBackend).unwrap();
        assert!(records.is_empty());
    }

    // ── Backend failure ───────────────────────────────────────────────────────

    #[test]
    fn test_run_backend_failure_aborts_with_review_position() {
        let input = reviews(&["fine", "also fine"]);
        let err = run_analysis(&input, &FailingBackend).unwrap_err();

        match err {
            SentimentError::Backend {
                backend,
                review_index,
                message,
            } => {
                assert_eq!(backend, "remote");
                assert_eq!(review_index, 0);
                assert!(message.contains("service unavailable"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── Determinism ───────────────────────────────────────────────────────────

    #[test]
    fn test_run_is_deterministic_for_deterministic_backend() {
        let input = reviews(&["I love this!", "It exists."]);
        let first = run_analysis(&input, &FixedBackend).unwrap();
        let second = run_analysis(&input, &FixedBackend).unwrap();
        assert_eq!(first, second);
    }
}
