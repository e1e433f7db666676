use crate::models::SentimentLabel;

/// Scores at or above this value classify as `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Scores at or below this value classify as `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Map a sentiment score to its categorical label.
///
/// The two thresholds define a neutral dead-zone around zero and both
/// boundaries are inclusive: `0.05` is `Positive` and `-0.05` is
/// `Negative`. The function is total: scores outside `[-1.0, 1.0]` are
/// classified with the same thresholds, no validation is performed.
///
/// # Examples
///
/// ```
/// use sentiment_core::classifier::classify;
/// use sentiment_core::models::SentimentLabel;
///
/// assert_eq!(classify(0.8), SentimentLabel::Positive);
/// assert_eq!(classify(-0.8), SentimentLabel::Negative);
/// assert_eq!(classify(0.0), SentimentLabel::Neutral);
/// ```
pub fn classify(score: f64) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Boundaries ────────────────────────────────────────────────────────────

    #[test]
    fn test_positive_boundary_is_inclusive() {
        assert_eq!(classify(0.05), SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_boundary_is_inclusive() {
        assert_eq!(classify(-0.05), SentimentLabel::Negative);
    }

    #[test]
    fn test_zero_is_neutral() {
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_just_inside_dead_zone() {
        assert_eq!(classify(0.049), SentimentLabel::Neutral);
        assert_eq!(classify(-0.049), SentimentLabel::Neutral);
    }

    // ── Interior values ───────────────────────────────────────────────────────

    #[test]
    fn test_strong_scores() {
        assert_eq!(classify(1.0), SentimentLabel::Positive);
        assert_eq!(classify(-1.0), SentimentLabel::Negative);
        assert_eq!(classify(0.3), SentimentLabel::Positive);
        assert_eq!(classify(-0.3), SentimentLabel::Negative);
    }

    // ── Totality ──────────────────────────────────────────────────────────────

    #[test]
    fn test_out_of_range_scores_use_same_thresholds() {
        // No input validation: values beyond [-1, 1] still classify.
        assert_eq!(classify(5.0), SentimentLabel::Positive);
        assert_eq!(classify(-5.0), SentimentLabel::Negative);
    }
}
