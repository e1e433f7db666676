use std::fmt::Write as _;

use crate::models::StatisticsSummary;

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use sentiment_core::formatting::percentage;
///
/// assert!((percentage(45.0, 100.0, 2) - 45.0).abs() < 1e-9);
/// assert!((percentage(1.0, 3.0, 2) - 33.33).abs() < 1e-9);
/// assert_eq!(percentage(0.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let raw = (part / whole) * 100.0;
    let factor = 10_f64.powi(decimal_places as i32);
    (raw * factor).round() / factor
}

/// Render a statistics summary as the multi-line report printed by the
/// statistics view.
///
/// Counts carry two-decimal percentages of the total; the mean score is
/// shown with two decimals next to its overall classification.
pub fn render_summary(summary: &StatisticsSummary) -> String {
    let total = summary.total as f64;
    let mut out = String::new();

    // writeln! into a String never fails.
    let _ = writeln!(out, "Total Reviews: {}", summary.total);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "POSITIVE Reviews: {} ({:.2}%)",
        summary.positive,
        percentage(summary.positive as f64, total, 2)
    );
    let _ = writeln!(
        out,
        "NEGATIVE Reviews: {} ({:.2}%)",
        summary.negative,
        percentage(summary.negative as f64, total, 2)
    );
    let _ = writeln!(
        out,
        "NEUTRAL Reviews: {} ({:.2}%)",
        summary.neutral,
        percentage(summary.neutral as f64, total, 2)
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "SENTIMENT SCORE: {:.2} ({})",
        summary.score, summary.classification
    );

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
