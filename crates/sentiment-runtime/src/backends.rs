//! Pluggable sentiment-scoring backends.
//!
//! Every backend is an opaque `text -> score in [-1.0, 1.0]` function behind
//! the [`ScoringBackend`] trait, selected by a lowercase identifier string.
//! Backends are explicitly constructed values handed to the dispatcher;
//! there is no process-wide analyzer state, so tests can swap in fakes.

use std::fmt::Debug;
use std::time::Duration;

use anyhow::anyhow;
use sentiment_core::error::{Result, SentimentError};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A pluggable scoring strategy.
pub trait ScoringBackend: Debug {
    /// Short lowercase identifier, embedded into result file names.
    fn id(&self) -> &'static str;

    /// Score `text` into `[-1.0, 1.0]`.
    ///
    /// Negative values are unfavorable, positive favorable, magnitude is
    /// intensity. May fail for backends that talk to external services;
    /// the dispatcher turns any failure into a per-review error.
    fn score(&self, text: &str) -> Result<f64>;
}

/// Construct the backend registered under `id`.
///
/// `api_url` and `api_timeout` only matter for the `remote` backend; the
/// local backends ignore them. Unrecognised identifiers yield
/// [`SentimentError::UnknownBackend`].
pub fn backend_for_id(
    id: &str,
    api_url: Option<&str>,
    api_timeout: Duration,
) -> Result<Box<dyn ScoringBackend>> {
    match id {
        "lexicon" => Ok(Box::new(LexiconBackend::new())),
        "pattern" => Ok(Box::new(PatternBackend::new())),
        "remote" => {
            let url = api_url.ok_or_else(|| {
                SentimentError::Config(
                    "remote backend requires an API URL (--api-url or SENTIMENT_API_URL)"
                        .to_string(),
                )
            })?;
            Ok(Box::new(RemoteBackend::new(url.to_string(), api_timeout)?))
        }
        other => Err(SentimentError::UnknownBackend(other.to_string())),
    }
}

// ── Lexicon backend ───────────────────────────────────────────────────────────

/// Sum of matched valences is squashed into `[-1, 1]` by
/// `x / sqrt(x² + alpha)`.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// A negation inside the look-behind window flips and dampens a valence.
const NEGATION_SCALAR: f64 = -0.74;

/// How many tokens before a sentiment word are checked for negations and
/// boosters.
const LOOKBEHIND_WINDOW: usize = 3;

/// Booster influence decays with distance from the sentiment word.
const BOOSTER_DECAY: [f64; LOOKBEHIND_WINDOW] = [1.0, 0.95, 0.9];

/// Emphasis added per trailing exclamation mark.
const EXCLAMATION_BOOST: f64 = 0.292;

/// Exclamation marks beyond this count add no further emphasis.
const MAX_EXCLAMATIONS: usize = 4;

/// Word valences on a roughly `[-4, 4]` scale.
static VALENCE: &[(&str, f64)] = &[
    ("abysmal", -3.1),
    ("amazing", 2.8),
    ("annoying", -1.8),
    ("awesome", 3.1),
    ("awful", -2.8),
    ("bad", -2.5),
    ("best", 3.2),
    ("boring", -1.3),
    ("broken", -1.9),
    ("brilliant", 2.8),
    ("comfortable", 1.5),
    ("defective", -2.1),
    ("delicious", 2.3),
    ("delightful", 2.6),
    ("disappointed", -2.1),
    ("disappointing", -2.2),
    ("dirty", -1.8),
    ("enjoyable", 2.0),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("fast", 1.2),
    ("flawless", 2.7),
    ("friendly", 2.2),
    ("garbage", -2.9),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.7),
    ("hates", -2.7),
    ("helpful", 1.8),
    ("horrible", -2.5),
    ("impressive", 2.3),
    ("like", 1.5),
    ("liked", 1.6),
    ("lousy", -2.2),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 3.2),
    ("mediocre", -0.7),
    ("nice", 1.8),
    ("outstanding", 3.1),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("poor", -2.1),
    ("recommend", 1.6),
    ("recommended", 1.6),
    ("refund", -1.1),
    ("reliable", 1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("slow", -1.2),
    ("terrible", -2.8),
    ("useless", -1.9),
    ("waste", -2.2),
    ("wonderful", 2.7),
    ("worst", -3.1),
    ("worthless", -2.3),
    ("wow", 2.8),
];

/// Tokens that negate a following sentiment word.
static NEGATIONS: &[&str] = &[
    "no", "not", "never", "neither", "nor", "cannot", "can't", "won't", "don't", "doesn't",
    "didn't", "isn't", "wasn't", "aren't", "weren't", "hardly", "barely",
];

/// Intensity modifiers: positive weights amplify, negative weights dampen.
static BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("very", 0.293),
    ("fairly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

/// Valence-lexicon scorer with negation, booster and punctuation handling.
#[derive(Debug)]
pub struct LexiconBackend;

impl LexiconBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringBackend for LexiconBackend {
    fn id(&self) -> &'static str {
        "lexicon"
    }

    fn score(&self, text: &str) -> Result<f64> {
        let tokens = tokenize(text);
        let mut sum = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(base) = lookup(VALENCE, token) else {
                continue;
            };
            let mut valence = base;

            // Walk backwards through the look-behind window: boosters scale
            // with distance, a negation flips the valence.
            for distance in 1..=LOOKBEHIND_WINDOW {
                let Some(prev) = i.checked_sub(distance) else {
                    break;
                };
                let prev_token = tokens[prev].as_str();

                if let Some(weight) = lookup(BOOSTERS, prev_token) {
                    valence += valence.signum() * weight * BOOSTER_DECAY[distance - 1];
                }
                if NEGATIONS.contains(&prev_token) {
                    valence *= NEGATION_SCALAR;
                }
            }

            sum += valence;
        }

        // Exclamation marks emphasise whatever polarity is already present.
        if sum != 0.0 {
            let exclamations = text
                .chars()
                .filter(|c| *c == '!')
                .count()
                .min(MAX_EXCLAMATIONS);
            sum += sum.signum() * exclamations as f64 * EXCLAMATION_BOOST;
        }

        Ok(normalize(sum))
    }
}

/// Squash an unbounded valence sum into `[-1.0, 1.0]`.
fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

// ── Pattern backend ───────────────────────────────────────────────────────────

/// A leading negation halves and flips a word polarity.
const PATTERN_NEGATION_SCALAR: f64 = -0.5;

/// Word polarities already on the `[-1, 1]` scale.
static POLARITY: &[(&str, f64)] = &[
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("awful", -0.9),
    ("bad", -0.7),
    ("best", 0.9),
    ("boring", -0.5),
    ("broken", -0.6),
    ("decent", 0.3),
    ("disappointing", -0.7),
    ("excellent", 0.9),
    ("fantastic", 0.9),
    ("fine", 0.4),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("hate", -0.8),
    ("horrible", -0.9),
    ("love", 0.7),
    ("mediocre", -0.3),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.7),
    ("poor", -0.6),
    ("sad", -0.6),
    ("slow", -0.4),
    ("terrible", -0.9),
    ("useless", -0.6),
    ("wonderful", 0.9),
    ("worst", -1.0),
];

/// Plain polarity-average scorer: the mean of all matched word polarities.
#[derive(Debug)]
pub struct PatternBackend;

impl PatternBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatternBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringBackend for PatternBackend {
    fn id(&self) -> &'static str {
        "pattern"
    }

    fn score(&self, text: &str) -> Result<f64> {
        let tokens = tokenize(text);
        let mut total = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut polarity) = lookup(POLARITY, token) else {
                continue;
            };

            if i > 0 && NEGATIONS.contains(&tokens[i - 1].as_str()) {
                polarity *= PATTERN_NEGATION_SCALAR;
            }

            total += polarity;
            matched += 1;
        }

        if matched == 0 {
            return Ok(0.0);
        }
        Ok((total / matched as f64).clamp(-1.0, 1.0))
    }
}

// ── Remote backend ────────────────────────────────────────────────────────────

/// Scorer backed by an HTTP JSON service.
///
/// POSTs `{"text": "..."}` to the configured URL and expects
/// `{"score": <number>}` back; the score is clamped into `[-1, 1]`.
/// Every request carries the configured timeout so a single review can
/// never block the run indefinitely.
#[derive(Debug)]
pub struct RemoteBackend {
    client: reqwest::blocking::Client,
    url: String,
}

impl RemoteBackend {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SentimentError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }
}

impl ScoringBackend for RemoteBackend {
    fn id(&self) -> &'static str {
        "remote"
    }

    fn score(&self, text: &str) -> Result<f64> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .map_err(|e| anyhow!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("scoring service returned {}", status).into());
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| anyhow!("invalid response body: {}", e))?;

        parse_score_response(&body)
    }
}

/// Extract and clamp the score field from a scoring-service response.
fn parse_score_response(body: &serde_json::Value) -> Result<f64> {
    let score = body
        .get("score")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow!("response missing numeric 'score' field"))?;
    Ok(score.clamp(-1.0, 1.0))
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Lowercase word tokens with surrounding punctuation stripped; embedded
/// apostrophes survive so contractions like `don't` stay intact.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Linear lookup in a small static word table.
fn lookup(table: &[(&str, f64)], token: &str) -> Option<f64> {
    table
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, value)| *value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::classifier::classify;
    use sentiment_core::models::SentimentLabel;

    // ── tokenize ──────────────────────────────────────────────────────────────

    #[test]
    fn test_tokenize_strips_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("I LOVE this!"),
            vec!["i", "love", "this"]
        );
    }

    #[test]
    fn test_tokenize_keeps_contractions() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    // ── LexiconBackend ────────────────────────────────────────────────────────

    #[test]
    fn test_lexicon_positive_review() {
        let backend = LexiconBackend::new();
        let score = backend.score("I love this!").unwrap();
        assert!(score >= 0.05, "score = {score}");
        assert_eq!(classify(score), SentimentLabel::Positive);
    }

    #[test]
    fn test_lexicon_negative_review() {
        let backend = LexiconBackend::new();
        let score = backend.score("I hate this.").unwrap();
        assert!(score <= -0.05, "score = {score}");
        assert_eq!(classify(score), SentimentLabel::Negative);
    }

    #[test]
    fn test_lexicon_neutral_review() {
        let backend = LexiconBackend::new();
        let score = backend.score("It exists.").unwrap();
        assert_eq!(score, 0.0);
        assert_eq!(classify(score), SentimentLabel::Neutral);
    }

    #[test]
    fn test_lexicon_negation_flips_polarity() {
        let backend = LexiconBackend::new();
        let plain = backend.score("good product").unwrap();
        let negated = backend.score("not good product").unwrap();
        assert!(plain > 0.0);
        assert!(negated < 0.0, "negated score = {negated}");
    }

    #[test]
    fn test_lexicon_booster_amplifies() {
        let backend = LexiconBackend::new();
        let plain = backend.score("good").unwrap();
        let boosted = backend.score("very good").unwrap();
        assert!(boosted > plain, "boosted = {boosted}, plain = {plain}");
    }

    #[test]
    fn test_lexicon_dampener_softens() {
        let backend = LexiconBackend::new();
        let plain = backend.score("good").unwrap();
        let dampened = backend.score("slightly good").unwrap();
        assert!(dampened < plain, "dampened = {dampened}, plain = {plain}");
        assert!(dampened > 0.0);
    }

    #[test]
    fn test_lexicon_exclamations_add_emphasis() {
        let backend = LexiconBackend::new();
        let calm = backend.score("great").unwrap();
        let excited = backend.score("great!!!").unwrap();
        assert!(excited > calm);
    }

    #[test]
    fn test_lexicon_exclamations_alone_score_nothing() {
        let backend = LexiconBackend::new();
        assert_eq!(backend.score("!!!").unwrap(), 0.0);
    }

    #[test]
    fn test_lexicon_scores_stay_in_range() {
        let backend = LexiconBackend::new();
        let gushing =
            "love love love amazing wonderful perfect best excellent fantastic outstanding!!!";
        let score = backend.score(gushing).unwrap();
        assert!(score <= 1.0);
        assert!(score > 0.8, "score = {score}");

        let scathing = "hate hate hate awful terrible horrible worst garbage worthless";
        let score = backend.score(scathing).unwrap();
        assert!(score >= -1.0);
        assert!(score < -0.8, "score = {score}");
    }

    // ── PatternBackend ────────────────────────────────────────────────────────

    #[test]
    fn test_pattern_single_word() {
        let backend = PatternBackend::new();
        let score = backend.score("great").unwrap();
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_pattern_averages_matches() {
        let backend = PatternBackend::new();
        // ("good", 0.7) and ("bad", -0.7) average to zero.
        let score = backend.score("good and bad").unwrap();
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_pattern_negation_halves_and_flips() {
        let backend = PatternBackend::new();
        let score = backend.score("not great").unwrap();
        assert!((score + 0.4).abs() < 1e-9, "score = {score}");
    }

    #[test]
    fn test_pattern_no_matches_is_zero() {
        let backend = PatternBackend::new();
        assert_eq!(backend.score("the quick brown fox").unwrap(), 0.0);
    }

    // ── RemoteBackend ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_score_response_valid() {
        let body = serde_json::json!({ "score": 0.42 });
        assert!((parse_score_response(&body).unwrap() - 0.42).abs() < 1e-9);
    }

    #[test]
    fn test_parse_score_response_clamps_out_of_range() {
        let body = serde_json::json!({ "score": 7.5 });
        assert_eq!(parse_score_response(&body).unwrap(), 1.0);

        let body = serde_json::json!({ "score": -7.5 });
        assert_eq!(parse_score_response(&body).unwrap(), -1.0);
    }

    #[test]
    fn test_parse_score_response_missing_field() {
        let body = serde_json::json!({ "sentiment": 0.5 });
        assert!(parse_score_response(&body).is_err());
    }

    #[test]
    fn test_parse_score_response_non_numeric() {
        let body = serde_json::json!({ "score": "high" });
        assert!(parse_score_response(&body).is_err());
    }

    // ── backend_for_id ────────────────────────────────────────────────────────

    #[test]
    fn test_backend_for_id_lexicon() {
        let backend = backend_for_id("lexicon", None, Duration::from_secs(10)).unwrap();
        assert_eq!(backend.id(), "lexicon");
    }

    #[test]
    fn test_backend_for_id_pattern() {
        let backend = backend_for_id("pattern", None, Duration::from_secs(10)).unwrap();
        assert_eq!(backend.id(), "pattern");
    }

    #[test]
    fn test_backend_for_id_remote_requires_url() {
        let err = backend_for_id("remote", None, Duration::from_secs(10)).unwrap_err();
        assert!(matches!(err, SentimentError::Config(_)));
    }

    #[test]
    fn test_backend_for_id_remote_with_url() {
        let backend = backend_for_id(
            "remote",
            Some("http://localhost:9000/score"),
            Duration::from_secs(10),
        )
        .unwrap();
        assert_eq!(backend.id(), "remote");
    }

    #[test]
    fn test_backend_for_id_unknown() {
        let err = backend_for_id("oracle", None, Duration::from_secs(10)).unwrap_err();
        assert!(matches!(err, SentimentError::UnknownBackend(s) if s == "oracle"));
    }

    #[test]
    fn test_known_backends_all_constructible() {
        for id in sentiment_core::models::KNOWN_BACKENDS {
            let backend = backend_for_id(
                id,
                Some("http://localhost:9000/score"),
                Duration::from_secs(10),
            )
            .unwrap();
            assert_eq!(backend.id(), id);
        }
    }
}
