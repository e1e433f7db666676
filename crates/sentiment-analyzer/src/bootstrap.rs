use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sentiment_core::settings::Settings;

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the working directories exist.
///
/// Creates the following directories if absent (including any missing
/// parents):
/// - the review data directory (`--data-dir`)
/// - the results directory (`--results-dir`)
/// - `~/.sentiment-analyzer/` for persisted configuration
pub fn ensure_directories(settings: &Settings) -> anyhow::Result<()> {
    std::fs::create_dir_all(&settings.data_dir)?;
    std::fs::create_dir_all(&settings.results_dir)?;

    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(home.join(".sentiment-analyzer"))?;

    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    // Map the CLI log-level names to tracing directives (tracing uses
    // lowercase).
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    // ── test_ensure_directories ───────────────────────────────────────────────

    #[test]
    fn test_ensure_directories_creates_data_and_results() {
        let tmp = TempDir::new().expect("tempdir");
        let data_dir = tmp.path().join("data");
        let results_dir = tmp.path().join("results");

        let settings = Settings::parse_from([
            "sentiment-analyzer",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--results-dir",
            results_dir.to_str().unwrap(),
        ]);

        ensure_directories(&settings).expect("ensure_directories should succeed");

        assert!(data_dir.is_dir(), "data dir must exist");
        assert!(results_dir.is_dir(), "results dir must exist");
    }

    #[test]
    fn test_ensure_directories_is_idempotent() {
        let tmp = TempDir::new().expect("tempdir");
        let data_dir = tmp.path().join("data");
        let results_dir = tmp.path().join("results");

        let settings = Settings::parse_from([
            "sentiment-analyzer",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--results-dir",
            results_dir.to_str().unwrap(),
        ]);

        ensure_directories(&settings).expect("first call");
        ensure_directories(&settings).expect("second call must also succeed");
    }
}
