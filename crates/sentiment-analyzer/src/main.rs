mod bootstrap;
mod menu;

use std::time::Duration;

use anyhow::Result;
use sentiment_core::error::SentimentError;
use sentiment_core::formatting::render_summary;
use sentiment_core::settings::Settings;
use sentiment_core::statistics::StatisticsEngine;
use sentiment_data::{reader, store};
use sentiment_runtime::{backends, dispatcher};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories(&settings)?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Sentiment Analyzer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Mode: {}, Backend: {}, Data dir: {}",
        settings.mode,
        settings.backend,
        settings.data_dir.display()
    );

    match settings.mode.as_str() {
        "interactive" => menu::run(&settings)?,

        "analyze" => run_analyze(&settings)?,

        "stats" => run_stats(&settings)?,

        unknown => {
            eprintln!("Unknown mode: {}", unknown);
        }
    }

    Ok(())
}

/// One-shot analysis: score `--file` with the configured backend and
/// persist the result set.
fn run_analyze(settings: &Settings) -> Result<()> {
    let source = settings.file.clone().ok_or_else(|| {
        SentimentError::Config("analyze mode requires --file <review-file>".to_string())
    })?;

    let reviews = reader::load_reviews(&source)?;
    if reviews.is_empty() {
        return Err(SentimentError::EmptyInput.into());
    }

    let backend = backends::backend_for_id(
        &settings.backend,
        settings.api_url.as_deref(),
        Duration::from_secs(u64::from(settings.api_timeout)),
    )?;

    let records = dispatcher::run_analysis(&reviews, backend.as_ref())?;
    let path = store::write_records(&settings.results_dir, &source, backend.id(), &records)?;

    println!("Sentiment analysis results saved to '{}'", path.display());
    Ok(())
}

/// One-shot statistics: summarise the result file given by `--file`.
fn run_stats(settings: &Settings) -> Result<()> {
    let file = settings.file.clone().ok_or_else(|| {
        SentimentError::Config("stats mode requires --file <result-file>".to_string())
    })?;

    let records = store::read_records(&file)?;
    let summary = StatisticsEngine::summarize(&records)?;

    print!("{}", render_summary(&summary));
    Ok(())
}
