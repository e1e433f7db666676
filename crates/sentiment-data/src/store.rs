//! Result-set persistence.
//!
//! Implements the result-store contract: deterministic file naming per
//! (source, backend) identity, CSV schema with the exact header
//! `Review,Sentiment Score,Sentiment Classification`, write-once semantics
//! (rerunning overwrites, never appends) and read-back for the statistics
//! engine.

use std::path::{Path, PathBuf};

use regex::Regex;
use sentiment_core::error::{Result, SentimentError};
use sentiment_core::models::{AnalysisRecord, KNOWN_BACKENDS};
use tracing::{debug, warn};

// ── Naming ────────────────────────────────────────────────────────────────────

/// Build the result file name for a (source, backend) pair:
/// `<base-name-without-extension>_sentiment_<backend>.csv`.
///
/// The mapping is deterministic, so re-running the same backend against the
/// same source overwrites the same artifact while different backends
/// coexist side by side.
pub fn result_file_name(source: &Path, backend_id: &str) -> String {
    let base = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("reviews");
    format!("{}_sentiment_{}.csv", base, backend_id)
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Persist an analysis record sequence for `source` under `results_dir`.
///
/// Refuses a zero-record sequence with [`SentimentError::EmptyInput`]; an
/// empty analysis must be reported, not silently written as a header-only
/// file. The rows are written to a temp file which is renamed into place,
/// so a result file never mixes old and new rows.
///
/// Returns the path of the written file.
pub fn write_records(
    results_dir: &Path,
    source: &Path,
    backend_id: &str,
    records: &[AnalysisRecord],
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(SentimentError::EmptyInput);
    }

    std::fs::create_dir_all(results_dir)?;

    let path = results_dir.join(result_file_name(source, backend_id));
    let tmp = path.with_extension("csv.tmp");

    {
        let mut writer = csv::Writer::from_path(&tmp)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }

    std::fs::rename(&tmp, &path)?;

    debug!(
        "Wrote {} records to {}",
        records.len(),
        path.display()
    );

    Ok(path)
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Load a persisted result file back into an ordered record sequence.
pub fn read_records(path: &Path) -> Result<Vec<AnalysisRecord>> {
    let file = std::fs::File::open(path).map_err(|source| SentimentError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records: Vec<AnalysisRecord> = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }

    debug!("Read {} records from {}", records.len(), path.display());

    Ok(records)
}

// ── Discovery ─────────────────────────────────────────────────────────────────

/// Find all result files of known backends directly inside `results_dir`,
/// sorted by path.
///
/// Only files ending in `_sentiment_<known-backend-id>.csv` are recognised;
/// anything else in the directory is ignored.
pub fn find_result_files(results_dir: &Path) -> Vec<PathBuf> {
    if !results_dir.exists() {
        warn!("Results path does not exist: {}", results_dir.display());
        return Vec::new();
    }

    let Some(suffix) = result_suffix_pattern() else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(results_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| suffix.is_match(n))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Regex matching the `_sentiment_<known-backend>.csv` file-name suffix.
///
/// `KNOWN_BACKENDS` holds plain lowercase identifiers, so compilation only
/// fails if that list is corrupted; callers treat `None` as "match nothing".
fn result_suffix_pattern() -> Option<Regex> {
    let alternatives = KNOWN_BACKENDS.join("|");
    Regex::new(&format!(r"_sentiment_({})\.csv$", alternatives)).ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
