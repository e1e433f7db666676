//! Review file discovery and loading.
//!
//! Reads plain-text review files (one review per line) from the data
//! directory and converts them into trimmed review strings for the
//! dispatcher.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use sentiment_core::error::{Result, SentimentError};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all plain files directly inside `data_dir`, sorted by path.
///
/// Subdirectories are not descended into: the data directory is flat, one
/// review file per analysis source.
pub fn find_review_files(data_dir: &Path) -> Vec<PathBuf> {
    if !data_dir.exists() {
        warn!("Data path does not exist: {}", data_dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load the reviews from a `.txt` or `.csv` file, one review per line.
///
/// Each line is trimmed; empty lines are dropped. Any other extension is
/// rejected with [`SentimentError::UnsupportedFormat`], and read failures
/// surface as [`SentimentError::FileRead`] with the offending path. Errors
/// are returned values; nothing panics past this boundary.
pub fn load_reviews(path: &Path) -> Result<Vec<String>> {
    if !is_supported_format(path) {
        return Err(SentimentError::UnsupportedFormat(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|source| SentimentError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = std::io::BufReader::new(file);
    let mut reviews: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| SentimentError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        reviews.push(trimmed.to_string());
    }

    debug!("Loaded {} reviews from {}", reviews.len(), path.display());

    Ok(reviews)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Review sources are line-oriented `.txt` or `.csv` files (case-insensitive
/// extension match).
fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            lower == "txt" || lower == "csv"
        })
        .unwrap_or(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
