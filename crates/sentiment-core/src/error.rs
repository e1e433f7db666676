use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Sentiment Analyzer.
#[derive(Error, Debug)]
pub enum SentimentError {
    /// A review or result file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The review file extension is not one of the supported formats.
    #[error("Unsupported format: {0} (use .txt or .csv)")]
    UnsupportedFormat(PathBuf),

    /// The review sequence is empty; there is nothing to analyze or persist.
    #[error("No reviews to analyze")]
    EmptyInput,

    /// A result set with zero records was handed to the statistics engine.
    #[error("Result set contains no records")]
    EmptyResultSet,

    /// A scoring backend failed on a single review. The whole run aborts.
    #[error("Backend '{backend}' failed on review {review_index}: {message}")]
    Backend {
        backend: String,
        review_index: usize,
        message: String,
    },

    /// A backend identifier string is not one of the recognised backends.
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    /// A stored classification string is not one of the three label values.
    #[error("Invalid sentiment label: {0}")]
    InvalidLabel(String),

    /// A CSV result file could not be parsed or written.
    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the sentiment crates.
pub type Result<T> = std::result::Result<T, SentimentError>;
