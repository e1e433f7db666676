//! Interactive menu shell.
//!
//! Wraps the analysis pipeline in the numbered stdin/stdout menu: select a
//! review file, analyze it with a chosen backend, or summarise a persisted
//! result set. Core errors are printed and the menu continues; none of
//! them terminates the process from here.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use sentiment_core::error::{Result, SentimentError};
use sentiment_core::formatting::render_summary;
use sentiment_core::models::KNOWN_BACKENDS;
use sentiment_core::settings::Settings;
use sentiment_core::statistics::StatisticsEngine;
use sentiment_data::{reader, store};
use sentiment_runtime::{backends, dispatcher};

// ── Menu loop ─────────────────────────────────────────────────────────────────

/// Run the interactive shell until the user exits.
pub fn run(settings: &Settings) -> Result<()> {
    let mut selected_file: Option<PathBuf> = None;

    loop {
        print_menu();
        let choice = prompt("Enter your choice: ")?;
        match choice.trim() {
            "1" => selected_file = handle_file_selection(&settings.data_dir)?,
            "2" => {
                if let Err(e) = handle_analysis(settings, selected_file.as_deref()) {
                    println!("\n{}", e);
                }
            }
            "3" => {
                if let Err(e) = handle_statistics(&settings.results_dir) {
                    println!("\n{}", e);
                }
            }
            "0" => break,
            _ => println!("Invalid choice. Please enter 0, 1, 2 or 3."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n=== Sentiment Analyzer ===");
    println!("1. Select file");
    println!("2. Analyze file (choose backend)");
    println!("3. Statistics");
    println!("0. Exit");
    println!("==========================");
}

// ── File selection ────────────────────────────────────────────────────────────

/// Present the numbered list of review files and return the chosen one.
///
/// Returns `None` when the directory is empty or the user backs out.
fn handle_file_selection(data_dir: &Path) -> Result<Option<PathBuf>> {
    println!("\n=== Selecting File for Sentiment Analysis ===");
    println!(
        "\nMake sure your file is in the '{}' folder.",
        data_dir.display()
    );
    println!("Note: each line in your file should contain one review.");

    let files = reader::find_review_files(data_dir);
    if files.is_empty() {
        println!(
            "No files in '{}'. Please put your review file there first.",
            data_dir.display()
        );
        return Ok(None);
    }

    println!("\nAvailable files:");
    for (i, file) in files.iter().enumerate() {
        println!("{}. {}", i + 1, display_name(file));
    }

    loop {
        let input = prompt("Enter the number of the file to select (or 0 to cancel): ")?;
        match parse_selection(&input, files.len()) {
            Selection::Cancel => return Ok(None),
            Selection::Index(i) => return Ok(Some(files[i].clone())),
            Selection::Invalid => println!("Invalid file number. Please try again."),
        }
    }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

/// Score the selected file with a backend chosen from the numbered list and
/// persist the result set.
fn handle_analysis(settings: &Settings, selected: Option<&Path>) -> Result<()> {
    let Some(source) = selected else {
        println!("\nPlease select a file first (option 1 in the menu).");
        return Ok(());
    };

    println!("\n=== Analyze Mode ===");
    println!("Selected file: {}", source.display());
    println!("\nChoose a scoring backend:");
    for (i, id) in KNOWN_BACKENDS.iter().enumerate() {
        println!("{}. {}", i + 1, id);
    }

    let backend_id = loop {
        let input = prompt("Enter your choice (or 0 to cancel): ")?;
        match parse_selection(&input, KNOWN_BACKENDS.len()) {
            Selection::Cancel => return Ok(()),
            Selection::Index(i) => break KNOWN_BACKENDS[i],
            Selection::Invalid => println!("Invalid number. Please try again."),
        }
    };

    let reviews = reader::load_reviews(source)?;
    if reviews.is_empty() {
        return Err(SentimentError::EmptyInput);
    }

    let backend = backends::backend_for_id(
        backend_id,
        settings.api_url.as_deref(),
        Duration::from_secs(u64::from(settings.api_timeout)),
    )?;

    let records = dispatcher::run_analysis(&reviews, backend.as_ref())?;
    let path = store::write_records(&settings.results_dir, source, backend.id(), &records)?;

    println!(
        "\nSentiment analysis results saved to '{}'",
        path.display()
    );
    Ok(())
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Summarise a result file chosen from the numbered list.
fn handle_statistics(results_dir: &Path) -> Result<()> {
    let files = store::find_result_files(results_dir);
    if files.is_empty() {
        println!(
            "\nNo analysis results found. Please analyze a file first (option 2 in the menu)."
        );
        return Ok(());
    }

    println!("\n=== Statistics ===");
    println!("\nAvailable result files:");
    for (i, file) in files.iter().enumerate() {
        println!("{}. {}", i + 1, display_name(file));
    }

    loop {
        let input = prompt("Enter the number of the result file (or 0 to cancel): ")?;
        match parse_selection(&input, files.len()) {
            Selection::Cancel => return Ok(()),
            Selection::Index(i) => {
                let records = store::read_records(&files[i])?;
                let summary = StatisticsEngine::summarize(&records)?;
                println!("\n{}", render_summary(&summary));
                return Ok(());
            }
            Selection::Invalid => println!("Invalid file number. Please try again."),
        }
    }
}

// ── Input helpers ─────────────────────────────────────────────────────────────

/// Outcome of parsing a numbered-list selection.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    /// The user typed `0` to back out.
    Cancel,
    /// A valid 0-based index into the list.
    Index(usize),
    /// Anything else, including out-of-range numbers.
    Invalid,
}

/// Parse a 1-based selection into a list of `len` entries.
fn parse_selection(input: &str, len: usize) -> Selection {
    match input.trim().parse::<usize>() {
        Ok(0) => Selection::Cancel,
        Ok(n) if n <= len => Selection::Index(n - 1),
        _ => Selection::Invalid,
    }
}

/// Print `message`, flush and read one line from stdin.
///
/// A closed stdin surfaces as an error so selection loops cannot spin
/// forever on end-of-input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(SentimentError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(line)
}

/// File name for list display; falls back to the full path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
