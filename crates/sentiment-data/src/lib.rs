//! Data layer for the Sentiment Analyzer.
//!
//! Responsible for discovering and loading review files from the data
//! directory and for persisting, rediscovering and reading back analysis
//! result sets.

pub mod reader;
pub mod store;

pub use sentiment_core as core;
