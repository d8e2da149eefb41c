//! Error types for the data-loader crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the movie dataset.
///
/// Loading happens once at start-up, so every variant is fatal to the
/// process; the binary wraps these with `anyhow` context before exiting.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid JSON or a record is missing a required field
    #[error("Parse error in {path} at line {line}, column {column}: {reason}")]
    ParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        reason: String,
    },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
