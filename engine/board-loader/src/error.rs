//! Error types for the board loader

use thiserror::Error;

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors that can occur while fetching or parsing a board
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request for {url} failed with status {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("failed to read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("CSV error in {source_name}: {source}")]
    Csv { source_name: String, source: csv::Error },

    #[error("board {0} has no header row")]
    MissingHeader(String),
}
