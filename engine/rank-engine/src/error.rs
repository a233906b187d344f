//! Error types for the rank engine

use thiserror::Error;

/// Result type for rank engine operations
pub type Result<T> = std::result::Result<T, RankError>;

/// Errors that can occur while ranking or scoring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("inclusion rate {0} is outside [0, 1]")]
    InvalidInclusionRate(f64),

    #[error("non-finite {field} value: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("no boards supplied")]
    NoBoards,

    #[error("prospect not found: {0}")]
    ProspectNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),
}
