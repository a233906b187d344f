//! Board Loader - reads draft prospect big boards from CSV
//!
//! Boards are static CSV files, local or served over HTTP, whose header row
//! names the fields. Rows become [`ProspectRecord`]s holding raw text; type
//! coercion is left to the filtering and ranking engines.

pub mod error;
pub mod generation;
pub mod loader;
pub mod parser;
pub mod types;

pub use error::LoaderError;
pub use generation::{LoadGeneration, LoadTicket};
pub use loader::BoardLoader;
pub use parser::{parse_board, parse_board_str, ParsedBoard};
pub use types::{BoardData, BoardSchema, ProspectRecord, NOT_AVAILABLE};
