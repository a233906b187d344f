//! # Big Board CLI
//!
//! Terminal front end over the board loader, prospect registry and rank
//! engine: card and table views of a board, the consensus board, board
//! grading and prospect comparisons.

pub mod cli;
pub mod config;
pub mod images;
pub mod logging;
pub mod preferences;
pub mod session;
pub mod views;


pub use config::{load_config, BoardConfig, ConfigError};
pub use session::BoardSession;
