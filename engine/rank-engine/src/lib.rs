//! Rank Engine
//!
//! Orders filtered prospects for display, derives role-group ranks and
//! draft-pick labels, builds the consensus board from published boards and
//! grades boards by opportunity cost.

pub mod cache;
pub mod compare;
pub mod config;
pub mod consensus;
pub mod draft;
pub mod error;
pub mod models;
pub mod opportunity;
pub mod position;
pub mod sort;
pub mod value;

#[cfg(test)]
mod tests;

pub use cache::{fingerprint, RankCache};
pub use compare::{compare_prospects, numeric_columns, percentile};
pub use config::{CompanionColumn, RankConfig, ValueKind};
pub use consensus::{score, try_score, ConsensusCalculator, RankedBoard};
pub use draft::{display_pick, is_undrafted};
pub use error::RankError;
pub use models::*;
pub use opportunity::{evaluate_board, opportunity_cost, truth_from_records};
pub use position::{role_rank, role_ranks};
pub use sort::{locale_compare, rank, sort_records, SortDirection, SortKey, SortState};
