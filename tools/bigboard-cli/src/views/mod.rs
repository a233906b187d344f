//! Terminal renderings of a ranked board

pub mod cards;
pub mod table;

pub use cards::CardList;
pub use table::{ColumnSpec, TableView};

use board_loader::{BoardSchema, ProspectRecord, NOT_AVAILABLE};
use rank_engine::{display_pick, RankConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which rendering a board is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Cards,
    Table,
}

/// Everything a view needs besides the ranked rows
pub struct RenderContext<'a> {
    pub schema: &'a BoardSchema,
    pub rank_config: &'a RankConfig,
    /// Position within the prospect's role group, by name
    pub role_ranks: &'a HashMap<String, usize>,
}

impl<'a> RenderContext<'a> {
    /// Display text for one cell
    ///
    /// The pick column shows the undrafted label past the threshold. Absent
    /// and blank values show as N/A.
    pub fn cell(&self, record: &ProspectRecord, field: &str) -> String {
        if field == self.schema.pick {
            return display_pick(record, field, self.rank_config);
        }
        match record.get(field) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn role_rank(&self, record: &ProspectRecord) -> Option<usize> {
        self.role_ranks.get(self.schema.name_of(record)).copied()
    }
}
