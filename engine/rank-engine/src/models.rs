use board_loader::ProspectRecord;
use serde::{Deserialize, Serialize};

/// A prospect with its display position in the current ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedRecord {
    /// 1-based position within the filtered, sorted view
    pub position: usize,
    pub record: ProspectRecord,
}

/// One prospect's consensus result for a draft class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusEntry {
    /// 1-based consensus rank
    pub consensus_rank: usize,
    pub name: String,
    /// Mean rank over the boards that include the prospect
    pub avg_rank: f64,
    /// Fraction of boards that include the prospect
    pub inclusion_rate: f64,
    /// Number of boards including the prospect
    pub boards_included: usize,
    /// Largest board size in the class
    pub min_rank: f64,
    pub score: f64,
}

impl ConsensusEntry {
    /// Render as a board row so the consensus board can be filtered and
    /// sorted like any loaded board
    pub fn to_record(&self) -> ProspectRecord {
        ProspectRecord::new(vec![
            ("Rank".to_string(), self.consensus_rank.to_string()),
            ("Name".to_string(), self.name.clone()),
            ("Score".to_string(), format!("{:.2}", self.score)),
            ("Avg Rank".to_string(), format!("{:.2}", self.avg_rank)),
            ("Inclusion".to_string(), format!("{:.3}", self.inclusion_rate)),
            ("Boards".to_string(), self.boards_included.to_string()),
        ])
    }
}

/// Average opportunity cost of a board at one cutoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffCost {
    pub cutoff: usize,
    /// Positions actually evaluated (the board may be shorter than the cutoff)
    pub positions: usize,
    /// `None` when no position could be evaluated
    pub average_cost: Option<f64>,
}

/// Opportunity cost of one board against one ground-truth criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardEvaluation {
    pub board: String,
    pub criterion: String,
    pub costs: Vec<CutoffCost>,
}

/// Side-by-side numeric comparison of two prospects on one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub column: String,
    pub left_value: Option<f64>,
    pub right_value: Option<f64>,
    /// Percentile (0-100) of the value within the board
    pub left_percentile: Option<f64>,
    pub right_percentile: Option<f64>,
}
