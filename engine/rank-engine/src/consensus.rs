use board_loader::{BoardSchema, ProspectRecord};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::error::{RankError, Result};
use crate::models::ConsensusEntry;
use crate::value::parse_number;

/// Consensus score of one prospect
///
/// `(min_rank - avg_rank + 1) * sqrt(inclusion_rate)`
pub fn score(min_rank: f64, avg_rank: f64, inclusion_rate: f64) -> f64 {
    (min_rank - avg_rank + 1.0) * inclusion_rate.sqrt()
}

/// Consensus score with input validation
pub fn try_score(min_rank: f64, avg_rank: f64, inclusion_rate: f64) -> Result<f64> {
    for (field, value) in
        [("min_rank", min_rank), ("avg_rank", avg_rank), ("inclusion_rate", inclusion_rate)]
    {
        if !value.is_finite() {
            return Err(RankError::NonFinite { field, value });
        }
    }

    if !(0.0..=1.0).contains(&inclusion_rate) {
        return Err(RankError::InvalidInclusionRate(inclusion_rate));
    }

    Ok(score(min_rank, avg_rank, inclusion_rate))
}

/// One published board reduced to prospect names and their ranks
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBoard {
    pub source: String,
    /// `(name, rank)` in ascending rank order
    pub ranks: Vec<(String, f64)>,
}

impl RankedBoard {
    /// Build a board from loaded rows
    ///
    /// The rank column is used when it holds a number; otherwise the row's
    /// 1-based position is the rank. A repeated name keeps its first row.
    pub fn from_records(source: &str, records: &[ProspectRecord], schema: &BoardSchema) -> Self {
        let mut ranks: Vec<(String, f64)> = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let Some(name) = record.get(&schema.name).filter(|n| !n.is_empty()) else {
                continue;
            };

            if ranks.iter().any(|(existing, _)| existing == name) {
                warn!("Board {} lists '{}' more than once, keeping the first entry", source, name);
                continue;
            }

            let rank = record
                .get(&schema.rank)
                .and_then(parse_number)
                .unwrap_or((index + 1) as f64);
            ranks.push((name.to_string(), rank));
        }

        ranks.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        Self { source: source.to_string(), ranks }
    }

    /// Names in board order
    pub fn names(&self) -> Vec<String> {
        self.ranks.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[derive(Default)]
struct Tally {
    rank_sum: f64,
    boards: usize,
}

/// Builds the consensus board for a draft class
pub struct ConsensusCalculator;

impl ConsensusCalculator {
    /// Score every prospect appearing on any board and order them
    ///
    /// MinRank is the largest board size. Ties on score go to the lower
    /// average rank, then the higher inclusion rate, then the name.
    pub fn build(boards: &[RankedBoard]) -> Result<Vec<ConsensusEntry>> {
        if boards.is_empty() {
            return Err(RankError::NoBoards);
        }

        let min_rank = boards.iter().map(RankedBoard::len).max().unwrap_or(0) as f64;
        let total_boards = boards.len() as f64;

        let mut tallies: HashMap<&str, Tally> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for board in boards {
            for (name, rank) in &board.ranks {
                let tally = tallies.entry(name.as_str()).or_insert_with(|| {
                    first_seen.push(name.as_str());
                    Tally::default()
                });
                tally.rank_sum += rank;
                tally.boards += 1;
            }
        }

        let mut entries = Vec::with_capacity(first_seen.len());
        for name in first_seen {
            let tally = &tallies[name];
            let avg_rank = tally.rank_sum / tally.boards as f64;
            let inclusion_rate = tally.boards as f64 / total_boards;
            let score = try_score(min_rank, avg_rank, inclusion_rate)?;

            entries.push(ConsensusEntry {
                consensus_rank: 0,
                name: name.to_string(),
                avg_rank,
                inclusion_rate,
                boards_included: tally.boards,
                min_rank,
                score,
            });
        }

        entries.sort_by(Self::compare_entries);
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.consensus_rank = index + 1;
        }

        info!(
            "Built consensus of {} prospects from {} boards (min rank {})",
            entries.len(),
            boards.len(),
            min_rank
        );

        Ok(entries)
    }

    fn compare_entries(a: &ConsensusEntry, b: &ConsensusEntry) -> Ordering {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.avg_rank.partial_cmp(&b.avg_rank).unwrap_or(Ordering::Equal))
            .then_with(|| b.inclusion_rate.partial_cmp(&a.inclusion_rate).unwrap_or(Ordering::Equal))
            .then_with(|| a.name.cmp(&b.name))
    }
}
