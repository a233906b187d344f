//! Opportunity-cost evaluation of a board against realised outcomes
//!
//! For each board slot the cost is the summed value gap to every prospect
//! who turned out better than the slot's pick and was still on the board
//! at that point. The board's score at a cutoff is the mean cost over the
//! slots evaluated.

use board_loader::{BoardSchema, ProspectRecord};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::config::RankConfig;
use crate::models::{BoardEvaluation, CutoffCost};
use crate::value::numeric_value;

/// Ground-truth values (e.g. career value) keyed by prospect name
///
/// Rows whose criterion is missing are left out.
pub fn truth_from_records(
    records: &[ProspectRecord],
    criterion: &str,
    config: &RankConfig,
    schema: &BoardSchema,
) -> Vec<(String, f64)> {
    records
        .iter()
        .filter_map(|record| {
            let name = record.get(&schema.name)?;
            let value = numeric_value(record, criterion, config)?;
            Some((name.to_string(), value))
        })
        .collect()
}

/// Average opportunity cost of `board` over its first `cutoff` slots
///
/// A pick with no ground-truth value is scored at the lowest realised value.
/// Returns `None` when there is nothing to evaluate.
pub fn opportunity_cost(board: &[String], truth: &[(String, f64)], cutoff: usize) -> Option<f64> {
    let positions = cutoff.min(board.len());
    if positions == 0 || truth.is_empty() {
        return None;
    }

    let values: HashMap<&str, f64> = truth.iter().map(|(name, value)| (name.as_str(), *value)).collect();

    let floor = values.values().copied().fold(f64::INFINITY, f64::min);

    let mut best_first: Vec<(&str, f64)> = values.iter().map(|(name, value)| (*name, *value)).collect();
    best_first.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then_with(|| a.0.cmp(b.0)));

    let mut selected: HashSet<&str> = HashSet::new();
    let mut total = 0.0;

    for pick in &board[..positions] {
        let pick = pick.as_str();
        selected.insert(pick);
        let pick_value = values.get(pick).copied().unwrap_or(floor);

        for &(name, value) in &best_first {
            if value <= pick_value {
                break;
            }
            if !selected.contains(name) {
                total += value - pick_value;
            }
        }
    }

    Some(total / positions as f64)
}

/// Opportunity cost of a board at several cutoffs (e.g. 14, 30, 60)
pub fn evaluate_board(
    board_name: &str,
    board: &[String],
    criterion: &str,
    truth: &[(String, f64)],
    cutoffs: &[usize],
) -> BoardEvaluation {
    let costs = cutoffs
        .iter()
        .map(|&cutoff| CutoffCost {
            cutoff,
            positions: cutoff.min(board.len()),
            average_cost: opportunity_cost(board, truth, cutoff),
        })
        .collect();

    BoardEvaluation { board: board_name.to_string(), criterion: criterion.to_string(), costs }
}
