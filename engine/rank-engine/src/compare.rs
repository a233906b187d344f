//! Head-to-head prospect comparison
//!
//! Produces the per-column values and board percentiles a radar or line
//! chart plots for two prospects.

use board_loader::ProspectRecord;

use crate::config::RankConfig;
use crate::models::ComparisonRow;
use crate::value::{is_numeric_column, numeric_value};

/// Percentage of values at or below `value`
pub fn percentile(values: &[f64], value: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let at_or_below = values.iter().filter(|v| **v <= value).count();
    Some(at_or_below as f64 / values.len() as f64 * 100.0)
}

/// Columns of a board that sort numerically, in header order
pub fn numeric_columns(headers: &[String], records: &[ProspectRecord], config: &RankConfig) -> Vec<String> {
    headers
        .iter()
        .filter(|header| is_numeric_column(records, header, config))
        .cloned()
        .collect()
}

/// Compare two prospects column by column against the whole board
pub fn compare_prospects(
    records: &[ProspectRecord],
    left: &ProspectRecord,
    right: &ProspectRecord,
    columns: &[String],
    config: &RankConfig,
) -> Vec<ComparisonRow> {
    columns
        .iter()
        .map(|column| {
            let board_values: Vec<f64> =
                records.iter().filter_map(|r| numeric_value(r, column, config)).collect();
            let left_value = numeric_value(left, column, config);
            let right_value = numeric_value(right, column, config);

            ComparisonRow {
                column: column.clone(),
                left_value,
                right_value,
                left_percentile: left_value.and_then(|v| percentile(&board_values, v)),
                right_percentile: right_value.and_then(|v| percentile(&board_values, v)),
            }
        })
        .collect()
}
