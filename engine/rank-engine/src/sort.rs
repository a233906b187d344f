//! Sort state and the ranking comparator
//!
//! Comparator precedence: missing values last in either direction, then
//! companion-column coercion, then numeric comparison, then a locale-style
//! string comparison. Sorting is stable so toggling the direction never
//! reshuffles equal values.

use board_loader::ProspectRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::RankConfig;
use crate::models::RankedRecord;
use crate::value::{is_numeric_column, numeric_value};

/// What a view is sorted by
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Position in the current filtered set's insertion order
    Rank,
    /// A data column
    Column(String),
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("rank") {
            Ok(SortKey::Rank)
        } else {
            Ok(SortKey::Column(s.trim().to_string()))
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Rank => f.write_str("Rank"),
            SortKey::Column(column) => f.write_str(column),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort key and direction selected in a view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on a key
    pub fn new(key: SortKey) -> Self {
        Self { key, direction: SortDirection::Ascending }
    }

    pub fn descending(key: SortKey) -> Self {
        Self { key, direction: SortDirection::Descending }
    }

    /// Select a key the way a column header click does
    ///
    /// The same key flips the direction; a new key starts ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn toggle(&mut self) {
        self.direction = self.direction.flipped();
    }
}

/// Precomputed sort value of one record
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Missing,
    Number(f64),
    Text(String),
}

/// Locale-style comparison: accent- and case-insensitive first, then
/// accented after plain letters, then lowercase before uppercase
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn collation_key(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

fn compare_values(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    let present = match (a, b) {
        (SortValue::Missing, SortValue::Missing) => return Ordering::Equal,
        (SortValue::Missing, _) => return Ordering::Greater,
        (_, SortValue::Missing) => return Ordering::Less,
        (SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortValue::Text(x), SortValue::Text(y)) => locale_compare(x, y),
        // Values of one column are all numbers or all text
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    };

    match direction {
        SortDirection::Ascending => present,
        SortDirection::Descending => present.reverse(),
    }
}

fn sort_values(records: &[ProspectRecord], key: &SortKey, config: &RankConfig) -> Vec<SortValue> {
    match key {
        SortKey::Rank => records.iter().enumerate().map(|(i, _)| SortValue::Number(i as f64)).collect(),
        SortKey::Column(column) if is_numeric_column(records, column, config) => records
            .iter()
            .map(|record| match numeric_value(record, column, config) {
                Some(value) => SortValue::Number(value),
                None => SortValue::Missing,
            })
            .collect(),
        SortKey::Column(column) => records
            .iter()
            .map(|record| match record.get(column) {
                Some(raw) if !config.is_missing(raw) => SortValue::Text(raw.to_string()),
                _ => SortValue::Missing,
            })
            .collect(),
    }
}

/// Stable ordering of records under a sort state
pub fn sort_records(
    records: &[ProspectRecord],
    sort: &SortState,
    config: &RankConfig,
) -> Vec<ProspectRecord> {
    let values = sort_values(records, &sort.key, config);
    let mut order: Vec<usize> = (0..records.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| compare_values(&values[a], &values[b], sort.direction));
    order.into_iter().map(|i| records[i].clone()).collect()
}

/// Order records and assign display positions
///
/// Without a sort state the input order is kept. Positions are always
/// derived here and never stored on the record.
pub fn rank(
    records: &[ProspectRecord],
    sort: Option<&SortState>,
    config: &RankConfig,
) -> Vec<RankedRecord> {
    let ordered = match sort {
        Some(sort) => sort_records(records, sort, config),
        None => records.to_vec(),
    };

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedRecord { position: index + 1, record })
        .collect()
}
