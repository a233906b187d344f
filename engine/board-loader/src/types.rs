use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown for a field the record does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// One prospect row from a big board CSV
///
/// Every value is kept as text. Fields are stored in header order; a field
/// missing from a short (ragged) row is absent rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProspectRecord {
    fields: Vec<(String, String)>,
}

impl ProspectRecord {
    /// Create a record from `(field, value)` pairs in header order
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Convenience constructor used by tests and tools
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    /// Raw value of a field, `None` when the row did not carry it
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, value)| value.as_str())
    }

    /// Value of a field, or `"N/A"` when absent
    pub fn value_or_na(&self, field: &str) -> &str {
        self.get(field).unwrap_or(NOT_AVAILABLE)
    }

    /// Set or replace a field value
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field.to_string(), value)),
        }
    }

    /// Field names carried by this record, in header order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(field, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field names the engines look records up by
///
/// Header names are a hard contract with the CSV files: renaming a column in
/// the data breaks every lookup that uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSchema {
    pub name: String,
    pub role: String,
    pub league: String,
    pub tier: String,
    pub pre_draft_team: String,
    pub nba_team: String,
    pub pick: String,
    pub rank: String,
}

impl Default for BoardSchema {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            role: "Role".to_string(),
            league: "League".to_string(),
            tier: "Tier".to_string(),
            pre_draft_team: "Pre-Draft Team".to_string(),
            nba_team: "NBA Team".to_string(),
            pick: "Pick".to_string(),
            rank: "Rank".to_string(),
        }
    }
}

impl BoardSchema {
    /// Name of a record, or `"N/A"`
    pub fn name_of<'a>(&self, record: &'a ProspectRecord) -> &'a str {
        record.value_or_na(&self.name)
    }
}

/// A loaded board: where it came from, when, and its rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardData {
    /// Path or URL the board was read from
    pub source: String,
    /// When this board was loaded
    pub loaded_at: DateTime<Utc>,
    /// Header row as read from the file
    pub headers: Vec<String>,
    /// Prospect rows in file order
    pub records: Vec<ProspectRecord>,
}

impl BoardData {
    /// Create an empty board for a source
    pub fn new(source: String) -> Self {
        Self { source, loaded_at: Utc::now(), headers: Vec::new(), records: Vec::new() }
    }

    /// Board holding already parsed rows
    pub fn with_records(source: String, headers: Vec<String>, records: Vec<ProspectRecord>) -> Self {
        Self { source, loaded_at: Utc::now(), headers, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// First N rows in file order
    pub fn top_records(&self, limit: usize) -> Vec<&ProspectRecord> {
        self.records.iter().take(limit).collect()
    }
}
