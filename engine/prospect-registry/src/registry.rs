use crate::filter::{filter, FilterState};
use crate::types::{RegistryError, Role};
use board_loader::{BoardData, BoardSchema, ProspectRecord};
use std::collections::HashMap;
use tracing::{info, warn};

/// Prospect Registry - the loaded board a view filters and ranks
///
/// Keeps every row in file order plus a name index for lookups.
pub struct ProspectRegistry {
    /// Rows in file order
    records: Vec<ProspectRecord>,

    /// Map from prospect name to row index (first occurrence wins)
    index_by_name: HashMap<String, usize>,

    /// Field names used for lookups
    schema: BoardSchema,
}

impl ProspectRegistry {
    /// Create a new empty registry
    pub fn new(schema: BoardSchema) -> Self {
        Self { records: Vec::new(), index_by_name: HashMap::new(), schema }
    }

    /// Build a registry from a loaded board
    pub fn from_board(board: BoardData, schema: BoardSchema) -> Self {
        let mut registry = Self::new(schema);
        registry.load_records(board.records);
        info!("Registry holds {} prospects from {}", registry.len(), board.source);
        registry
    }

    /// Replace the registry contents
    pub fn load_records(&mut self, records: Vec<ProspectRecord>) {
        self.index_by_name.clear();

        for (index, record) in records.iter().enumerate() {
            let Some(name) = record.get(&self.schema.name) else {
                warn!("Row {} has no {} field", index + 1, self.schema.name);
                continue;
            };

            if self.index_by_name.contains_key(name) {
                warn!("Duplicate prospect name '{}' at row {}, keeping first row", name, index + 1);
                continue;
            }

            self.index_by_name.insert(name.to_string(), index);
        }

        self.records = records;
    }

    /// Get a prospect by name
    pub fn get_by_name(&self, name: &str) -> Result<&ProspectRecord, RegistryError> {
        if self.records.is_empty() {
            return Err(RegistryError::RegistryEmpty);
        }

        self.index_by_name
            .get(name)
            .map(|&index| &self.records[index])
            .ok_or_else(|| RegistryError::ProspectNotFound(name.to_string()))
    }

    /// All prospects in file order
    pub fn records(&self) -> &[ProspectRecord] {
        &self.records
    }

    pub fn schema(&self) -> &BoardSchema {
        &self.schema
    }

    /// Prospects passing a filter, in file order
    pub fn filtered(&self, state: &FilterState) -> Vec<ProspectRecord> {
        filter(&self.records, state, &self.schema)
    }

    /// Search for prospects by partial name, school or team
    pub fn search(&self, query: &str) -> Vec<ProspectRecord> {
        self.filtered(&FilterState::new().with_query(query))
    }

    /// Prospects in one role group
    pub fn by_role(&self, role: Role) -> Vec<ProspectRecord> {
        self.filtered(&FilterState::new().with_role(Some(role)))
    }

    /// Distinct tier values in first-seen order
    pub fn tiers(&self) -> Vec<String> {
        self.distinct_values(&self.schema.tier)
    }

    /// Distinct league values in first-seen order
    pub fn leagues(&self) -> Vec<String> {
        self.distinct_values(&self.schema.league)
    }

    fn distinct_values(&self, field: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for value in self.records.iter().filter_map(|r| r.get(field)) {
            if !value.is_empty() && !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ProspectRegistry {
    fn default() -> Self {
        Self::new(BoardSchema::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_board() -> BoardData {
        let records = vec![
            ProspectRecord::from_pairs(&[
                ("Name", "Cooper Flagg"),
                ("Role", "Wing"),
                ("League", "NCAA"),
                ("Tier", "1"),
                ("Pre-Draft Team", "Duke"),
            ]),
            ProspectRecord::from_pairs(&[
                ("Name", "Noa Essengue"),
                ("Role", "Big"),
                ("League", "International"),
                ("Tier", "3"),
                ("Pre-Draft Team", "Ulm"),
            ]),
            ProspectRecord::from_pairs(&[
                ("Name", "Cooper Flagg"),
                ("Role", "Guard"),
                ("League", "NCAA"),
                ("Tier", "4"),
            ]),
        ];
        BoardData::with_records("test.csv".to_string(), vec![], records)
    }

    #[test]
    fn test_registry_creation() {
        let registry = ProspectRegistry::from_board(create_test_board(), BoardSchema::default());
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_names_keep_first_row() {
        let registry = ProspectRegistry::from_board(create_test_board(), BoardSchema::default());

        let flagg = registry.get_by_name("Cooper Flagg").unwrap();
        assert_eq!(flagg.get("Tier"), Some("1"));
        assert_eq!(registry.records().len(), 3);
    }

    #[test]
    fn test_lookup_errors() {
        let empty = ProspectRegistry::default();
        assert_eq!(empty.get_by_name("Anyone").unwrap_err(), RegistryError::RegistryEmpty);

        let registry = ProspectRegistry::from_board(create_test_board(), BoardSchema::default());
        assert_eq!(
            registry.get_by_name("Ace Bailey").unwrap_err(),
            RegistryError::ProspectNotFound("Ace Bailey".to_string())
        );
    }

    #[test]
    fn test_search_and_role_helpers() {
        let registry = ProspectRegistry::from_board(create_test_board(), BoardSchema::default());

        let results = registry.search("ULM");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].get("Name"), Some("Noa Essengue"));

        assert_eq!(registry.by_role(Role::Guard).len(), 1);
        assert_eq!(registry.by_role(Role::Wing).len(), 1);
    }

    #[test]
    fn test_distinct_tiers_and_leagues() {
        let registry = ProspectRegistry::from_board(create_test_board(), BoardSchema::default());
        assert_eq!(registry.tiers(), vec!["1", "3", "4"]);
        assert_eq!(registry.leagues(), vec!["NCAA", "International"]);
    }
}
