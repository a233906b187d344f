//! Prospect filtering
//!
//! Every predicate is evaluated against the full, unfiltered board on each
//! call. Predicates are independent and combine with AND, so their order
//! only affects how early a record is rejected.

use board_loader::{BoardSchema, ProspectRecord};
use serde::{Deserialize, Serialize};

use crate::teams::team_name;
use crate::types::Role;

/// Active filter selections for one view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Role group, `None` for all
    pub role: Option<Role>,
    /// Exact league / category value (e.g. "NCAA", "International")
    pub league: Option<String>,
    /// Exact tier identifier
    pub tier: Option<String>,
    /// Free-text query, matched case-insensitively
    pub query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }

    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        self.league = Some(league.into());
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Select a tier, or clear it when the same tier is selected again
    pub fn toggle_tier(&mut self, tier: &str) {
        if self.tier.as_deref() == Some(tier) {
            self.tier = None;
        } else {
            self.tier = Some(tier.to_string());
        }
    }

    /// Whether any predicate would reject records
    pub fn is_active(&self) -> bool {
        self.role.is_some()
            || self.league.is_some()
            || self.tier.is_some()
            || !self.query.trim().is_empty()
    }

    /// Whether a single record passes every active predicate
    pub fn matches(&self, record: &ProspectRecord, schema: &BoardSchema) -> bool {
        self.matches_role(record, schema)
            && self.matches_league(record, schema)
            && self.matches_tier(record, schema)
            && self.matches_query(record, schema)
    }

    fn matches_role(&self, record: &ProspectRecord, schema: &BoardSchema) -> bool {
        match self.role {
            None => true,
            Some(role) => record.get(&schema.role).and_then(Role::normalize) == Some(role),
        }
    }

    fn matches_league(&self, record: &ProspectRecord, schema: &BoardSchema) -> bool {
        match &self.league {
            None => true,
            Some(league) => record.get(&schema.league) == Some(league.as_str()),
        }
    }

    fn matches_tier(&self, record: &ProspectRecord, schema: &BoardSchema) -> bool {
        match &self.tier {
            None => true,
            Some(tier) => record.get(&schema.tier) == Some(tier.as_str()),
        }
    }

    fn matches_query(&self, record: &ProspectRecord, schema: &BoardSchema) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        let contains = |value: Option<&str>| {
            value.map(|v| v.to_lowercase().contains(&query)).unwrap_or(false)
        };

        let nba_team = record.get(&schema.nba_team);
        contains(record.get(&schema.name))
            || contains(record.get(&schema.pre_draft_team))
            || contains(nba_team)
            || contains(nba_team.and_then(team_name))
    }
}

/// Records passing every active predicate, in input order
pub fn filter(
    records: &[ProspectRecord],
    state: &FilterState,
    schema: &BoardSchema,
) -> Vec<ProspectRecord> {
    records.iter().filter(|record| state.matches(record, schema)).cloned().collect()
}
