//! Memoised ranking per (filtered set, sort state)

use board_loader::ProspectRecord;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

use crate::config::RankConfig;
use crate::models::RankedRecord;
use crate::sort::{rank, SortState};

/// Deterministic fingerprint of an ordered record set
///
/// Same records in the same order always produce the same value, so a
/// re-render with an unchanged filtered set can reuse the last ranking.
pub fn fingerprint(records: &[ProspectRecord]) -> u64 {
    let mut hasher = DefaultHasher::new();
    records.len().hash(&mut hasher);
    for record in records {
        record.hash(&mut hasher);
    }
    hasher.finish()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    fingerprint: u64,
    sort: Option<SortState>,
}

/// Single-entry ranking cache owned by one view
#[derive(Debug, Default)]
pub struct RankCache {
    entry: Option<(CacheKey, Arc<Vec<RankedRecord>>)>,
    hits: u64,
    misses: u64,
}

impl RankCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranking for the records and sort state, recomputed only when either
    /// changed since the previous call
    pub fn get_or_rank(
        &mut self,
        records: &[ProspectRecord],
        sort: Option<&SortState>,
        config: &RankConfig,
    ) -> Arc<Vec<RankedRecord>> {
        let key = CacheKey { fingerprint: fingerprint(records), sort: sort.cloned() };

        if let Some((cached_key, ranked)) = &self.entry {
            if *cached_key == key {
                self.hits += 1;
                return Arc::clone(ranked);
            }
        }

        self.misses += 1;
        debug!("Ranking {} prospects (sort: {:?})", records.len(), sort);
        let ranked = Arc::new(rank(records, sort, config));
        self.entry = Some((key, Arc::clone(&ranked)));
        ranked
    }

    /// Drop the cached ranking, e.g. after a configuration change
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
