//! Stale-response guard for board loads
//!
//! Switching boards while a fetch is still in flight must not let the older
//! response overwrite the newer one. Every load takes a ticket from a shared
//! counter; a finished load is only applied if no newer ticket was issued.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket identifying one issued load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Monotonic request counter shared by every load of one view
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration {
    latest: Arc<AtomicU64>,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new load, superseding all earlier ones
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether no newer load has been issued since `ticket`
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Id of the most recently issued ticket (0 before any load)
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let generation = LoadGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = LoadGeneration::new();
        let handle = generation.clone();

        let ticket = generation.begin();
        handle.begin();
        assert!(!generation.is_current(ticket));
        assert_eq!(generation.latest(), 2);
    }
}
