//! One open board: loaded rows, filters, sort and the cached ranking
//!
//! Switching draft classes can overlap with a slower load that is still in
//! flight. Every load takes a ticket from the session's generation counter
//! and its result is applied only if no newer load has started since.

use board_loader::{BoardData, BoardLoader, BoardSchema, LoadGeneration, LoadTicket};
use prospect_registry::{FilterState, ProspectRegistry};
use rank_engine::{role_ranks, RankCache, RankConfig, RankedRecord, SortKey, SortState};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};

pub struct BoardSession {
    loader: Arc<BoardLoader>,
    generation: LoadGeneration,
    registry: ProspectRegistry,
    headers: Vec<String>,
    source: Option<String>,
    filter: FilterState,
    sort: Option<SortState>,
    cache: RankCache,
    rank_config: RankConfig,
}

impl BoardSession {
    pub fn new(loader: Arc<BoardLoader>, schema: BoardSchema, rank_config: RankConfig) -> Self {
        Self {
            loader,
            generation: LoadGeneration::new(),
            registry: ProspectRegistry::new(schema),
            headers: Vec::new(),
            source: None,
            filter: FilterState::new(),
            sort: None,
            cache: RankCache::new(),
            rank_config,
        }
    }

    /// Start loading `source` without touching the session
    ///
    /// The returned future owns everything it needs, so several loads can be
    /// in flight at once. Hand its output to [`BoardSession::apply_load`].
    pub fn start_load(&self, source: &str) -> impl Future<Output = (LoadTicket, BoardData)> + Send + 'static {
        let ticket = self.generation.begin();
        let loader = Arc::clone(&self.loader);
        let source = source.to_string();
        debug!("Load {} started for {}", ticket.id(), source);

        async move {
            let board = loader.load(&source).await;
            (ticket, board)
        }
    }

    /// Install a finished load unless a newer one has started since.
    /// Returns whether the board was applied.
    pub fn apply_load(&mut self, ticket: LoadTicket, board: BoardData) -> bool {
        if !self.generation.is_current(ticket) {
            info!(
                "Discarding stale load {} of {} (latest is {})",
                ticket.id(),
                board.source,
                self.generation.latest()
            );
            return false;
        }

        self.source = Some(board.source.clone());
        self.headers = board.headers.clone();
        let schema = self.registry.schema().clone();
        self.registry = ProspectRegistry::from_board(board, schema);
        true
    }

    /// Load `source` and make it the current board
    pub async fn switch_board(&mut self, source: &str) -> bool {
        let (ticket, board) = self.start_load(source).await;
        self.apply_load(ticket, board)
    }

    pub fn registry(&self) -> &ProspectRegistry {
        &self.registry
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Sort by `key`; selecting the active key again flips its direction
    pub fn select_sort(&mut self, key: SortKey) {
        match self.sort.as_mut() {
            Some(sort) => sort.select(key),
            None => self.sort = Some(SortState::new(key)),
        }
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    pub fn rank_config(&self) -> &RankConfig {
        &self.rank_config
    }

    /// Filtered and sorted prospects with their display positions
    pub fn ranked(&mut self) -> Arc<Vec<RankedRecord>> {
        let filtered = self.registry.filtered(&self.filter);
        self.cache.get_or_rank(&filtered, self.sort.as_ref(), &self.rank_config)
    }

    /// Role-group positions over the whole board under the current sort
    pub fn role_ranks(&self) -> HashMap<String, usize> {
        role_ranks(self.registry.records(), self.sort.as_ref(), &self.rank_config, self.registry.schema())
    }

    pub fn cache(&self) -> &RankCache {
        &self.cache
    }
}
