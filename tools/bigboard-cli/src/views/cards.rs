//! Card list view with incremental paging

use rank_engine::RankedRecord;
use std::fmt::Write;

use super::RenderContext;
use crate::images::ImageResolver;

/// Shown in place of cards when the filters match nothing
pub const EMPTY_MESSAGE: &str = "No prospects found";

/// A card list that reveals `page_size` more cards per `load_more`
#[derive(Debug, Clone)]
pub struct CardList {
    page_size: usize,
    visible: usize,
}

impl CardList {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self { page_size, visible: page_size }
    }

    /// Reveal the next page. Returns `false` when every card is already shown.
    pub fn load_more(&mut self, total: usize) -> bool {
        if self.visible >= total {
            return false;
        }
        self.visible = (self.visible + self.page_size).min(total);
        true
    }

    /// Back to the first page, e.g. after the filters change
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// The cards currently on screen
    pub fn visible_slice<'a>(&self, ranked: &'a [RankedRecord]) -> &'a [RankedRecord] {
        &ranked[..self.visible.min(ranked.len())]
    }

    pub fn render(&self, ranked: &[RankedRecord], ctx: &RenderContext<'_>, images: &ImageResolver) -> String {
        if ranked.is_empty() {
            return format!("{}\n", EMPTY_MESSAGE);
        }

        let schema = ctx.schema;
        let mut out = String::new();

        for entry in self.visible_slice(ranked) {
            let record = &entry.record;
            let name = schema.name_of(record);

            let _ = writeln!(out, "#{:<4} {}  ({})", entry.position, name, ctx.cell(record, &schema.role));
            let _ = writeln!(
                out,
                "      {} -> {}   Pick: {}   Tier: {}",
                ctx.cell(record, &schema.pre_draft_team),
                ctx.cell(record, &schema.nba_team),
                ctx.cell(record, &schema.pick),
                ctx.cell(record, &schema.tier),
            );
            if let Some(role_rank) = ctx.role_rank(record) {
                let _ = writeln!(out, "      {} rank: {}", ctx.cell(record, &schema.role), role_rank);
            }
            let _ = writeln!(out, "      Image: {}", images.resolve(name));
        }

        if self.has_more(ranked.len()) {
            let _ = writeln!(out, "... showing {} of {}", self.visible.min(ranked.len()), ranked.len());
        }

        out
    }
}
