//! Tabular view with per-column visibility

use rank_engine::RankedRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::cards::EMPTY_MESSAGE;
use super::RenderContext;

/// Widest a cell may render before it is truncated
const MAX_CELL_WIDTH: usize = 28;

/// One table column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Record field the column shows
    pub field: String,
    /// Header text
    pub label: String,
    pub visible: bool,
}

impl ColumnSpec {
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        Self { label: field.clone(), field, visible: true }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<ColumnSpec>,
}

impl TableView {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        Self::new(fields.iter().map(|f| ColumnSpec::new(f.as_ref())).collect())
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [ColumnSpec] {
        &mut self.columns
    }

    /// Show or hide a column. Returns `false` for an unknown field.
    pub fn set_visible(&mut self, field: &str, visible: bool) -> bool {
        match self.columns.iter_mut().find(|c| c.field == field) {
            Some(column) => {
                column.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.visible)
    }

    /// Render with a leading `#` position column and aligned cells
    pub fn render(&self, ranked: &[RankedRecord], ctx: &RenderContext<'_>) -> String {
        if ranked.is_empty() {
            return format!("{}\n", EMPTY_MESSAGE);
        }

        let columns: Vec<&ColumnSpec> = self.visible_columns().collect();
        let rows: Vec<Vec<String>> = ranked
            .iter()
            .map(|entry| {
                let mut cells = vec![entry.position.to_string()];
                cells.extend(columns.iter().map(|c| truncate(&ctx.cell(&entry.record, &c.field))));
                cells
            })
            .collect();

        let mut header = vec!["#".to_string()];
        header.extend(columns.iter().map(|c| truncate(&c.label)));

        let widths: Vec<usize> = (0..header.len())
            .map(|i| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header[i].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        write_row(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(&mut out, &rule, &widths);
        for row in &rows {
            write_row(&mut out, row, &widths);
        }
        out
    }
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_WIDTH {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(MAX_CELL_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_loader::{BoardSchema, ProspectRecord};
    use rank_engine::RankConfig;
    use std::collections::HashMap;

    fn rows() -> Vec<RankedRecord> {
        vec![
            RankedRecord {
                position: 1,
                record: ProspectRecord::from_pairs(&[("Name", "Ace Bailey"), ("Pick", "5"), ("Tier", "1")]),
            },
            RankedRecord {
                position: 2,
                record: ProspectRecord::from_pairs(&[("Name", "Zed Key"), ("Pick", "62"), ("Tier", "")]),
            },
        ]
    }

    #[test]
    fn test_render_aligned_table() {
        let schema = BoardSchema::default();
        let config = RankConfig::default();
        let role_ranks = HashMap::new();
        let ctx = RenderContext { schema: &schema, rank_config: &config, role_ranks: &role_ranks };

        let table = TableView::from_fields(&["Name", "Pick", "Tier"]);
        let out = table.render(&rows(), &ctx);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "#  Name        Pick       Tier");
        assert_eq!(lines[1], "-  ----------  ---------  ----");
        assert_eq!(lines[2], "1  Ace Bailey  5          1");
        assert_eq!(lines[3], "2  Zed Key     Undrafted  N/A");
    }

    #[test]
    fn test_hidden_columns_are_skipped() {
        let schema = BoardSchema::default();
        let config = RankConfig::default();
        let role_ranks = HashMap::new();
        let ctx = RenderContext { schema: &schema, rank_config: &config, role_ranks: &role_ranks };

        let mut table = TableView::from_fields(&["Name", "Pick", "Tier"]);
        assert!(table.set_visible("Pick", false));
        assert!(!table.set_visible("Wingspan", false));

        let out = table.render(&rows(), &ctx);
        assert!(!out.contains("Pick"));
        assert!(!out.contains("Undrafted"));
        assert!(out.starts_with("#  Name        Tier"));
    }

    #[test]
    fn test_long_cells_truncate() {
        let long = "x".repeat(40);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_CELL_WIDTH);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("short"), "short");
    }
}
