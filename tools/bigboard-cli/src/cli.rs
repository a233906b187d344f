//! # Command Line Interface
//!
//! Board views, the consensus board, board grading and head-to-head
//! comparisons over CSV big boards.

use anyhow::{anyhow, bail, Context, Result};
use board_loader::{BoardLoader, ProspectRecord, NOT_AVAILABLE};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use prospect_registry::{parse_role_filter, FilterState};
use rank_engine::{
    compare_prospects, evaluate_board, numeric_columns, truth_from_records, ConsensusCalculator, ConsensusEntry,
    RankedBoard, RankedRecord, SortKey, SortState,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::BoardConfig;
use crate::images::ImageResolver;
use crate::preferences::ColumnPreferences;
use crate::session::BoardSession;
use crate::views::{CardList, ColumnSpec, RenderContext, TableView, ViewMode};

/// NBA draft big board CLI
#[derive(Parser)]
#[command(name = "bigboard")]
#[command(about = "Filter, sort, merge and grade NBA draft big boards")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "bigboard.toml")]
    pub config: PathBuf,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Which board to open
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Board CSV path or URL
    #[arg(long, conflicts_with = "class")]
    pub source: Option<String>,

    /// Draft class configured under [data.boards]
    #[arg(long)]
    pub class: Option<String>,
}

/// Filters, sort and layout for the board view
#[derive(Args, Debug, Clone)]
pub struct BoardViewArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Role filter: guard, wing, big or all
    #[arg(long, default_value = "all")]
    pub role: String,

    /// League filter (exact match)
    #[arg(long)]
    pub league: Option<String>,

    /// Tier filter (exact match)
    #[arg(long)]
    pub tier: Option<String>,

    /// Search names and teams
    #[arg(long)]
    pub search: Option<String>,

    /// Sort column, or "rank" for board order
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Cards or table
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Card pages to show
    #[arg(long, default_value = "1")]
    pub pages: usize,

    /// Table columns, comma separated
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}

impl Default for BoardViewArgs {
    fn default() -> Self {
        Self {
            board: BoardArgs::default(),
            role: "all".to_string(),
            league: None,
            tier: None,
            search: None,
            sort: None,
            desc: false,
            view: None,
            pages: 1,
            columns: None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a board as cards or a table
    Board(BoardViewArgs),
    /// Merge several boards of one class into a consensus board
    Consensus {
        /// Board CSV paths or URLs
        #[arg(required = true)]
        boards: Vec<String>,

        /// Write the consensus board to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Only show the first N prospects
        #[arg(long)]
        top: Option<usize>,
    },
    /// Grade boards by opportunity cost against a ground-truth outcome
    Evaluate {
        /// CSV holding the outcome column
        #[arg(long)]
        truth: String,

        /// Outcome column, e.g. career value
        #[arg(long)]
        criterion: String,

        /// Board positions to evaluate at
        #[arg(long, value_delimiter = ',', default_value = "14,30,60")]
        cutoffs: Vec<usize>,

        /// Board CSV paths or URLs
        #[arg(required = true)]
        boards: Vec<String>,
    },
    /// Compare two prospects column by column
    Compare {
        #[command(flatten)]
        board: BoardArgs,

        left: String,

        right: String,

        /// Columns to compare (default: every numeric column)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,
    },
    /// Show or change table column visibility
    Columns {
        /// Column layout, comma separated (default: configured columns)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        #[arg(long, value_delimiter = ',')]
        hide: Vec<String>,

        #[arg(long, value_delimiter = ',')]
        show: Vec<String>,

        /// Forget stored visibility for this layout
        #[arg(long)]
        reset: bool,
    },
}

/// CLI handler
pub struct CliHandler {
    config: BoardConfig,
    loader: Arc<BoardLoader>,
}

impl CliHandler {
    /// Create new CLI handler
    pub fn new(config: BoardConfig) -> Result<Self> {
        let loader = Arc::new(BoardLoader::new()?);
        Ok(Self { config, loader })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Handle CLI commands
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        let output = match command {
            Commands::Board(args) => self.board_report(&args).await?,
            Commands::Consensus { boards, output, top } => {
                self.consensus_report(&boards, output.as_deref(), top).await?
            }
            Commands::Evaluate { truth, criterion, cutoffs, boards } => {
                self.evaluate_report(&truth, &criterion, &cutoffs, &boards).await?
            }
            Commands::Compare { board, left, right, columns } => {
                self.compare_report(&board, &left, &right, columns).await?
            }
            Commands::Columns { columns, hide, show, reset } => {
                self.columns_report(columns, &hide, &show, reset)?
            }
        };
        print!("{}", output);
        Ok(())
    }

    fn resolve_source(&self, args: &BoardArgs) -> Result<String> {
        if let Some(source) = &args.source {
            return Ok(source.clone());
        }
        match &args.class {
            Some(class) => self
                .config
                .board_for_class(class)
                .map(str::to_string)
                .ok_or_else(|| anyhow!("no board configured for draft class {}", class)),
            None => bail!("no board given: pass --source or --class"),
        }
    }

    /// Open a session on the requested board
    pub async fn open_session(&self, args: &BoardArgs) -> Result<BoardSession> {
        let source = self.resolve_source(args)?;
        let mut session =
            BoardSession::new(Arc::clone(&self.loader), self.config.schema.clone(), self.config.ranking.clone());
        session.switch_board(&source).await;
        Ok(session)
    }

    fn table_for(&self, fields: Option<Vec<String>>) -> Result<(TableView, ColumnPreferences)> {
        let fields = fields.unwrap_or_else(|| self.config.view.columns.clone());
        let mut table = TableView::from_fields(&fields);
        let preferences = ColumnPreferences::load(&self.config.data.preferences_path)?;
        preferences.apply(table.columns_mut());
        Ok((table, preferences))
    }

    /// Render the filtered, sorted board
    pub async fn board_report(&self, args: &BoardViewArgs) -> Result<String> {
        let mut session = self.open_session(&args.board).await?;

        let mut filter = FilterState::new().with_role(parse_role_filter(&args.role)?);
        if let Some(league) = &args.league {
            filter = filter.with_league(league.as_str());
        }
        if let Some(tier) = &args.tier {
            filter = filter.with_tier(tier.as_str());
        }
        if let Some(search) = &args.search {
            filter = filter.with_query(search.as_str());
        }
        session.set_filter(filter);

        if let Some(sort) = &args.sort {
            let key = sort.parse::<SortKey>().unwrap_or(SortKey::Rank);
            session.set_sort(Some(if args.desc { SortState::descending(key) } else { SortState::new(key) }));
        }

        let ranked = session.ranked();
        let role_ranks = session.role_ranks();
        let ctx = RenderContext {
            schema: &self.config.schema,
            rank_config: &self.config.ranking,
            role_ranks: &role_ranks,
        };

        let registry = session.registry();
        let mut out = format!(
            "{}\n",
            format!(
                "🏀 {} ({} of {} prospects)",
                session.source().unwrap_or(NOT_AVAILABLE),
                ranked.len(),
                registry.len()
            )
            .bold()
        );
        if !registry.is_empty() {
            out.push_str(&format!(
                "{}\n",
                format!("Leagues: {}   Tiers: {}", registry.leagues().join(", "), registry.tiers().join(", ")).dimmed()
            ));
        }
        out.push_str(&format!("{}\n", "=".repeat(50)));

        match args.view.unwrap_or(self.config.view.default_view) {
            ViewMode::Cards => {
                let images = ImageResolver::new(
                    &self.config.data.asset_root,
                    &self.config.view.image_category,
                    &self.config.data.placeholder_image,
                );
                let mut cards = CardList::new(self.config.view.page_size);
                for _ in 1..args.pages.max(1) {
                    if !cards.load_more(ranked.len()) {
                        break;
                    }
                }
                out.push_str(&cards.render(&ranked, &ctx, &images));
            }
            ViewMode::Table => {
                let (table, _) = self.table_for(args.columns.clone())?;
                out.push_str(&table.render(&ranked, &ctx));
            }
        }

        Ok(out)
    }

    /// Build the consensus board, optionally writing it out as CSV
    pub async fn consensus_report(&self, sources: &[String], output: Option<&Path>, top: Option<usize>) -> Result<String> {
        let mut boards = Vec::with_capacity(sources.len());
        for source in sources {
            let board = self.loader.load(source).await;
            if board.is_empty() {
                warn!("Skipping empty board {}", source);
                continue;
            }
            boards.push(RankedBoard::from_records(source, &board.records, &self.config.schema));
        }

        let entries = ConsensusCalculator::build(&boards)?;
        if let Some(path) = output {
            write_consensus_csv(path, &entries)?;
            info!("Wrote consensus board ({} prospects) to {:?}", entries.len(), path);
        }

        let shown = top.unwrap_or(entries.len()).min(entries.len());
        let rows: Vec<RankedRecord> = entries[..shown]
            .iter()
            .map(|entry| RankedRecord { position: entry.consensus_rank, record: entry.to_record() })
            .collect();

        let role_ranks = HashMap::new();
        let ctx = RenderContext { schema: &self.config.schema, rank_config: &self.config.ranking, role_ranks: &role_ranks };
        let table = TableView::from_fields(&["Name", "Score", "Avg Rank", "Inclusion", "Boards"]);

        let mut out = format!("{}\n", format!("📊 Consensus of {} boards", boards.len()).bold());
        out.push_str(&format!("{}\n", "=".repeat(50)));
        out.push_str(&table.render(&rows, &ctx));
        Ok(out)
    }

    /// Grade each board by average opportunity cost at each cutoff
    pub async fn evaluate_report(
        &self,
        truth_source: &str,
        criterion: &str,
        cutoffs: &[usize],
        sources: &[String],
    ) -> Result<String> {
        let truth_board = self.loader.try_load(truth_source).await?;
        let truth = truth_from_records(&truth_board.records, criterion, &self.config.ranking, &self.config.schema);
        if truth.is_empty() {
            bail!("no {} values in {}", criterion, truth_source);
        }

        let mut columns = vec![ColumnSpec::new("Board")];
        columns.extend(cutoffs.iter().map(|c| ColumnSpec::new(format!("Top {}", c))));
        let table = TableView::new(columns);

        let mut rows = Vec::with_capacity(sources.len());
        for (index, source) in sources.iter().enumerate() {
            let board = self.loader.load(source).await;
            let names = RankedBoard::from_records(source, &board.records, &self.config.schema).names();
            let evaluation = evaluate_board(source, &names, criterion, &truth, cutoffs);

            let mut fields = vec![("Board".to_string(), board_label(&evaluation.board).to_string())];
            for cost in &evaluation.costs {
                fields.push((format!("Top {}", cost.cutoff), format_optional(cost.average_cost, 2)));
            }
            rows.push(RankedRecord { position: index + 1, record: ProspectRecord::new(fields) });
        }

        let role_ranks = HashMap::new();
        let ctx = RenderContext { schema: &self.config.schema, rank_config: &self.config.ranking, role_ranks: &role_ranks };

        let mut out = format!(
            "{}\n",
            format!("📉 Opportunity cost by {} ({} prospects with outcomes)", criterion, truth.len()).bold()
        );
        out.push_str(&format!("{}\n", "=".repeat(50)));
        out.push_str(&table.render(&rows, &ctx));
        Ok(out)
    }

    /// Side-by-side values and board percentiles for two prospects
    pub async fn compare_report(
        &self,
        args: &BoardArgs,
        left: &str,
        right: &str,
        columns: Option<Vec<String>>,
    ) -> Result<String> {
        let session = self.open_session(args).await?;
        let registry = session.registry();
        let left_record = registry.get_by_name(left)?;
        let right_record = registry.get_by_name(right)?;

        let columns = columns
            .unwrap_or_else(|| numeric_columns(session.headers(), registry.records(), &self.config.ranking));
        let comparison =
            compare_prospects(registry.records(), left_record, right_record, &columns, &self.config.ranking);

        let table = TableView::new(vec![
            ColumnSpec::new("Stat"),
            ColumnSpec::new("Left").with_label(left),
            ColumnSpec::new("Left Pct").with_label("Pct"),
            ColumnSpec::new("Right").with_label(right),
            ColumnSpec::new("Right Pct").with_label("Pct"),
        ]);
        let rows: Vec<RankedRecord> = comparison
            .iter()
            .enumerate()
            .map(|(index, row)| RankedRecord {
                position: index + 1,
                record: ProspectRecord::new(vec![
                    ("Stat".to_string(), row.column.clone()),
                    ("Left".to_string(), format_optional(row.left_value, 1)),
                    ("Left Pct".to_string(), format_optional(row.left_percentile, 0)),
                    ("Right".to_string(), format_optional(row.right_value, 1)),
                    ("Right Pct".to_string(), format_optional(row.right_percentile, 0)),
                ]),
            })
            .collect();

        let role_ranks = HashMap::new();
        let ctx = RenderContext { schema: &self.config.schema, rank_config: &self.config.ranking, role_ranks: &role_ranks };

        let mut out = format!("{}\n", format!("⚖️  {} vs {}", left, right).bold());
        out.push_str(&format!("{}\n", "=".repeat(50)));
        out.push_str(&table.render(&rows, &ctx));
        Ok(out)
    }

    /// Update and print stored column visibility
    pub fn columns_report(
        &self,
        columns: Option<Vec<String>>,
        hide: &[String],
        show: &[String],
        reset: bool,
    ) -> Result<String> {
        let (mut table, mut preferences) = self.table_for(columns)?;

        if reset {
            preferences.reset(table.columns());
            for column in table.columns_mut() {
                column.visible = true;
            }
        }
        for field in hide {
            if !table.set_visible(field, false) {
                warn!("Unknown column: {}", field);
            }
        }
        for field in show {
            if !table.set_visible(field, true) {
                warn!("Unknown column: {}", field);
            }
        }

        if reset || !hide.is_empty() || !show.is_empty() {
            preferences.remember(table.columns());
            preferences.save()?;
        }

        let mut out = format!("{}\n", "🧱 Table columns".bold());
        out.push_str(&format!("{}\n", "=".repeat(50)));
        for column in table.columns() {
            let state = if column.visible { "shown".green() } else { "hidden".red() };
            out.push_str(&format!("{:<20} {}\n", column.label, state));
        }
        Ok(out)
    }
}

/// Last path or URL segment, which is what tells boards apart in a table
fn board_label(source: &str) -> &str {
    source.trim_end_matches('/').rsplit(['/', '\\']).next().filter(|s| !s.is_empty()).unwrap_or(source)
}

fn format_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Write the consensus board in the same CSV shape boards are loaded from
pub fn write_consensus_csv(path: &Path, entries: &[ConsensusEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path).with_context(|| format!("failed to create {:?}", path))?;
    let records: Vec<ProspectRecord> = entries.iter().map(ConsensusEntry::to_record).collect();

    if let Some(first) = records.first() {
        writer.write_record(first.field_names())?;
    }
    for record in &records {
        writer.write_record(record.iter().map(|(_, value)| value))?;
    }
    writer.flush()?;
    Ok(())
}

