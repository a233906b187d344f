//! Configuration management

use board_loader::BoardSchema;
use rank_engine::RankConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::views::ViewMode;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),

    #[error("Invalid undrafted threshold: {0}")]
    InvalidThreshold(String),
}

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Where boards and assets live
    pub data: DataConfig,

    /// CSV header names the engines look up
    pub schema: BoardSchema,

    /// Sorting and draft-pick rules
    pub ranking: RankConfig,

    /// View defaults
    pub view: ViewConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Data locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Board source (path or URL) per draft class, e.g. "2025" -> "data/2025.csv"
    pub boards: BTreeMap<String, String>,

    /// Root directory image paths resolve against
    pub asset_root: PathBuf,

    /// Image shown when a prospect has no picture
    pub placeholder_image: String,

    /// File holding column visibility preferences
    pub preferences_path: PathBuf,
}

/// View defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Cards shown per page
    pub page_size: usize,

    /// View used when none is requested
    pub default_view: ViewMode,

    /// Table columns, in display order
    pub columns: Vec<String>,

    /// Image directory under the asset root
    pub image_category: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            boards: BTreeMap::new(),
            asset_root: PathBuf::from("./public"),
            placeholder_image: "/placeholder.png".to_string(),
            preferences_path: PathBuf::from("./.bigboard/columns.json"),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            default_view: ViewMode::Cards,
            columns: ["Name", "Role", "Pre-Draft Team", "NBA Team", "Pick", "Height", "Weight", "Tier"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            image_category: "prospects".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl BoardConfig {
    /// Board source configured for a draft class
    pub fn board_for_class(&self, class: &str) -> Option<&str> {
        self.data.boards.get(class).map(String::as_str)
    }
}

/// Load configuration from an optional file and environment variables
pub fn load_config(path: Option<&Path>) -> Result<BoardConfig, ConfigError> {
    let mut config = match path {
        Some(path) if path.exists() => {
            tracing::debug!("Loading configuration from file: {:?}", path);
            load_from_file(path)?
        }
        _ => BoardConfig::default(),
    };

    // Override with environment variables
    load_from_env(&mut config)?;

    // Validate configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> Result<BoardConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io { path: path.display().to_string(), source: e })?;
    Ok(toml::from_str(&content)?)
}

/// Load configuration from environment variables
fn load_from_env(config: &mut BoardConfig) -> Result<(), ConfigError> {
    if let Ok(level) = std::env::var("BIGBOARD_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("BIGBOARD_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Ok(page_size) = std::env::var("BIGBOARD_PAGE_SIZE") {
        config.view.page_size =
            page_size.parse().map_err(|_| ConfigError::InvalidPageSize(page_size.clone()))?;
    }

    if let Ok(asset_root) = std::env::var("BIGBOARD_ASSET_ROOT") {
        config.data.asset_root = PathBuf::from(asset_root);
    }

    if let Ok(preferences) = std::env::var("BIGBOARD_PREFERENCES") {
        config.data.preferences_path = PathBuf::from(preferences);
    }

    if let Ok(threshold) = std::env::var("BIGBOARD_UNDRAFTED_THRESHOLD") {
        config.ranking.undrafted_threshold =
            threshold.parse().map_err(|_| ConfigError::InvalidThreshold(threshold.clone()))?;
    }

    if let Ok(label) = std::env::var("BIGBOARD_UNDRAFTED_LABEL") {
        config.ranking.undrafted_label = label;
    }

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &BoardConfig) -> Result<(), ConfigError> {
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(ConfigError::InvalidLogLevel(config.logging.level.clone())),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => return Err(ConfigError::InvalidLogFormat(config.logging.format.clone())),
    }

    if config.view.page_size == 0 {
        return Err(ConfigError::InvalidPageSize("0".to_string()));
    }

    Ok(())
}
