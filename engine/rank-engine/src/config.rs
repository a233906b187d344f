use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RankError, Result};

/// How a raw display value is coerced to a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Plain number
    Number,
    /// Draft pick, may carry decorations like `#5` or `12 (via BOS)`
    Pick,
    /// Height as `6'8"`, `6-8` or inches
    Height,
    /// Weight, may carry a `lbs` suffix
    Weight,
}

/// A display column sorted through a pre-converted numeric companion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionColumn {
    /// Column shown to the user (e.g. "Height")
    pub column: String,

    /// Numeric column holding the converted value (e.g. "Height (in)")
    pub companion: String,

    /// Parser used on the display value when the companion is absent
    pub kind: ValueKind,
}

/// Configuration for ranking and sorting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Pick numbers at or above this denote an undrafted prospect
    pub undrafted_threshold: u32,

    /// Label displayed instead of an undrafted pick number
    pub undrafted_label: String,

    /// Cell values treated as missing (compared case-insensitively)
    pub missing_tokens: Vec<String>,

    /// Columns sorted by a companion numeric column
    pub companions: Vec<CompanionColumn>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            undrafted_threshold: 59,
            undrafted_label: "Undrafted".to_string(),
            missing_tokens: vec![String::new(), "N/A".to_string(), "NA".to_string()],
            companions: vec![
                CompanionColumn {
                    column: "Pick".to_string(),
                    companion: "Pick Number".to_string(),
                    kind: ValueKind::Pick,
                },
                CompanionColumn {
                    column: "Height".to_string(),
                    companion: "Height (in)".to_string(),
                    kind: ValueKind::Height,
                },
                CompanionColumn {
                    column: "Weight".to_string(),
                    companion: "Weight (lbs)".to_string(),
                    kind: ValueKind::Weight,
                },
            ],
        }
    }
}

impl RankConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RankError::Config(format!("failed to read {}: {e}", path.as_ref().display()))
        })?;
        toml::from_str(&content).map_err(|e| RankError::Config(e.to_string()))
    }

    /// Get the companion entry for a display column
    pub fn companion_for(&self, column: &str) -> Option<&CompanionColumn> {
        self.companions.iter().find(|c| c.column == column)
    }

    /// Whether a raw cell counts as missing
    pub fn is_missing(&self, raw: &str) -> bool {
        let value = raw.trim();
        self.missing_tokens.iter().any(|token| token.eq_ignore_ascii_case(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RankConfig::default();
        assert_eq!(config.undrafted_threshold, 59);
        assert_eq!(config.companion_for("Pick").unwrap().companion, "Pick Number");
        assert_eq!(config.companion_for("Height").unwrap().kind, ValueKind::Height);
        assert!(config.companion_for("Wingspan").is_none());
    }

    #[test]
    fn test_missing_tokens() {
        let config = RankConfig::default();
        assert!(config.is_missing(""));
        assert!(config.is_missing("  "));
        assert!(config.is_missing("N/A"));
        assert!(config.is_missing("na"));
        assert!(!config.is_missing("0"));
        assert!(!config.is_missing("Duke"));
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.toml");
        std::fs::write(
            &path,
            r#"
undrafted_threshold = 61
undrafted_label = "UDFA"

[[companions]]
column = "Wingspan"
companion = "Wingspan (in)"
kind = "height"
"#,
        )
        .unwrap();

        let config = RankConfig::load_from_file(&path).unwrap();
        assert_eq!(config.undrafted_threshold, 61);
        assert_eq!(config.undrafted_label, "UDFA");
        assert_eq!(config.companions.len(), 1);
        assert_eq!(config.companion_for("Wingspan").unwrap().kind, ValueKind::Height);
        assert!(config.is_missing("N/A"));
    }
}
