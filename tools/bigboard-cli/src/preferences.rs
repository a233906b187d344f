//! Persisted column visibility
//!
//! Preferences are keyed by a hash of the column layout, so a board with a
//! different set of columns starts from its own defaults instead of picking
//! up hidden flags meant for another layout.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::views::ColumnSpec;

/// Stable key for a column layout
///
/// First 8 bytes of the SHA-256 of the `|`-joined field names, as hex.
pub fn layout_key(columns: &[ColumnSpec]) -> String {
    let composite_key = columns.iter().map(|c| c.field.as_str()).collect::<Vec<_>>().join("|");

    let mut hasher = Sha256::new();
    hasher.update(composite_key.as_bytes());
    hasher.finalize()[..8].iter().map(|b| format!("{b:02x}")).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct LayoutPreferences {
    hidden: Vec<String>,
}

/// Column visibility per layout, backed by a JSON file
#[derive(Debug, Clone)]
pub struct ColumnPreferences {
    path: PathBuf,
    layouts: BTreeMap<String, LayoutPreferences>,
}

impl ColumnPreferences {
    /// Read preferences from `path`; a missing file means no preferences yet
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let layouts = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read column preferences {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("invalid column preferences {:?}", path))?
        } else {
            debug!("No column preferences at {:?}", path);
            BTreeMap::new()
        };

        Ok(Self { path, layouts })
    }

    /// Write preferences back to their file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.layouts)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write column preferences {:?}", self.path))?;
        info!("Saved column preferences to {:?}", self.path);
        Ok(())
    }

    /// Hidden fields stored for this layout
    pub fn hidden(&self, columns: &[ColumnSpec]) -> Vec<String> {
        self.layouts.get(&layout_key(columns)).map(|l| l.hidden.clone()).unwrap_or_default()
    }

    /// Apply stored visibility to `columns`
    pub fn apply(&self, columns: &mut [ColumnSpec]) {
        let hidden = self.hidden(columns);
        for column in columns.iter_mut() {
            column.visible = !hidden.contains(&column.field);
        }
    }

    /// Remember the current visibility of `columns`
    pub fn remember(&mut self, columns: &[ColumnSpec]) {
        let hidden: Vec<String> = columns.iter().filter(|c| !c.visible).map(|c| c.field.clone()).collect();
        let key = layout_key(columns);
        if hidden.is_empty() {
            self.layouts.remove(&key);
        } else {
            self.layouts.insert(key, LayoutPreferences { hidden });
        }
    }

    /// Forget the stored visibility for this layout
    pub fn reset(&mut self, columns: &[ColumnSpec]) {
        self.layouts.remove(&layout_key(columns));
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
