//! Prospect image paths

use std::path::PathBuf;
use tracing::debug;

/// Conventional image path for a prospect: `/<category>/<name>.png`
pub fn image_path(category: &str, name: &str) -> String {
    format!("/{}/{}.png", category, name)
}

/// Resolves image paths against an asset directory, falling back to a
/// placeholder when the file does not exist
#[derive(Debug, Clone)]
pub struct ImageResolver {
    asset_root: PathBuf,
    category: String,
    placeholder: String,
}

impl ImageResolver {
    pub fn new(asset_root: impl Into<PathBuf>, category: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self { asset_root: asset_root.into(), category: category.into(), placeholder: placeholder.into() }
    }

    pub fn resolve(&self, name: &str) -> String {
        let file = self.asset_root.join(&self.category).join(format!("{}.png", name));
        if file.is_file() {
            image_path(&self.category, name)
        } else {
            debug!("No image for {} at {:?}, using placeholder", name, file);
            self.placeholder.clone()
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
