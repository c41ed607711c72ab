use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level mdsite.json schema. Every field has a default, so the file is
/// optional and may be partial.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Directory of markdown source documents.
    pub content_dir: String,

    /// Directory of files copied into the output verbatim.
    pub static_dir: String,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: String,

    /// Output directory. Owned by the generator and reset on every build.
    pub out_dir: String,

    /// Site title substituted instead of a page's extracted title when
    /// rendering a standalone page. Builds ignore it.
    pub title: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            template_path: "template.html".to_string(),
            out_dir: "public".to_string(),
            title: None,
        }
    }
}

/// Load mdsite.json from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<SiteConfig> {
    let path = root.join("mdsite.json");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
