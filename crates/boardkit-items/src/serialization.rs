//! Design file save/load.
//!
//! Designs persist as JSON with a version tag, metadata, and one
//! [`Document`] per sheet. Loading validates the version and fails with
//! context rather than guessing at migrations.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::document::Document;

/// Design file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete on-disk design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub sheets: Vec<Document>,
}

/// Design metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl DesignFile {
    pub fn new(name: impl Into<String>, sheets: Vec<Document>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            sheets,
        }
    }
}

/// Save a design to `path` as pretty-printed JSON.
pub fn save_design(design: &DesignFile, path: &Path) -> Result<()> {
    let mut design = design.clone();
    design.metadata.modified = Utc::now();
    let json = serde_json::to_string_pretty(&design).context("Failed to serialize design")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write design file {}", path.display()))?;
    Ok(())
}

/// Load a design from `path`.
pub fn load_design(path: &Path) -> Result<DesignFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file {}", path.display()))?;
    let design: DesignFile =
        serde_json::from_str(&content).context("Failed to parse design file")?;
    if design.version != FILE_FORMAT_VERSION {
        anyhow::bail!(
            "Unsupported design file version {} (expected {})",
            design.version,
            FILE_FORMAT_VERSION
        );
    }
    Ok(design)
}
