//! Catalog (JSON message file) persistence.
//!
//! Reading is permissive: a missing, empty, unreadable or malformed catalog
//! is treated as empty so a migration can always proceed. Writing happens once,
//! after the merge, as pretty-printed JSON with 2-space indentation.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Why an existing catalog was discarded and replaced by an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRecovery {
    /// The file exists but could not be read.
    Unreadable(String),
    /// The file is not valid JSON.
    InvalidJson(String),
    /// The file is valid JSON but its root is not an object.
    NotAnObject,
}

impl fmt::Display for CatalogRecovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogRecovery::Unreadable(reason) => write!(f, "could not be read ({})", reason),
            CatalogRecovery::InvalidJson(reason) => write!(f, "is not valid JSON ({})", reason),
            CatalogRecovery::NotAnObject => write!(f, "is not a JSON object"),
        }
    }
}

#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub catalog: Map<String, Value>,
    /// Set when an existing file had to be ignored.
    pub recovery: Option<CatalogRecovery>,
}

impl CatalogLoad {
    fn recovered(path: &Path, recovery: CatalogRecovery) -> Self {
        tracing::warn!(
            path = %path.display(),
            "existing catalog {}; starting from an empty catalog",
            recovery
        );
        Self {
            catalog: Map::new(),
            recovery: Some(recovery),
        }
    }
}

/// Load a catalog, falling back to an empty one.
pub fn load_catalog(path: &Path) -> CatalogLoad {
    if !path.exists() {
        return CatalogLoad::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => return CatalogLoad::recovered(path, CatalogRecovery::Unreadable(err.to_string())),
    };

    if content.trim().is_empty() {
        return CatalogLoad::default();
    }

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(catalog)) => CatalogLoad {
            catalog,
            recovery: None,
        },
        Ok(_) => CatalogLoad::recovered(path, CatalogRecovery::NotAnObject),
        Err(err) => CatalogLoad::recovered(path, CatalogRecovery::InvalidJson(err.to_string())),
    }
}

/// Write a catalog as pretty-printed JSON, creating parent directories.
pub fn save_catalog(path: &Path, catalog: &Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = serde_json::to_string_pretty(catalog).context("Failed to serialize JSON")?;
    if !content.ends_with('\n') {
        content.push('\n');
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::info!(path = %path.display(), keys = catalog.len(), "catalog written");
    Ok(())
}
