use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".glot-migrate.json";

/// Text appended after `MIGRATED TO <path>` in a migrated source file.
pub const DEFAULT_WARNING_SUFFIX: &str = "\n\nThis file was migrated by glot-migrate. \
Its text now lives in the catalog above; restore the original from version control if you still need it.\n";

/// Migration settings.
///
/// Loaded from `.glot-migrate.json` and then overridden by CLI flags or
/// environment variables. Passed to `Migrator::new`; the extraction engine
/// itself takes no configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Overwrite the source file with a migration marker after a successful migration.
    #[serde(default = "default_replace_source")]
    pub replace_source: bool,
    /// Appended to the migration marker.
    #[serde(default = "default_warning_suffix")]
    pub warning_suffix: String,
}

fn default_replace_source() -> bool {
    true
}

fn default_warning_suffix() -> String {
    DEFAULT_WARNING_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replace_source: default_replace_source(),
            warning_suffix: default_warning_suffix(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
