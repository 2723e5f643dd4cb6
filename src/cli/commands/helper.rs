use std::env;

use anyhow::{Context, Result};

use super::super::args::ConfigArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Load `.glot-migrate.json` from the current directory upwards and apply
/// command-line/environment overrides.
pub fn resolve_config(args: &ConfigArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if !loaded.from_file {
        tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
    }
    Ok(args.apply(loaded.config))
}
