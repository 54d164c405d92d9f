//! Configuration loading and merging logic.
//!
//! Each config file is read as a raw TOML table. Tables are merged key by key
//! (later files win, nested tables merge recursively) and the merged table is
//! deserialized once, so a project config that only sets `probe.min_width`
//! keeps the user's `probe.min_height`.

use crate::config::types::CamnodeConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use toml::Table;
use tracing::debug;

const CONFIG_DIR: &str = ".camnode";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.camnode/config.toml`)
/// 3. Project config (`./.camnode/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<CamnodeConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));
    }

    load_from_paths(&paths)
}

/// Load and merge the given config files in order, skipping missing ones.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<CamnodeConfig, ConfigError> {
    let mut merged = Table::new();

    for path in paths {
        match load_config_table(path) {
            Ok(table) => {
                debug!(event = "core.config.file_loaded", path = %path.display());
                merge_tables(&mut merged, table);
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
    }

    let config: CamnodeConfig =
        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ConfigParseError {
                path: paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                message: e.to_string(),
            })?;

    validate_config(&config)?;

    Ok(config)
}

/// Read a single config file as a raw TOML table.
fn load_config_table(path: &Path) -> Result<Table, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    content
        .parse::<Table>()
        .map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Merge `overlay` into `base`, with `overlay` taking precedence.
///
/// Nested tables are merged recursively; any other value (including arrays)
/// replaces the base value wholesale.
pub fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                merge_tables(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
