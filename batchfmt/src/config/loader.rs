// src/config/loader.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FileConfig;

pub const CONFIG_FILE_NAME: &str = "batchfmt.toml";

/// Looks for a `batchfmt.toml` in `dir` and then in each parent directory,
/// stopping at the first one found.
///
/// # Arguments
///
/// * `dir` - The directory to start the search from
///
/// # Returns
///
/// The path of the nearest config file, or `None` if there is none up to
/// the file system root
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut visited = HashSet::new();
    let mut current = Some(dir);

    while let Some(candidate_dir) = current {
        if !visited.insert(candidate_dir.to_path_buf()) {
            break;
        }
        let config_file = candidate_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return Some(config_file);
        }
        current = candidate_dir.parent();
    }
    None
}

/// Reads and parses a config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}
