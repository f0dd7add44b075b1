// src/core/pipeline/writer.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_BACKUP_SUFFIX: &str = ".orig";

/// Whether a copy of the original is kept beside a rewritten file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BackupPolicy {
    Disabled,
    /// Backup written to `<path><suffix>`.
    Suffix(String),
}

impl BackupPolicy {
    /// Builds the policy from a user-supplied suffix; `none` or an empty
    /// suffix disables backups.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Self {
        if suffix.is_empty() || suffix.eq_ignore_ascii_case("none") {
            Self::Disabled
        } else {
            Self::Suffix(suffix.to_owned())
        }
    }

    /// Where the backup of `path` goes, if backups are enabled.
    #[must_use]
    pub fn backup_path(&self, path: &Path) -> Option<PathBuf> {
        match self {
            Self::Disabled => None,
            Self::Suffix(suffix) => {
                let mut name = path.as_os_str().to_owned();
                name.push(suffix);
                Some(PathBuf::from(name))
            }
        }
    }
}

impl Default for BackupPolicy {
    #[inline]
    fn default() -> Self {
        Self::Suffix(DEFAULT_BACKUP_SUFFIX.to_owned())
    }
}

impl From<String> for BackupPolicy {
    #[inline]
    fn from(suffix: String) -> Self {
        Self::from_suffix(&suffix)
    }
}

/// Replaces `path` with `output`, first saving `original` as a backup when
/// the policy asks for one.
///
/// Symbolic links are resolved first: the file they point to is rewritten
/// and the link itself is kept. The new contents are written to a temporary
/// file beside that target and renamed over it, so the target is either fully
/// old or fully new. The backup sits next to `path`. If the backup cannot be
/// written the source is left alone.
///
/// # Errors
///
/// This function may return an error if:
/// * `path` cannot be resolved to a real file
/// * The backup file cannot be written
/// * The temporary file cannot be created, written, or renamed over `path`
/// * `preserve_date` is set and the timestamps cannot be read or restored
pub fn write_formatted(
    path: &Path,
    original: &[u8],
    output: &[u8],
    backup: &BackupPolicy,
    preserve_date: bool,
) -> Result<()> {
    let target = fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let metadata = fs::metadata(&target)
        .with_context(|| format!("Failed to read metadata: {}", target.display()))?;

    if let Some(backup_path) = backup.backup_path(path) {
        fs::write(&backup_path, original)
            .with_context(|| format!("Failed to write backup: {}", backup_path.display()))?;
    }

    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    staged
        .write_all(output)
        .with_context(|| format!("Failed to write temporary file for {}", target.display()))?;
    staged
        .as_file()
        .set_permissions(metadata.permissions())
        .with_context(|| format!("Failed to copy permissions to {}", target.display()))?;
    let file = staged
        .persist(&target)
        .with_context(|| format!("Failed to replace {}", target.display()))?;

    if preserve_date {
        let modified = metadata
            .modified()
            .with_context(|| format!("Failed to read modification time: {}", target.display()))?;
        file.set_modified(modified)
            .with_context(|| format!("Failed to restore modification time: {}", target.display()))?;
    }

    Ok(())
}
