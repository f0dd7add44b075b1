// src/core/discovery/walker.rs
use std::path::Path;
use walkdir::WalkDir;

use crate::core::classify::{is_hidden, normalize_path, relative_slash_path};
use crate::core::discovery::PathPattern;
use crate::core::exclude::ExcludeResolver;
use crate::core::wildcard::{self, CaseSensitivity};
use crate::error::Diagnostic;
use crate::models::CandidateFile;

/// Decides whether the walker yields (and for directories, descends into)
/// an entry: hidden entries are always dropped, and when recursing an
/// excluded directory prunes its whole subtree.
fn keep_entry(
    entry: &walkdir::DirEntry,
    root: &Path,
    recursive: bool,
    excludes: &ExcludeResolver,
) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if is_hidden(entry) {
        tracing::debug!(path = %entry.path().display(), "skipping hidden entry");
        return false;
    }
    if recursive && entry.file_type().is_dir() {
        return relative_slash_path(root, entry.path())
            .is_none_or(|relative| !excludes.is_excluded(&relative, true));
    }
    true
}

/// Expands one path pattern into the files it selects, in walk order.
///
/// # Arguments
///
/// * `pattern` - The directory and mask to expand
/// * `recursive` - Whether to descend into subdirectories
/// * `case` - Case policy for the mask
/// * `excludes` - Excludes to apply (hits are recorded on it)
///
/// # Returns
///
/// * `Ok(Vec<CandidateFile>)` - Matching files, possibly none
///
/// # Errors
///
/// Returns [`Diagnostic::CannotOpenDirectory`] if the root, or a directory
/// below it, cannot be read.
pub fn walk_pattern(
    pattern: &PathPattern,
    recursive: bool,
    case: CaseSensitivity,
    excludes: &ExcludeResolver,
) -> Result<Vec<CandidateFile>, Diagnostic> {
    let root = pattern.root.as_path();
    if !root.is_dir() {
        return Err(Diagnostic::CannotOpenDirectory(
            pattern.directory_for_display().to_path_buf(),
        ));
    }

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut found = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| keep_entry(e, root, recursive, excludes))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                tracing::warn!(error = %err, "skipping symlink loop");
                continue;
            }
            // dangling links and vanished files are not directories we failed to open
            Err(err) if err.path().is_some_and(|path| !path.is_dir()) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
            Err(err) => {
                let path = err.path().unwrap_or(root);
                return Err(Diagnostic::CannotOpenDirectory(path.to_path_buf()));
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !wildcard::matches(&name, &pattern.mask, case) {
            continue;
        }
        let Some(relative) = relative_slash_path(root, entry.path()) else {
            continue;
        };
        if excludes.is_excluded(&relative, false) {
            continue;
        }

        tracing::debug!(path = %entry.path().display(), "selected");
        found.push(CandidateFile::new(normalize_path(entry.path())));
    }

    Ok(found)
}
