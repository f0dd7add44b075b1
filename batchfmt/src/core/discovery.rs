// src/core/discovery.rs
mod path_pattern;
#[cfg(test)]
pub mod test_utils;
mod walker;

pub use path_pattern::PathPattern;
pub use walker::walk_pattern;

use rayon::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::core::exclude::ExcludeResolver;
use crate::core::wildcard::CaseSensitivity;
use crate::error::{Diagnostic, DiscoveryFailure};
use crate::models::CandidateFile;

/// What to do about exclude patterns that never matched anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcludeErrorPolicy {
    /// Abort the run with one diagnostic per unmatched exclude.
    #[default]
    Fatal,
    /// Report them and carry on.
    Warn,
    /// Ignore them.
    Silent,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub recursive: bool,
    pub case: CaseSensitivity,
    pub exclude_errors: ExcludeErrorPolicy,
}

/// Files selected by a successful discovery.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Sorted by path, without duplicates.
    pub files: Vec<CandidateFile>,
    /// Unmatched excludes tolerated under [`ExcludeErrorPolicy::Warn`].
    pub unmatched_excludes: Vec<String>,
}

fn expand(
    pattern: &PathPattern,
    options: &DiscoveryOptions,
    excludes: &ExcludeResolver,
) -> Result<Vec<CandidateFile>, Diagnostic> {
    let recursive = options.recursive || pattern.recursive;
    if recursive && !pattern.has_wildcard() {
        return Err(Diagnostic::RecursiveWithoutWildcard {
            pattern: pattern.raw.clone(),
            quoting_hint: !cfg!(windows),
        });
    }
    walk_pattern(pattern, recursive, options.case, excludes)
}

/// Expands path patterns into the sorted, de-duplicated list of files to
/// process.
///
/// Patterns are expanded in parallel. Every problem is collected before
/// failing, so one report lists all of them.
///
/// # Arguments
///
/// * `patterns` - Parsed path patterns
/// * `options` - Recursion, case and unmatched-exclude policy
/// * `excludes` - Exclude patterns; their hit counts are updated
///
/// # Returns
///
/// * `Ok(Discovery)` - The selected files
///
/// # Errors
///
/// Returns a [`DiscoveryFailure`] if a directory cannot be opened, a
/// non-wildcard pattern is used recursively, nothing was selected at all, or
/// (under [`ExcludeErrorPolicy::Fatal`]) an exclude never matched.
pub fn discover(
    patterns: &[PathPattern],
    options: &DiscoveryOptions,
    excludes: &ExcludeResolver,
) -> Result<Discovery, DiscoveryFailure> {
    discover_with(Vec::new(), patterns, options, excludes)
}

/// Parses raw path arguments relative to `cwd`, then discovers as
/// [`discover`] does. Arguments with no file name are reported alongside
/// any other diagnostics.
///
/// # Errors
///
/// See [`discover`]; also fails with [`Diagnostic::MissingFilename`].
pub fn discover_paths<S: AsRef<str>>(
    raw_patterns: &[S],
    cwd: &Path,
    options: &DiscoveryOptions,
    excludes: &ExcludeResolver,
) -> Result<Discovery, DiscoveryFailure> {
    let mut diagnostics = Vec::new();
    let mut patterns = Vec::with_capacity(raw_patterns.len());
    for raw in raw_patterns {
        match PathPattern::parse_in(raw.as_ref(), cwd) {
            Ok(pattern) => patterns.push(pattern),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }
    discover_with(diagnostics, &patterns, options, excludes)
}

fn discover_with(
    mut diagnostics: Vec<Diagnostic>,
    patterns: &[PathPattern],
    options: &DiscoveryOptions,
    excludes: &ExcludeResolver,
) -> Result<Discovery, DiscoveryFailure> {
    let expanded: Vec<Result<Vec<CandidateFile>, Diagnostic>> = patterns
        .par_iter()
        .map(|pattern| expand(pattern, options, excludes))
        .collect();

    let mut files = Vec::new();
    let mut empty_patterns = Vec::new();
    for (pattern, result) in patterns.iter().zip(expanded) {
        match result {
            Ok(found) if found.is_empty() => empty_patterns.push(pattern.raw.clone()),
            Ok(found) => files.extend(found),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    if files.is_empty() {
        diagnostics.extend(empty_patterns.into_iter().map(Diagnostic::NoFileToProcess));
    }

    let unmatched: Vec<String> = excludes
        .unmatched_patterns()
        .into_iter()
        .map(|p| p.as_str().to_owned())
        .collect();
    let mut unmatched_excludes = Vec::new();
    match options.exclude_errors {
        ExcludeErrorPolicy::Fatal => {
            diagnostics.extend(unmatched.into_iter().map(Diagnostic::UnmatchedExclude));
        }
        ExcludeErrorPolicy::Warn => {
            for exclude in &unmatched {
                tracing::warn!(exclude = exclude.as_str(), "exclude matched nothing");
            }
            unmatched_excludes = unmatched;
        }
        ExcludeErrorPolicy::Silent => {}
    }

    if !diagnostics.is_empty() {
        return Err(DiscoveryFailure::new(diagnostics, options.recursive));
    }

    files.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    files.dedup_by(|a, b| a.path == b.path);
    tracing::info!(files = files.len(), patterns = patterns.len(), "discovery complete");

    Ok(Discovery {
        files,
        unmatched_excludes,
    })
}
