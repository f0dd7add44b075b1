// src/core/exclude.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::wildcard::CaseSensitivity;

/// A user-supplied exclude, kept alongside a count of the candidates it removed.
#[derive(Debug)]
pub struct ExcludePattern {
    /// The pattern as the user wrote it, used in diagnostics.
    original: String,
    /// Separator-normalized form with leading and trailing separators removed.
    normalized: String,
    hits: AtomicUsize,
}

impl ExcludePattern {
    #[inline]
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let normalized = pattern.replace('\\', "/").trim_matches('/').to_owned();
        Self {
            original: pattern.to_owned(),
            normalized,
            hits: AtomicUsize::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// A pattern matches when it equals the whole relative path or a trailing
    /// run of whole path segments. `ubdir1a` never matches `subdir1a`.
    fn matches(&self, relative: &str, case: CaseSensitivity) -> bool {
        if self.normalized.is_empty() || relative.len() < self.normalized.len() {
            return false;
        }
        let start = relative.len().saturating_sub(self.normalized.len());
        let Some(tail) = relative.get(start..) else {
            return false;
        };
        if start > 0 && !relative.get(..start).is_some_and(|head| head.ends_with('/')) {
            return false;
        }
        case.str_eq(tail, &self.normalized)
    }
}

/// Holds the run's exclude patterns and records which of them were used.
///
/// Hit counts are atomic so one resolver can be shared by several
/// concurrent walkers; they never influence the outcome of later checks.
#[derive(Debug, Default)]
pub struct ExcludeResolver {
    patterns: Vec<ExcludePattern>,
    case: CaseSensitivity,
}

impl ExcludeResolver {
    #[inline]
    #[must_use]
    pub fn new<I, S>(patterns: I, case: CaseSensitivity) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| ExcludePattern::new(p.as_ref()))
                .collect(),
            case,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Checks a path, given relative to the scan root with `/` separators,
    /// against every pattern. The first pattern that matches is credited
    /// with the hit.
    ///
    /// # Arguments
    ///
    /// * `relative` - The candidate's path relative to the scan root
    /// * `is_dir` - Whether the candidate is a directory (for logging only)
    ///
    /// # Returns
    ///
    /// `true` if the candidate, or the subtree it roots, must be skipped
    pub fn is_excluded(&self, relative: &str, is_dir: bool) -> bool {
        let Some(pattern) = self
            .patterns
            .iter()
            .find(|p| p.matches(relative, self.case))
        else {
            return false;
        };
        pattern.hits.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            path = relative,
            exclude = pattern.as_str(),
            kind = if is_dir { "directory" } else { "file" },
            "excluded"
        );
        true
    }

    /// Patterns that have not excluded anything so far.
    #[must_use]
    pub fn unmatched_patterns(&self) -> Vec<&ExcludePattern> {
        self.patterns.iter().filter(|p| p.hits() == 0).collect()
    }
}
