// src/error.rs
use std::fmt;
use std::path::PathBuf;

/// A condition that makes the requested file selection unsatisfiable.
///
/// Each variant renders as the exact line printed for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("Cannot open directory {}", .0.display())]
    CannotOpenDirectory(PathBuf),

    #[error("Missing filename in {0}")]
    MissingFilename(String),

    #[error("Recursive option with no wildcard{}", quoting_hint_suffix(.quoting_hint))]
    RecursiveWithoutWildcard { pattern: String, quoting_hint: bool },

    #[error("No file to process {0}")]
    NoFileToProcess(String),

    #[error("Exclude 'unmatched' {0}")]
    UnmatchedExclude(String),
}

const fn quoting_hint_suffix(show: &bool) -> &'static str {
    if *show {
        "\nDid you intend quote the filename?"
    } else {
        ""
    }
}

impl Diagnostic {
    /// Whether a forgotten `--recursive` is a plausible cause.
    const fn hints_recursive(&self) -> bool {
        matches!(self, Self::NoFileToProcess(_) | Self::UnmatchedExclude(_))
    }
}

/// Every fatal diagnostic collected while expanding the path patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryFailure {
    pub diagnostics: Vec<Diagnostic>,
    /// Set when the run was not recursive.
    pub suggest_recursive: bool,
}

impl DiscoveryFailure {
    #[inline]
    #[must_use]
    pub const fn new(diagnostics: Vec<Diagnostic>, recursive: bool) -> Self {
        Self {
            diagnostics,
            suggest_recursive: !recursive,
        }
    }
}

impl fmt::Display for DiscoveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.diagnostics.iter().peekable();
        while let Some(diagnostic) = lines.next() {
            write!(f, "{diagnostic}")?;
            if lines.peek().is_some() {
                writeln!(f)?;
            }
        }
        if self.suggest_recursive && self.diagnostics.iter().any(Diagnostic::hints_recursive) {
            write!(f, "\nDid you intend to use --recursive?")?;
        }
        Ok(())
    }
}

impl std::error::Error for DiscoveryFailure {}
