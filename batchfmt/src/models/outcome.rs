// src/models/outcome.rs
use std::path::PathBuf;

use crate::core::classify::FileType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Unchanged,
    Formatted,
    Failed(String),
}

impl ProcessingOutcome {
    #[inline]
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// What happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub file_type: FileType,
    pub outcome: ProcessingOutcome,
    /// Whether the formatted text carried more than one line-ending style
    /// before line endings were resolved.
    pub line_ends_mixed: bool,
}
