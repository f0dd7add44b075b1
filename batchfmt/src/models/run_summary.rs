// src/models/run_summary.rs
use std::ops::Add;

use crate::models::{FileReport, ProcessingOutcome};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub formatted: u64,
    pub unchanged: u64,
    pub failed: u64,
}

impl RunSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            formatted: 0,
            unchanged: 0,
            failed: 0,
        }
    }

    /// A summary counting a single outcome.
    #[inline]
    #[must_use]
    pub const fn of(outcome: &ProcessingOutcome) -> Self {
        let mut summary = Self::new();
        match *outcome {
            ProcessingOutcome::Formatted => summary.formatted = 1,
            ProcessingOutcome::Unchanged => summary.unchanged = 1,
            ProcessingOutcome::Failed(_) => summary.failed = 1,
        }
        summary
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.formatted
            .saturating_add(self.unchanged)
            .saturating_add(self.failed)
    }
}

impl Add for RunSummary {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            formatted: self.formatted.saturating_add(rhs.formatted),
            unchanged: self.unchanged.saturating_add(rhs.unchanged),
            failed: self.failed.saturating_add(rhs.failed),
        }
    }
}

/// Outcome of a whole batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// One report per processed file, in candidate order.
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
    /// Set when a failure stopped the batch before every file was processed.
    pub aborted: bool,
}

impl RunReport {
    #[must_use]
    pub fn from_files(files: Vec<FileReport>, aborted: bool) -> Self {
        let summary = files
            .iter()
            .map(|report| RunSummary::of(&report.outcome))
            .fold(RunSummary::new(), Add::add);
        Self {
            files,
            summary,
            aborted,
        }
    }

    /// `true` when nothing failed and the batch ran to completion.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.summary.failed == 0 && !self.aborted
    }
}
