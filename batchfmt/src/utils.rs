// src/utils.rs
use crate::error::Diagnostic;
use crate::models::{FileReport, ProcessingOutcome, RunSummary, RunReport};

/// How much of a run's report goes to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Every file and the summary.
    #[default]
    All,
    /// Formatted and failed files, then the summary.
    FormattedOnly,
    /// Failed files only.
    Quiet,
}

/// The report line for one file, or `None` when `mode` hides it.
#[must_use]
pub fn file_line(report: &FileReport, mode: ReportMode) -> Option<String> {
    let path = report.path.display();
    match (&report.outcome, mode) {
        (ProcessingOutcome::Failed(reason), _) => Some(format!("Error      {path}: {reason}")),
        (ProcessingOutcome::Formatted, ReportMode::All | ReportMode::FormattedOnly) => {
            Some(format!("Formatted  {path}"))
        }
        (ProcessingOutcome::Unchanged, ReportMode::All) => Some(format!("Unchanged  {path}")),
        _ => None,
    }
}

#[must_use]
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "{} formatted, {} unchanged, {} failed",
        summary.formatted, summary.unchanged, summary.failed
    )
}

pub fn print_report(report: &RunReport, mode: ReportMode) {
    for file in &report.files {
        if let Some(line) = file_line(file, mode) {
            println!("{line}");
        }
    }
    if mode != ReportMode::Quiet {
        println!("{}", summary_line(&report.summary));
    }
    if report.aborted {
        eprintln!("Stopped after the first failure");
    }
}

/// Lists excludes tolerated by the run despite never matching.
pub fn print_unmatched_excludes(excludes: &[String], mode: ReportMode) {
    if mode == ReportMode::Quiet {
        return;
    }
    for exclude in excludes {
        println!("{}", Diagnostic::UnmatchedExclude(exclude.clone()));
    }
}
