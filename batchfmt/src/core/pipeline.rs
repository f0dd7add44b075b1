// src/core/pipeline.rs
mod formatter;
mod writer;

pub use formatter::{Formatter, PassThrough};
pub use writer::{BackupPolicy, DEFAULT_BACKUP_SUFFIX, write_formatted};

use anyhow::{Context as _, Result};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::line_ending::{self, LineEndRequest};
use crate::models::{CandidateFile, FileReport, ProcessingOutcome, RunReport};

/// What a failed file does to the rest of the batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record the failure and keep going.
    #[default]
    Continue,
    /// Start no further files once one has failed.
    Abort,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Do everything except touch the file system.
    pub dry_run: bool,
    pub backup: BackupPolicy,
    pub line_end: LineEndRequest,
    /// Keep the source's modification time on rewritten files.
    pub preserve_date: bool,
    pub on_error: FailurePolicy,
    /// Worker threads; `None` uses one per CPU.
    pub jobs: Option<usize>,
}

/// Runs one file through read, format, line-end resolution and write.
///
/// Never fails: any error becomes a [`ProcessingOutcome::Failed`] in the
/// returned report.
pub fn process_file<F>(candidate: &CandidateFile, formatter: &F, options: &PipelineOptions) -> FileReport
where
    F: Formatter + ?Sized,
{
    let (outcome, line_ends_mixed) = match try_process(candidate, formatter, options) {
        Ok(result) => result,
        Err(err) => {
            let reason = format!("{err:#}");
            tracing::warn!(path = %candidate.path.display(), error = %reason, "file failed");
            (ProcessingOutcome::Failed(reason), false)
        }
    };
    FileReport {
        path: candidate.path.clone(),
        file_type: candidate.file_type,
        outcome,
        line_ends_mixed,
    }
}

fn try_process<F>(
    candidate: &CandidateFile,
    formatter: &F,
    options: &PipelineOptions,
) -> Result<(ProcessingOutcome, bool)>
where
    F: Formatter + ?Sized,
{
    let path = &candidate.path;
    let original = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let formatted = formatter
        .format(&original, candidate.file_type)
        .with_context(|| format!("Failed to format {}", path.display()))?;

    let (profile, converted) = line_ending::resolve(&formatted, options.line_end);
    let output = converted.unwrap_or(formatted);

    if output == original {
        tracing::debug!(path = %path.display(), "unchanged");
        return Ok((ProcessingOutcome::Unchanged, profile.mixed));
    }

    if options.dry_run {
        tracing::debug!(path = %path.display(), "would be formatted");
    } else {
        write_formatted(path, &original, &output, &options.backup, options.preserve_date)?;
        tracing::debug!(path = %path.display(), "formatted");
    }
    Ok((ProcessingOutcome::Formatted, profile.mixed))
}

/// Processes every candidate on a worker pool.
///
/// # Arguments
///
/// * `candidates` - Files to process, in report order
/// * `formatter` - Engine applied to each file
/// * `options` - Write, backup, line-end and failure settings
///
/// # Returns
///
/// * `Ok(RunReport)` - One report per processed file, in candidate order.
///   Under [`FailurePolicy::Abort`] files not yet started when a failure is
///   seen are left out and the report is marked aborted.
///
/// # Errors
///
/// Fails only if the worker pool cannot be created; per-file problems are
/// recorded in the report.
pub fn run_pipeline<F>(
    candidates: &[CandidateFile],
    formatter: &F,
    options: &PipelineOptions,
) -> Result<RunReport>
where
    F: Formatter + ?Sized,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs.unwrap_or(0))
        .build()
        .context("Failed to start worker pool")?;

    let stop = AtomicBool::new(false);
    let reports: Vec<Option<FileReport>> = pool.install(|| {
        candidates
            .par_iter()
            .map(|candidate| {
                if stop.load(Ordering::Relaxed) {
                    return None;
                }
                let report = process_file(candidate, formatter, options);
                if report.outcome.is_failed() && options.on_error == FailurePolicy::Abort {
                    stop.store(true, Ordering::Relaxed);
                }
                Some(report)
            })
            .collect()
    });

    let files: Vec<FileReport> = reports.into_iter().flatten().collect();
    let aborted = files.len() < candidates.len();
    if aborted {
        tracing::warn!(
            processed = files.len(),
            skipped = candidates.len().saturating_sub(files.len()),
            "batch stopped after a failure"
        );
    }

    let report = RunReport::from_files(files, aborted);
    tracing::info!(
        formatted = report.summary.formatted,
        unchanged = report.summary.unchanged,
        failed = report.summary.failed,
        dry_run = options.dry_run,
        "batch complete"
    );
    Ok(report)
}
