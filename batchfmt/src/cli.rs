// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{RunConfig, find_config_file, load_config_file};
use crate::core::discovery::{ExcludeErrorPolicy, discover_paths};
use crate::core::line_ending::{LineEndRequest, LineEnding};
use crate::core::pipeline::{BackupPolicy, FailurePolicy, Formatter, PassThrough, run_pipeline};
use crate::models::RunReport;
use crate::utils::{ReportMode, print_report, print_unmatched_excludes};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files to process; the file name part may contain `*` and `?`
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Descend into subdirectories of each pattern's directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip a file or directory by name or by path relative to the pattern's directory
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Report excludes that matched nothing, but keep going
    #[arg(long, conflicts_with = "ignore_exclude_errors_x")]
    pub ignore_exclude_errors: bool,

    /// Silently ignore excludes that matched nothing
    #[arg(long)]
    pub ignore_exclude_errors_x: bool,

    /// Backup suffix for rewritten files (`none` disables backups)
    #[arg(long, value_name = "SUFFIX", conflicts_with = "no_backup")]
    pub suffix: Option<String>,

    /// Do not keep a backup of rewritten files
    #[arg(short = 'n')]
    pub no_backup: bool,

    /// Force line endings: lf, crlf, cr (or linux, windows, macold)
    #[arg(long, value_name = "STYLE")]
    pub lineend: Option<LineEnding>,

    /// Keep the original modification time of rewritten files
    #[arg(short = 'Z', long)]
    pub preserve_date: bool,

    /// Stop starting new files after the first failure
    #[arg(long)]
    pub stop_on_error: bool,

    /// Number of worker threads (defaults to one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Config file to use instead of searching for batchfmt.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print only errors
    #[arg(short, long, conflicts_with = "formatted")]
    pub quiet: bool,

    /// Print only files that were formatted
    #[arg(short = 'Q', long)]
    pub formatted: bool,

    /// Log traversal and per-file decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overlays the command-line flags on `base`. Flags that were not given
    /// leave `base` untouched; excludes accumulate.
    #[must_use]
    pub fn apply(&self, mut base: RunConfig) -> RunConfig {
        base.recursive |= self.recursive;
        base.dry_run |= self.dry_run;
        base.excludes.extend(self.exclude.iter().cloned());
        if self.ignore_exclude_errors_x {
            base.exclude_errors = ExcludeErrorPolicy::Silent;
        } else if self.ignore_exclude_errors {
            base.exclude_errors = ExcludeErrorPolicy::Warn;
        }
        if self.no_backup {
            base.backup = BackupPolicy::Disabled;
        } else if let Some(suffix) = &self.suffix {
            base.backup = BackupPolicy::from_suffix(suffix);
        }
        if let Some(ending) = self.lineend {
            base.line_end = LineEndRequest::Force(ending);
        }
        base.preserve_date |= self.preserve_date;
        if self.stop_on_error {
            base.on_error = FailurePolicy::Abort;
        }
        if self.jobs.is_some() {
            base.jobs = self.jobs;
        }
        base
    }

    #[inline]
    #[must_use]
    pub const fn report_mode(&self) -> ReportMode {
        if self.quiet {
            ReportMode::Quiet
        } else if self.formatted {
            ReportMode::FormattedOnly
        } else {
            ReportMode::All
        }
    }

    /// Builds the run configuration: defaults, then the config file (the
    /// one given with `--config`, else the nearest `batchfmt.toml` above
    /// `cwd`), then the flags.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn resolve_config(&self, cwd: &Path) -> Result<RunConfig> {
        let config_path = self.config.clone().or_else(|| find_config_file(cwd));
        let base = match config_path {
            Some(path) => RunConfig::default().with_file(load_config_file(&path)?),
            None => RunConfig::default(),
        };
        Ok(self.apply(base))
    }
}

/// Runs the command with the built-in pass-through formatter.
///
/// # Errors
///
/// See [`run_with`].
#[inline]
pub fn run(args: Args) -> Result<RunReport> {
    run_with(&args, &PassThrough)
}

/// Resolves configuration, selects the files, processes them with
/// `formatter` and prints the report.
///
/// # Arguments
///
/// * `args` - Parsed command line
/// * `formatter` - Engine applied to each selected file
///
/// # Returns
///
/// * `Ok(RunReport)` - The batch ran; inspect [`RunReport::is_success`]
///   for per-file failures
///
/// # Errors
///
/// This function may return an error if:
/// * The working directory or a config file cannot be read
/// * File selection fails; the error is a [`crate::DiscoveryFailure`]
///   listing every problem, and no file has been touched
/// * The worker pool cannot be started
pub fn run_with<F>(args: &Args, formatter: &F) -> Result<RunReport>
where
    F: Formatter + ?Sized,
{
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let config = args.resolve_config(&cwd)?;
    tracing::debug!(?config, "resolved configuration");

    let excludes = config.exclude_resolver();
    let discovery = discover_paths(&args.patterns, &cwd, &config.discovery_options(), &excludes)?;

    let mode = args.report_mode();
    print_unmatched_excludes(&discovery.unmatched_excludes, mode);

    let report = run_pipeline(&discovery.files, formatter, &config.pipeline_options())?;
    print_report(&report, mode);
    Ok(report)
}
