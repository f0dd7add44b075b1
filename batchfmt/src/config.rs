// src/config.rs
mod loader;

pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config_file};

use serde::Deserialize;

use crate::core::discovery::{DiscoveryOptions, ExcludeErrorPolicy};
use crate::core::exclude::ExcludeResolver;
use crate::core::line_ending::{LineEndRequest, LineEnding};
use crate::core::pipeline::{BackupPolicy, FailurePolicy, PipelineOptions};
use crate::core::wildcard::CaseSensitivity;

/// Everything one run needs, resolved from defaults, the config file and
/// the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub recursive: bool,
    pub dry_run: bool,
    pub backup: BackupPolicy,
    pub line_end: LineEndRequest,
    pub excludes: Vec<String>,
    pub exclude_errors: ExcludeErrorPolicy,
    pub case: CaseSensitivity,
    pub on_error: FailurePolicy,
    pub preserve_date: bool,
    pub jobs: Option<usize>,
}

/// Contents of a `batchfmt.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub recursive: Option<bool>,
    pub dry_run: Option<bool>,
    /// Backup suffix; `"none"` disables backups.
    pub suffix: Option<BackupPolicy>,
    pub lineend: Option<LineEnding>,
    pub exclude: Vec<String>,
    pub exclude_errors: Option<ExcludeErrorPolicy>,
    pub case: Option<CaseSensitivity>,
    pub on_error: Option<FailurePolicy>,
    pub preserve_date: Option<bool>,
    pub jobs: Option<usize>,
}

impl RunConfig {
    /// Overlays the keys set in a config file. Excludes accumulate.
    #[must_use]
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(recursive) = file.recursive {
            self.recursive = recursive;
        }
        if let Some(dry_run) = file.dry_run {
            self.dry_run = dry_run;
        }
        if let Some(backup) = file.suffix {
            self.backup = backup;
        }
        if let Some(ending) = file.lineend {
            self.line_end = LineEndRequest::Force(ending);
        }
        self.excludes.extend(file.exclude);
        if let Some(policy) = file.exclude_errors {
            self.exclude_errors = policy;
        }
        if let Some(case) = file.case {
            self.case = case;
        }
        if let Some(policy) = file.on_error {
            self.on_error = policy;
        }
        if let Some(preserve_date) = file.preserve_date {
            self.preserve_date = preserve_date;
        }
        if file.jobs.is_some() {
            self.jobs = file.jobs;
        }
        self
    }

    #[inline]
    #[must_use]
    pub const fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            recursive: self.recursive,
            case: self.case,
            exclude_errors: self.exclude_errors,
        }
    }

    #[must_use]
    pub fn exclude_resolver(&self) -> ExcludeResolver {
        ExcludeResolver::new(&self.excludes, self.case)
    }

    #[must_use]
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            dry_run: self.dry_run,
            backup: self.backup.clone(),
            line_end: self.line_end,
            preserve_date: self.preserve_date,
            on_error: self.on_error,
            jobs: self.jobs,
        }
    }
}
