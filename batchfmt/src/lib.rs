// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run, run_with};
pub use config::RunConfig;
pub use crate::core::pipeline::{Formatter, PassThrough};
pub use error::{Diagnostic, DiscoveryFailure};
pub use models::{CandidateFile, FileReport, ProcessingOutcome, RunReport, RunSummary};
