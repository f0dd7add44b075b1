// src/models.rs
mod candidate_file;
mod outcome;
mod run_summary;

pub use candidate_file::CandidateFile;
pub use outcome::{FileReport, ProcessingOutcome};
pub use run_summary::{RunReport, RunSummary};
