// src/models/candidate_file.rs
use std::path::PathBuf;

use crate::core::classify::FileType;

/// A file selected by discovery, pending processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Absolute, lexically normalized path.
    pub path: PathBuf,
    pub file_type: FileType,
}

impl CandidateFile {
    #[inline]
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let file_type = FileType::from_path(&path);
        Self { path, file_type }
    }
}
