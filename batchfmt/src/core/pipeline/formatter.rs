// src/core/pipeline/formatter.rs
use anyhow::Result;

use crate::core::classify::FileType;

/// The reformatting engine the pipeline drives, one call per file.
///
/// Implementations are shared by reference across worker threads, so any
/// per-file state (the active language, style options) must live in the
/// call, not in `self`.
pub trait Formatter: Send + Sync {
    /// Reformats one file's contents.
    ///
    /// # Errors
    ///
    /// An error marks the file as failed; the rest of the batch continues
    /// unless the run is configured to stop on the first failure.
    fn format(&self, source: &[u8], file_type: FileType) -> Result<Vec<u8>>;
}

impl<F> Formatter for F
where
    F: Fn(&[u8], FileType) -> Result<Vec<u8>> + Send + Sync,
{
    #[inline]
    fn format(&self, source: &[u8], file_type: FileType) -> Result<Vec<u8>> {
        self(source, file_type)
    }
}

/// Returns its input unchanged, leaving only line-ending resolution to do
/// any work.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl Formatter for PassThrough {
    #[inline]
    fn format(&self, source: &[u8], _file_type: FileType) -> Result<Vec<u8>> {
        Ok(source.to_vec())
    }
}
