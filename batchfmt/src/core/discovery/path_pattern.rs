// src/core/discovery/path_pattern.rs
use std::path::{Path, PathBuf};

use crate::core::classify::normalize_path;
use crate::core::wildcard::has_wildcard;
use crate::error::Diagnostic;

/// A directory to scan plus the file-name mask to select with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    /// The argument as the user typed it, used in diagnostics.
    pub raw: String,
    /// Absolute, lexically normalized scan root.
    pub root: PathBuf,
    /// Root as written (before resolution), used in diagnostics.
    pub root_display: PathBuf,
    pub mask: String,
    /// Forces recursion for this pattern even when the run is not recursive.
    pub recursive: bool,
}

const fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

impl PathPattern {
    /// Splits a path argument into its directory and mask, resolving a
    /// relative directory against `cwd`.
    ///
    /// # Errors
    ///
    /// Returns [`Diagnostic::MissingFilename`] when the argument ends with a
    /// separator, so there is no mask to match with.
    pub fn parse_in(raw: &str, cwd: &Path) -> Result<Self, Diagnostic> {
        let (dir, mask) = raw
            .rfind(is_separator)
            .map_or(("", raw), |at| {
                let (dir, rest) = raw.split_at(at);
                // keep the root separator for patterns like "/*.cpp"
                let dir = if dir.is_empty() { rest.get(..1).unwrap_or("") } else { dir };
                (dir, rest.get(1..).unwrap_or(""))
            });

        if mask.is_empty() {
            return Err(Diagnostic::MissingFilename(raw.to_owned()));
        }

        let root_display = PathBuf::from(dir);
        let root = if root_display.is_absolute() {
            normalize_path(&root_display)
        } else {
            normalize_path(&cwd.join(&root_display))
        };

        Ok(Self {
            raw: raw.to_owned(),
            root,
            root_display,
            mask: mask.to_owned(),
            recursive: false,
        })
    }

    #[inline]
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[inline]
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        has_wildcard(&self.mask)
    }

    /// The directory to name in "Cannot open directory": as written, or the
    /// working directory when the argument had none.
    #[must_use]
    pub fn directory_for_display(&self) -> &Path {
        if self.root_display.as_os_str().is_empty() {
            &self.root
        } else {
            &self.root_display
        }
    }
}
