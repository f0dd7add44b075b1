// src/core/classify.rs
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// The language family handed to the formatter, chosen from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    C,
    Java,
    Sharp,
}

impl FileType {
    /// Classifies a path by its extension. Anything that is not Java or C#
    /// is treated as C-family.
    #[inline]
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("java") => Self::Java,
            Some(ext) if ext.eq_ignore_ascii_case("cs") => Self::Sharp,
            _ => Self::C,
        }
    }
}

/// Determines if a directory entry should be skipped as hidden: a name that
/// starts with `.`, or on Windows an entry with the hidden or system attribute.
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    if entry.file_name().as_encoded_bytes().first() == Some(&b'.') {
        return true;
    }
    has_hidden_attribute(entry)
}

#[cfg(windows)]
fn has_hidden_attribute(entry: &walkdir::DirEntry) -> bool {
    use std::os::windows::fs::MetadataExt as _;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    const FILE_ATTRIBUTE_SYSTEM: u32 = 0x4;

    entry.metadata().is_ok_and(|meta| {
        meta.file_attributes() & (FILE_ATTRIBUTE_HIDDEN | FILE_ATTRIBUTE_SYSTEM) != 0
    })
}

#[cfg(not(windows))]
const fn has_hidden_attribute(_entry: &walkdir::DirEntry) -> bool {
    false
}

/// Lexically normalizes an absolute path: drops `.` components and folds
/// `..` into its parent. Symlinks are not resolved.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }
    normalized
}

/// Renders `path` relative to `root` with `/` separators, or `None` when
/// `path` is not under `root`.
#[must_use]
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
