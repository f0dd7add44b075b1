use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SOURCE: &str = "\nvoid foo()\n{\nbar();\n}\n";

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// Four C++ files in a flat directory.
pub fn setup_flat_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    for i in 1..=4 {
        create_test_file(&dir, &format!("getFilePaths{i}.cpp"), SOURCE)?;
    }

    Ok(dir)
}

/// Ten C++ files spread over two top-level and two nested directories:
///
/// ```text
/// recursive1.cpp recursive2.cpp
/// subdir1/{recursive3,recursive4}.cpp
/// subdir1/subdir1a/{recursive5,recursive6}.cpp
/// subdir1/subdir1b/{recursive7,recursive8}.cpp
/// subdir2/{recursive9,recursive10}.cpp
/// ```
pub fn setup_recursive_tree() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "recursive1.cpp", SOURCE)?;
    create_test_file(&dir, "recursive2.cpp", SOURCE)?;
    create_test_file(&dir, "subdir1/recursive3.cpp", SOURCE)?;
    create_test_file(&dir, "subdir1/recursive4.cpp", SOURCE)?;
    create_test_file(&dir, "subdir1/subdir1a/recursive5.cpp", SOURCE)?;
    create_test_file(&dir, "subdir1/subdir1a/recursive6.cpp", SOURCE)?;
    create_test_file(&dir, "subdir1/subdir1b/recursive7.cpp", SOURCE)?;
    create_test_file(&dir, "subdir1/subdir1b/recursive8.cpp", SOURCE)?;
    create_test_file(&dir, "subdir2/recursive9.cpp", SOURCE)?;
    create_test_file(&dir, "subdir2/recursive10.cpp", SOURCE)?;

    Ok(dir)
}
