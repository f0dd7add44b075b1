// tests/integration_tests/discovery_test.rs
use crate::common::{
    RECURSIVE_TREE, UNFORMATTED, create_test_file, discover, discovered_paths, pattern,
    setup_recursive_tree,
};
use anyhow::{Result, bail};
use batchfmt::core::classify::FileType;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_recursive_discovery_finds_whole_tree() -> Result<()> {
    let dir = setup_recursive_tree()?;

    let discovery = discover(dir.path(), &[pattern(dir.path(), "*.cpp")], true, &[])?;

    let mut expected: Vec<PathBuf> = RECURSIVE_TREE.iter().map(|n| dir.path().join(n)).collect();
    expected.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    assert_eq!(discovered_paths(&discovery), expected);
    Ok(())
}

#[test]
fn test_non_recursive_stays_in_top_directory() -> Result<()> {
    let dir = setup_recursive_tree()?;

    let discovery = discover(dir.path(), &[pattern(dir.path(), "*.cpp")], false, &[])?;

    assert_eq!(
        discovered_paths(&discovery),
        vec![dir.path().join("recursive1.cpp"), dir.path().join("recursive2.cpp")]
    );
    Ok(())
}

#[test]
fn test_hidden_entries_are_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "visible.cpp", UNFORMATTED)?;
    create_test_file(dir.path(), ".hidden.cpp", UNFORMATTED)?;
    create_test_file(dir.path(), ".git/objects.cpp", UNFORMATTED)?;
    create_test_file(dir.path(), "src/.cache/cached.cpp", UNFORMATTED)?;
    create_test_file(dir.path(), "src/real.cpp", UNFORMATTED)?;

    let discovery = discover(dir.path(), &[pattern(dir.path(), "*.cpp")], true, &[])?;

    assert_eq!(
        discovered_paths(&discovery),
        vec![dir.path().join("src/real.cpp"), dir.path().join("visible.cpp")]
    );
    Ok(())
}

#[test]
fn test_relative_pattern_uses_working_directory() -> Result<()> {
    let dir = setup_recursive_tree()?;

    let discovery = discover(dir.path(), &[String::from("subdir2/*.cpp")], false, &[])?;

    assert_eq!(
        discovered_paths(&discovery),
        vec![
            dir.path().join("subdir2/recursive10.cpp"),
            dir.path().join("subdir2/recursive9.cpp"),
        ]
    );
    Ok(())
}

#[test]
fn test_question_mark_mask() -> Result<()> {
    let dir = setup_recursive_tree()?;

    let discovery = discover(dir.path(), &[pattern(dir.path(), "recursive?.cpp")], true, &[])?;

    assert_eq!(discovery.files.len(), 9, "recursive10.cpp has one character too many");
    Ok(())
}

#[test]
fn test_single_file_without_wildcard() -> Result<()> {
    let dir = setup_recursive_tree()?;

    let discovery = discover(dir.path(), &[pattern(dir.path(), "recursive2.cpp")], false, &[])?;

    assert_eq!(discovered_paths(&discovery), vec![dir.path().join("recursive2.cpp")]);
    Ok(())
}

#[test]
fn test_file_types_follow_extension() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "a.cpp", UNFORMATTED)?;
    create_test_file(dir.path(), "b.java", UNFORMATTED)?;
    create_test_file(dir.path(), "c.cs", UNFORMATTED)?;
    create_test_file(dir.path(), "d.error", UNFORMATTED)?;

    let discovery = discover(dir.path(), &[pattern(dir.path(), "*")], false, &[])?;

    let types: Vec<FileType> = discovery.files.iter().map(|f| f.file_type).collect();
    assert_eq!(types, vec![FileType::C, FileType::Java, FileType::Sharp, FileType::C]);
    Ok(())
}

#[test]
fn test_missing_directory_is_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("errorInDirectoryName");

    let Err(failure) = discover(dir.path(), &[pattern(&missing, "*.cpp")], false, &[]) else {
        bail!("Expected discovery to fail");
    };

    assert_eq!(
        failure.to_string(),
        format!("Cannot open directory {}", missing.display())
    );
    Ok(())
}

#[test]
fn test_no_files_suggests_recursive() -> Result<()> {
    let dir = TempDir::new()?;
    let raw = pattern(dir.path(), "AStyleError*");

    let Err(failure) = discover(dir.path(), &[raw.clone()], false, &[]) else {
        bail!("Expected discovery to fail");
    };
    assert_eq!(
        failure.to_string(),
        format!("No file to process {raw}\nDid you intend to use --recursive?")
    );

    let Err(failure) = discover(dir.path(), &[raw.clone()], true, &[]) else {
        bail!("Expected discovery to fail");
    };
    assert_eq!(failure.to_string(), format!("No file to process {raw}"));
    Ok(())
}

#[test]
fn test_trailing_separator_is_missing_filename() -> Result<()> {
    let dir = TempDir::new()?;
    let raw = format!("{}/", dir.path().display());

    let Err(failure) = discover(dir.path(), &[raw.clone()], false, &[]) else {
        bail!("Expected discovery to fail");
    };

    assert_eq!(failure.to_string(), format!("Missing filename in {raw}"));
    Ok(())
}

#[test]
fn test_recursive_without_wildcard() -> Result<()> {
    let dir = setup_recursive_tree()?;

    let Err(failure) = discover(dir.path(), &[pattern(dir.path(), "recursive1.cpp")], true, &[])
    else {
        bail!("Expected discovery to fail");
    };

    assert!(
        failure.to_string().starts_with("Recursive option with no wildcard"),
        "Unexpected message: {failure}"
    );
    Ok(())
}
