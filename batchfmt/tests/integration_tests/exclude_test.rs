// tests/integration_tests/exclude_test.rs
use crate::common::{RECURSIVE_TREE, discover, discovered_paths, pattern, setup_recursive_tree};
use anyhow::{Result, bail};
use batchfmt::core::discovery::{DiscoveryOptions, ExcludeErrorPolicy, discover_paths};
use batchfmt::core::exclude::ExcludeResolver;
use batchfmt::core::wildcard::CaseSensitivity;

#[test]
fn test_each_exclude_form_removes_expected_files() -> Result<()> {
    let dir = setup_recursive_tree()?;
    let raw = [pattern(dir.path(), "*.cpp")];

    // bare file name, bare directory name, relative file path, relative directory path
    let excludes = [
        "recursive1.cpp",
        "subdir1a",
        "/subdir2/recursive9.cpp",
        "/subdir1/subdir1b",
    ];
    let discovery = discover(dir.path(), &raw, true, &excludes)?;

    assert_eq!(discovery.files.len(), RECURSIVE_TREE.len() - 6);
    let paths = discovered_paths(&discovery);
    for removed in [
        "recursive1.cpp",
        "subdir1/subdir1a/recursive5.cpp",
        "subdir1/subdir1a/recursive6.cpp",
        "subdir1/subdir1b/recursive7.cpp",
        "subdir1/subdir1b/recursive8.cpp",
        "subdir2/recursive9.cpp",
    ] {
        assert!(
            !paths.contains(&dir.path().join(removed)),
            "{removed} should have been excluded"
        );
    }
    Ok(())
}

#[test]
fn test_unmatched_excludes_are_fatal() -> Result<()> {
    let dir = setup_recursive_tree()?;
    let raw = [pattern(dir.path(), "*.cpp")];

    let Err(failure) = discover(dir.path(), &raw, true, &["ecursive1.cpp", "ubdir1a"]) else {
        bail!("Expected discovery to fail");
    };

    assert_eq!(
        failure.to_string(),
        "Exclude 'unmatched' ecursive1.cpp\nExclude 'unmatched' ubdir1a"
    );
    Ok(())
}

#[test]
fn test_unmatched_excludes_suggest_recursive() -> Result<()> {
    let dir = setup_recursive_tree()?;
    let raw = [pattern(dir.path(), "*.cpp")];

    let Err(failure) = discover(dir.path(), &raw, false, &["ecursive1.cpp", "ubdir1a"]) else {
        bail!("Expected discovery to fail");
    };

    assert_eq!(
        failure.to_string(),
        "Exclude 'unmatched' ecursive1.cpp\n\
         Exclude 'unmatched' ubdir1a\n\
         Did you intend to use --recursive?"
    );
    Ok(())
}

#[test]
fn test_ignored_exclude_errors_keep_going() -> Result<()> {
    let dir = setup_recursive_tree()?;
    let raw = [pattern(dir.path(), "*.cpp")];

    for (policy, reported) in [
        (ExcludeErrorPolicy::Warn, vec![String::from("ubdir1a")]),
        (ExcludeErrorPolicy::Silent, Vec::new()),
    ] {
        let resolver = ExcludeResolver::new(["ubdir1a"], CaseSensitivity::Sensitive);
        let options = DiscoveryOptions {
            recursive: true,
            case: CaseSensitivity::Sensitive,
            exclude_errors: policy,
        };

        let discovery = discover_paths(raw.as_slice(), dir.path(), &options, &resolver)?;

        assert_eq!(discovery.files.len(), RECURSIVE_TREE.len());
        assert_eq!(discovery.unmatched_excludes, reported, "Policy {policy:?}");
    }
    Ok(())
}

#[test]
fn test_exclude_shared_by_several_patterns() -> Result<()> {
    let dir = setup_recursive_tree()?;
    let raw = [
        pattern(&dir.path().join("subdir1"), "*.cpp"),
        pattern(&dir.path().join("subdir2"), "*.cpp"),
    ];

    let discovery = discover(dir.path(), &raw, true, &["recursive10.cpp"])?;

    assert_eq!(discovery.files.len(), 7);
    Ok(())
}
