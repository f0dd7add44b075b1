// tests/integration_tests/line_ending_test.rs
use crate::common::{create_test_file, discover, pattern};
use anyhow::Result;
use batchfmt::core::line_ending::{LineEndRequest, LineEnding, analyze};
use batchfmt::core::pipeline::{BackupPolicy, PassThrough, PipelineOptions, run_pipeline};
use batchfmt::models::ProcessingOutcome;
use std::fs;
use tempfile::TempDir;

const LINUX: &str = "\nvoid foo()\n{\n    bar();\n}\n";
const WINDOWS: &str = "\r\nvoid foo()\r\n{\r\n    bar();\r\n}\r\n";
const MAC_OLD: &str = "\rvoid foo()\r{\r    bar();\r}\r";

fn setup_line_end_files() -> Result<TempDir> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "linux.cpp", LINUX)?;
    create_test_file(dir.path(), "windows.cpp", WINDOWS)?;
    create_test_file(dir.path(), "macold.cpp", MAC_OLD)?;
    // one CR among CRLF terminators
    create_test_file(dir.path(), "mixed.cpp", "\r\nvoid foo()\r\n{\r\n    bar();\r}\r\n")?;
    Ok(dir)
}

fn options(line_end: LineEndRequest) -> PipelineOptions {
    PipelineOptions {
        line_end,
        backup: BackupPolicy::Disabled,
        ..PipelineOptions::default()
    }
}

#[test]
fn test_keep_only_fixes_mixed_files() -> Result<()> {
    let dir = setup_line_end_files()?;
    let discovery = discover(dir.path(), &[pattern(dir.path(), "*.cpp")], false, &[])?;

    let report = run_pipeline(&discovery.files, &PassThrough, &options(LineEndRequest::Keep))?;

    assert_eq!(report.summary.formatted, 1);
    assert_eq!(report.summary.unchanged, 3);
    assert_eq!(fs::read_to_string(dir.path().join("mixed.cpp"))?, WINDOWS);
    assert_eq!(fs::read_to_string(dir.path().join("macold.cpp"))?, MAC_OLD);
    let mixed: Vec<bool> = report.files.iter().map(|f| f.line_ends_mixed).collect();
    // linux, macold, mixed, windows in path order
    assert_eq!(mixed, vec![false, false, true, false]);
    Ok(())
}

#[test]
fn test_forced_style_converts_every_other_file() -> Result<()> {
    for (target, expected, already) in [
        (LineEnding::Lf, LINUX, "linux.cpp"),
        (LineEnding::CrLf, WINDOWS, "windows.cpp"),
        (LineEnding::Cr, MAC_OLD, "macold.cpp"),
    ] {
        let dir = setup_line_end_files()?;
        let discovery = discover(dir.path(), &[pattern(dir.path(), "*.cpp")], false, &[])?;

        let report = run_pipeline(
            &discovery.files,
            &PassThrough,
            &options(LineEndRequest::Force(target)),
        )?;

        assert_eq!(report.summary.formatted, 3, "Target {target:?}");
        assert_eq!(report.summary.unchanged, 1, "Target {target:?}");
        for file in &report.files {
            assert_eq!(fs::read_to_string(&file.path)?, expected);
            let unchanged = file.path.ends_with(already);
            assert!(!file.outcome.is_failed(), "{} failed", file.path.display());
            assert_eq!(
                file.outcome == ProcessingOutcome::Unchanged,
                unchanged,
                "Unexpected outcome for {}",
                file.path.display()
            );
        }
    }
    Ok(())
}

#[test]
fn test_conversion_is_stable() -> Result<()> {
    let dir = setup_line_end_files()?;
    let discovery = discover(dir.path(), &[pattern(dir.path(), "*.cpp")], false, &[])?;
    let request = LineEndRequest::Force(LineEnding::CrLf);

    run_pipeline(&discovery.files, &PassThrough, &options(request))?;
    let second = run_pipeline(&discovery.files, &PassThrough, &options(request))?;

    assert_eq!(second.summary.unchanged, 4);
    for file in &second.files {
        let profile = analyze(&fs::read(&file.path)?);
        assert_eq!(profile.dominant, Some(LineEnding::CrLf));
        assert!(!profile.mixed);
    }
    Ok(())
}
