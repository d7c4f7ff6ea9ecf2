//! Batch orchestration: a directory of workbooks in, JSON artifacts out.
//!
//! Files are processed one at a time, sheets within a file one at a time.
//! A workbook that cannot be read is recorded as a failure and the batch
//! continues; only a missing input directory aborts the run.

use crate::convert::convert_sheet;
use crate::error::{ConvertError, ConvertResult};
use crate::excel::{is_supported_file, WorkbookLoader};
use crate::types::{BatchReport, ConvertOptions, FileFailure, SheetOutput};
use crate::writer::{output_file_name, write_document};
use std::fs;
use std::path::{Path, PathBuf};

/// Convert every supported spreadsheet in `input_dir`, writing one JSON
/// file per non-empty worksheet into `output_dir` (created if absent).
///
/// The report carries per-artifact provenance, per-file failures, and
/// skipped empty sheets; diagnostics printing is the caller's concern.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> ConvertResult<BatchReport> {
    if !input_dir.is_dir() {
        return Err(ConvertError::MissingInputDir(
            input_dir.display().to_string(),
        ));
    }

    fs::create_dir_all(output_dir)?;

    let files = discover_files(input_dir)?;
    let mut report = BatchReport {
        total: files.len(),
        ..BatchReport::default()
    };

    for file in &files {
        match convert_workbook(file, output_dir, options, &mut report) {
            Ok(()) => report.success += 1,
            Err(e) => report.failures.push(FileFailure {
                file: display_name(file),
                error: e.to_string(),
            }),
        }
    }

    Ok(report)
}

/// Enumerate supported spreadsheet files, non-recursive, sorted by name
/// so output is deterministic regardless of directory iteration order.
fn discover_files(input_dir: &Path) -> ConvertResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_file(path))
        .collect();
    files.sort();
    Ok(files)
}

fn convert_workbook(
    file: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    report: &mut BatchReport,
) -> ConvertResult<()> {
    let sheets = WorkbookLoader::new(file).load()?;
    let sheet_count = sheets.len();
    let file_stem = file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("workbook");

    for sheet in &sheets {
        let source = format!("{}/{}", display_name(file), sheet.name);

        if sheet.grid.is_empty() {
            report.skipped.push(source);
            continue;
        }

        let conversion = convert_sheet(&sheet.grid, options);
        let file_name = output_file_name(file_stem, &sheet.name, sheet_count, options.naming);
        write_document(
            &output_dir.join(&file_name),
            &conversion.document,
            options.json_indent,
        )?;

        report.outputs.push(SheetOutput {
            file_name,
            source,
            shape: conversion.shape,
            record_count: conversion.record_count(),
            header_fallback: conversion.header_fallback,
        });
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_dir_aborts() {
        let out = TempDir::new().unwrap();
        let result = convert_directory(
            Path::new("no-such-dir"),
            out.path(),
            &ConvertOptions::default(),
        );
        assert!(matches!(result, Err(ConvertError::MissingInputDir(_))));
    }

    #[test]
    fn test_empty_input_dir_reports_zero() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let report =
            convert_directory(input.path(), out.path(), &ConvertOptions::default()).unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.success, 0);
        assert!(report.outputs.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_isolated() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(input.path().join("broken.xlsx"), b"not a workbook").unwrap();

        let report =
            convert_directory(input.path(), out.path(), &ConvertOptions::default()).unwrap();
        assert_eq!(report.total, 1);
        assert_eq!(report.success, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, "broken.xlsx");
    }

    #[test]
    fn test_unsupported_files_are_ignored() {
        let input = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(input.path().join("notes.txt"), b"hello").unwrap();
        fs::write(input.path().join("data.csv"), b"a,b").unwrap();

        let report =
            convert_directory(input.path(), out.path(), &ConvertOptions::default()).unwrap();
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_output_dir_is_created() {
        let input = TempDir::new().unwrap();
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("nested").join("jsons");

        convert_directory(input.path(), &out, &ConvertOptions::default()).unwrap();
        assert!(out.is_dir());
    }
}
