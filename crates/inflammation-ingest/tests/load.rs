//! File-based tests for CSV loading.

use std::fs;

use inflammation_ingest::{IngestError, load_csv};
use tempfile::tempdir;

#[test]
fn load_csv_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inflammation-01.csv");
    fs::write(&path, "0,0,1,3,1\n0,1,2,1,2\n0,1,1,3,3\n").unwrap();

    let table = load_csv(&path).unwrap();

    assert_eq!(table.shape(), (3, 5));
    assert_eq!(table.row(0), &[0.0, 0.0, 1.0, 3.0, 1.0]);
    assert_eq!(table.row(2)[4], 3.0);
}

#[test]
fn load_csv_skips_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.csv");
    fs::write(&path, "1,2\n\n3,4\n\n").unwrap();

    let table = load_csv(&path).unwrap();
    assert_eq!(table.shape(), (2, 2));
}

#[test]
fn load_csv_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.csv");

    let err = load_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn load_csv_reports_file_in_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "1,2\n3,oops\n").unwrap();

    let err = load_csv(&path).unwrap_err();
    match err {
        IngestError::InvalidNumber { path: p, line, column, value } => {
            assert_eq!(p, path);
            assert_eq!((line, column), (2, 2));
            assert_eq!(value, "oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_csv_reports_file_lines_after_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gaps.csv");
    fs::write(&path, "1,2\n\n3,4\n\n5,oops\n").unwrap();

    let err = load_csv(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("invalid number 'oops' at line 5, column 2 in {}", path.display())
    );
}
