//! Integration tests for reading .swd files

use stools_swd::{read_swd, Error, Table, LABELS};

use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;

fn scratch(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[fixture]
fn table() -> Table {
    read_swd("./data/example.swd").unwrap()
}

#[rstest]
fn shape(table: Table) {
    assert_eq!(table.n_rows(), 9);
    assert_eq!(table.labels(), LABELS);
    assert!(table.rows().iter().all(|row| row.len() == 13));
}

#[rstest]
fn first_column(table: Table) {
    let a = table.column("A").unwrap();
    assert_eq!(a[..4], [0.5, 1.0, 1.5, 2.0]);
    assert_eq!(a[8], 4.5);
}

#[rstest]
fn short_rows_padded(table: Table) {
    let last = table.rows()[8];
    assert_eq!(last[..4], [4.5, 12.6, 0.1, 9.8]);
    assert!(last[4..].iter().all(|v| v.is_nan()));
}

#[rstest]
#[case("1 2 3\n\n   \n4 5 6\n", 2)]
#[case("", 0)]
#[case("\n\n", 0)]
fn blank_lines_skipped(#[case] content: &str, #[case] n_rows: usize) {
    let file = scratch(content);
    assert_eq!(read_swd(file.path()).unwrap().n_rows(), n_rows);
}

#[rstest]
#[case("1 2 3 4 5 6 7 8 9 10 11 12 13 14\n", 1)]
#[case("1 2 3\n1 2 x\n", 2)]
#[case("\n1.0,2.0\n", 2)]
fn invalid_rows(#[case] content: &str, #[case] expected: usize) {
    let file = scratch(content);
    match read_swd(file.path()) {
        Err(Error::InvalidRow { line, .. }) => assert_eq!(line, expected),
        other => panic!("expected InvalidRow, found {other:?}"),
    }
}

#[test]
fn undecodable_row() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1 2 3\n4 \xff 6\n").unwrap();
    file.flush().unwrap();

    match read_swd(file.path()) {
        Err(Error::InvalidRow { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("UTF-8"));
        }
        other => panic!("expected InvalidRow, found {other:?}"),
    }
}

#[test]
fn file_not_found() {
    match read_swd("./data/missing.swd") {
        Err(error @ Error::FileNotFound { .. }) => {
            assert!(error.to_string().contains("missing.swd"));
        }
        other => panic!("expected FileNotFound, found {other:?}"),
    }
}
