//! Fatal read errors must reach the log with the offending filename
//!
//! Kept in its own test binary because the logger is process-wide.

use stools_eve::{read_rho, Error};

use log::{Level, LevelFilter, Log, Metadata, Record};
use rstest::rstest;
use std::io::Write;
use std::sync::{Mutex, Once};
use tempfile::NamedTempFile;

/// Collects every record as (level, message)
struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

static INIT: Once = Once::new();

fn init() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// True if an error-level record mentions `path`
///
/// Tests run in parallel, so records are matched on the unique path.
fn logged_error(path: &str) -> bool {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .any(|(level, message)| *level == Level::Error && message.contains(path))
}

#[test]
fn missing_file_logged() {
    init();
    let path = "./data/not_a_real_model.rho";

    assert!(matches!(read_rho(path), Err(Error::FileNotFound { .. })));
    assert!(logged_error(path));
}

#[rstest]
#[case("H He\n2 time\n-1.0 -1.0\n")] // bad grid information
#[case("H He\n1 1.0\n-1.0 -1.0 10.0\n")] // row longer than header
#[case("")] // empty file
fn malformed_file_logged(#[case] content: &str) {
    init();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    let path = file.path().display().to_string();

    assert!(matches!(
        read_rho(file.path()),
        Err(Error::MalformedHeader { .. })
    ));
    assert!(logged_error(&path));
}

#[test]
fn valid_file_logs_no_errors() {
    init();
    let path = "./data/example.rho";

    assert!(read_rho(path).is_ok());
    assert!(!logged_error(path));
}
