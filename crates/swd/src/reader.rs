//! Internal reader for `.swd` files

// crate modules
use crate::error::{Error, Result};
use crate::parsers;
use crate::table::{Table, LABELS};

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

// external crates
use log::{debug, error};

/// Internal reader for the `.swd` file
pub(crate) struct Reader {
    path: String,
    reader: BufReader<File>,
}

impl Reader {
    /// Open the file at `path`, logging and returning [Error::FileNotFound]
    /// on failure
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().display().to_string();

        let file = File::open(&path).map_err(|source| {
            error!("Stella .swd file \"{path}\" not found");
            Error::FileNotFound {
                path: path.clone(),
                source,
            }
        })?;

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// Read every non-blank line into a [Table]
    pub(crate) fn read(self) -> Result<Table> {
        debug!("Reading {}", self.path);
        let mut rows: Vec<[f64; 13]> = Vec::new();

        for (i, line) in self.reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(invalid_row(&self.path, i + 1, "invalid UTF-8".into()));
                }
                Err(e) => {
                    error!("Failed to read line {} of \"{}\": {e}", i + 1, self.path);
                    return Err(Error::IOError(e));
                }
            };
            if parsers::is_blank(&line) {
                continue;
            }

            let values = match parsers::row(&line) {
                Ok((_, values)) => values,
                Err(_) => {
                    return Err(invalid_row(&self.path, i + 1, "non-numeric value".into()));
                }
            };

            if values.len() > LABELS.len() {
                let reason = format!("{} values for {} columns", values.len(), LABELS.len());
                return Err(invalid_row(&self.path, i + 1, reason));
            }

            let mut row = [f64::NAN; 13];
            row[..values.len()].copy_from_slice(&values);
            rows.push(row);
        }

        debug!("Read {} rows", rows.len());
        Ok(Table::new(self.path, rows))
    }
}

fn invalid_row(path: &str, line: usize, reason: String) -> Error {
    error!("Invalid row on line {line} of \"{path}\": {reason}");
    Error::InvalidRow {
        path: path.to_string(),
        line,
        reason,
    }
}
