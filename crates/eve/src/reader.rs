//! Internal reader for `.rho` files
//!
//! The file is read in three passes over a single buffered stream:
//!
//! 1. header labels from the first line
//! 2. zone count and reference time from the second line
//! 3. every remaining non-blank line as a row of the numeric grid
//!
//! The file handle is owned by the [Reader] and is closed when it is dropped,
//! which happens on every return path of [Reader::read].

// crate modules
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::header::{normalise_header, GridInfo};
use crate::model::Model;
use crate::parsers;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::Path;

// external crates
use log::{debug, error, trace, warn};

/// Internal reader for the `.rho` file
pub(crate) struct Reader {
    /// Source path for error messages
    path: String,
    /// Buffered line iterator over the open file
    lines: Lines<BufReader<File>>,
    /// 1-based number of the last line read
    line_number: usize,
}

impl Reader {
    /// Open the file at `path`
    ///
    /// Failure to open is logged and returned as [Error::FileNotFound].
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().display().to_string();

        let file = File::open(&path).map_err(|source| {
            error!("Stella .rho file \"{path}\" not found");
            Error::FileNotFound {
                path: path.clone(),
                source,
            }
        })?;

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }

    /// Parse the full file into a [Model]
    pub(crate) fn read(mut self) -> Result<Model> {
        debug!("Reading {}", self.path);

        let labels = self.parse_header()?;
        let info = self.parse_grid_info()?;
        let grid = self.parse_grid(labels.len())?;

        if grid.n_rows() != info.n_zones {
            warn!(
                "{} declares {} zones but contains {} rows",
                self.path,
                info.n_zones,
                grid.n_rows()
            );
        }

        debug!("Read {} zones x {} columns", grid.n_rows(), grid.n_columns());
        Ok(Model::from_parts(self.path, labels, info, grid))
    }

    /// Advance to the next line, or `None` at the end of the file
    ///
    /// Undecodable text is a [Error::MalformedHeader] naming the line, and any
    /// other read failure is logged with the filename before it is returned.
    fn next_line(&mut self) -> Result<Option<String>> {
        let Some(line) = self.lines.next() else {
            return Ok(None);
        };
        self.line_number += 1;

        match line {
            Ok(line) => Ok(Some(line)),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(self.malformed(format!("invalid UTF-8 on line {}", self.line_number)))
            }
            Err(e) => {
                error!("Failed to read line {} of \"{}\": {e}", self.line_number, self.path);
                Err(Error::IOError(e))
            }
        }
    }

    /// Log and build a [Error::MalformedHeader] for this file
    fn malformed(&self, reason: String) -> Error {
        error!("Malformed .rho file \"{}\": {reason}", self.path);
        Error::MalformedHeader {
            path: self.path.clone(),
            reason,
        }
    }

    /// Pass 1: normalised column labels
    fn parse_header(&mut self) -> Result<Vec<String>> {
        let Some(line) = self.next_line()? else {
            return Err(self.malformed("file is empty".to_string()));
        };

        let labels = normalise_header(&line);
        if labels.is_empty() {
            return Err(self.malformed("no column labels on line 1".to_string()));
        }

        trace!("Labels: {labels:?}");
        Ok(labels)
    }

    /// Pass 2: zone count and reference time
    fn parse_grid_info(&mut self) -> Result<GridInfo> {
        let Some(line) = self.next_line()? else {
            return Err(self.malformed("missing grid information on line 2".to_string()));
        };

        let info = GridInfo::parse(&line).map_err(|reason| self.malformed(reason))?;
        trace!("Grid info: {info:?}");
        Ok(info)
    }

    /// Pass 3: every remaining row of numeric data
    fn parse_grid(&mut self, n_columns: usize) -> Result<Grid> {
        let mut rows: Vec<Vec<f64>> = Vec::new();

        while let Some(line) = self.next_line()? {
            if parsers::is_blank(&line) {
                continue;
            }

            let values = match parsers::grid_row(&line) {
                Ok((_, values)) => values,
                Err(_) => {
                    let reason = format!("non-numeric data on line {}", self.line_number);
                    return Err(self.malformed(reason));
                }
            };

            if values.len() != n_columns {
                let reason = format!(
                    "{} labels but {} values on line {}",
                    n_columns,
                    values.len(),
                    self.line_number
                );
                return Err(self.malformed(reason));
            }

            rows.push(values);
        }

        // lengths are checked row by row above
        Grid::from_rows(rows, n_columns).map_err(|row| {
            self.malformed(format!("inconsistent length for data row {row}"))
        })
    }
}
