//! Module for the labelled `.swd` table

// crate modules
use crate::error::Result;
use crate::reader::Reader;

// stools modules
use stools_utils::f;

// standard library
use std::path::Path;

/// Placeholder labels for the 13 columns of a `.swd` file
pub const LABELS: [&str; 13] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M"];

/// Rows of a `.swd` file under the placeholder [LABELS]
///
/// Every row holds exactly one value per label, with `NaN` wherever the file
/// provided fewer values. There are no units and nothing is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Path of the source file, as given
    path: String,
    /// Rows in file order, blank lines removed
    rows: Vec<[f64; 13]>,
}

impl Table {
    /// Read a Stella `.swd` file
    ///
    /// Example
    /// ```rust, no_run
    /// # use stools_swd::Table;
    /// let table = Table::from_file("path/to/run.swd").unwrap();
    /// println!("{table}");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Reader::new(path)?.read()
    }

    pub(crate) fn new(path: String, rows: Vec<[f64; 13]>) -> Self {
        Self { path, rows }
    }

    /// Path of the file the table was read from
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Column labels, `A` to `M`
    pub fn labels(&self) -> &'static [&'static str] {
        &LABELS
    }

    /// All rows in file order
    pub fn rows(&self) -> &[[f64; 13]] {
        &self.rows
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Values of the column under `label`, or `None` for an unknown label
    ///
    /// ```rust
    /// # use stools_swd::Table;
    /// # let table = Table::default();
    /// assert!(table.column("A").is_some());
    /// assert!(table.column("N").is_none());
    /// ```
    pub fn column(&self, label: &str) -> Option<Vec<f64>> {
        let index = LABELS.iter().position(|l| *l == label)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(String::new(), Vec::new())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Table {\n".to_string();
        s += &f!("    path: {}\n", self.path);
        s += &f!("    rows: {}\n", self.n_rows());
        s += &f!("    labels: {}\n}}", LABELS.join(" "));
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let mut first = [0.0; 13];
        let mut second = [f64::NAN; 13];
        for (i, v) in first.iter_mut().enumerate() {
            *v = i as f64;
        }
        second[0] = 10.0;
        Table::new("run.swd".to_string(), vec![first, second])
    }

    #[test]
    fn columns_by_label() {
        let table = table();
        assert_eq!(table.column("A"), Some(vec![0.0, 10.0]));

        let m = table.column("M").unwrap();
        assert_eq!(m[0], 12.0);
        assert!(m[1].is_nan());
    }

    #[test]
    fn unknown_label() {
        assert_eq!(table().column("a"), None);
        assert_eq!(table().column("Z"), None);
    }

    #[test]
    fn display() {
        let s = table().to_string();
        assert!(s.contains("path: run.swd"));
        assert!(s.contains("rows: 2"));
        assert!(s.contains("labels: A B C D E F G H I J K L M"));
    }
}
