//! Minimal reader for Stella `.swd` output
//!
//! The `.swd` files are plain whitespace separated tables. Only loading is
//! supported, with placeholder labels for each of the 13 columns.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use stools_swd::{read_swd, Table};
//! let table: Table = read_swd("path/to/run.swd").unwrap();
//!
//! println!("{} rows", table.n_rows());
//! let first = table.column("A").unwrap();
//! ```
#![doc = include_str!("../readme.md")]

mod error;
mod parsers;
mod reader;
mod table;

#[doc(inline)]
pub use table::{Table, LABELS};

#[doc(inline)]
pub use error::{Error, Result};

use std::path::Path;

/// Read a Stella `.swd` file into a [Table]
///
/// Example
/// ```rust, no_run
/// # use stools_swd::{read_swd, Table};
/// let table: Table = read_swd("path/to/run.swd").unwrap();
/// ```
pub fn read_swd<P: AsRef<Path>>(path: P) -> Result<Table> {
    Table::from_file(path)
}
