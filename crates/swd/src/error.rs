//! Result and Error types for stools-swd

/// Type alias for Result<T, swd::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `stools-swd` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The `.swd` file could not be opened
    #[error("Stella .swd file \"{path}\" not found")]
    FileNotFound {
        /// Path as given
        path: String,
        /// Error from opening the file
        #[source]
        source: std::io::Error,
    },

    /// A row has too many values, or something that is not a number
    #[error("invalid row on line {line} of \"{path}\": {reason}")]
    InvalidRow {
        /// Path as given
        path: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// Underlying file I/O error after the file was opened
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),
}
