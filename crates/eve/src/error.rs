//! Result and Error types for stools-eve

/// Type alias for Result<T, eve::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `stools-eve` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The `.rho` file could not be opened
    #[error("Stella .rho file \"{path}\" not found")]
    FileNotFound {
        /// Path as given
        path: String,
        /// Error from opening the file
        #[source]
        source: std::io::Error,
    },

    /// Grid information or data rows do not match the expected layout
    #[error("malformed header in \"{path}\": {reason}")]
    MalformedHeader {
        /// Path as given
        path: String,
        /// What was wrong, including the line number where known
        reason: String,
    },

    /// Underlying file I/O error after the file was opened
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// A derived quantity needs a column the file does not have
    #[error("model has no \"{field}\" column")]
    MissingField {
        /// Name of the field as requested
        field: String,
    },

    /// Failed to serialise the JSON snapshot
    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),
}
