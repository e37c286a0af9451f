//! Defines application-specific error types.
//!
//! Scan-time failures (`DirectoryRead`, `Stat`, `FileRead`) are produced by the
//! walker and the pipeline but never abort a scan: they are logged and the
//! offending entry is skipped. The remaining variants surface to the caller.

use std::path::Path;
use thiserror::Error;

/// Errors used throughout `featlist`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Listing a directory failed. The subtree contributes nothing further.
    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The type of a single entry could not be determined.
    #[error("Failed to stat '{path}': {source}")]
    Stat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A matched feature file could not be read. No record is produced for it.
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Opening a file from the report failed.
    #[error("Failed to open file '{path}': {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error (writing the report, etc.).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The Ctrl+C handler could not be installed.
    #[error("Failed to set Ctrl+C signal handler: {0}")]
    Signal(String),

    /// Error related to clipboard operations.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// No scan root was configured.
    #[error("No features directory selected")]
    NoScanRoot,

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// The scan completed without finding a single feature file.
    #[error("No feature files found under the scan root.")]
    NoFilesFound,
}

/// Configuration problems found while building a `Config`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two options that cannot be combined.
    #[error("Cannot use {option1} and {option2} simultaneously.")]
    Conflict { option1: String, option2: String },

    /// An option was given a value it does not accept.
    #[error("Invalid {option} '{value}': {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },

    /// The scan root does not resolve to a directory.
    #[error("Failed to resolve scan root '{path}': {reason}")]
    ScanRoot { path: String, reason: String },
}

/// A specialized `Result` type for `featlist` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Creates an `Error::FileRead` with path context.
pub fn file_read_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::FileRead {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Creates an `Error::OpenFile` with path context.
pub fn open_file_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::OpenFile {
        path: path.as_ref().display().to_string(),
        source,
    }
}
