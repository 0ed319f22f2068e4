//! Error types for the CSV bridge.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop an export or an import as a whole.
///
/// Bad rows and rejected creations are not errors; they are counted in the
/// import summary.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the import file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize export rows.
    #[error("failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    /// The CSV writer produced bytes that are not UTF-8.
    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failure reported by an [`ObjectCreator`](crate::ObjectCreator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    /// The remote side refused the payload (validation, permissions, ...).
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer.
    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
