//! CSV bridge between object lists and delimited files.
//!
//! - [`build_objects_csv`] writes the export format.
//! - [`import_objects`] / [`import_objects_from_path`] read user files and
//!   hand one create payload per valid row to an [`ObjectCreator`].

pub mod csv;
pub mod encoding;
pub mod error;
pub mod export;
pub mod import;

pub use csv::{Delimiter, HEADER_ALIASES, ImportField, ImportHeaders, RowFields};
pub use encoding::decode_csv_bytes;
pub use error::{CreateError, IngestError, Result};
pub use export::{
    CSV_MIME_TYPE, EXPORT_DELIMITER, EXPORT_HEADERS, build_objects_csv, export_file_name,
};
pub use import::{
    FailureReason, ImportOptions, ImportSummary, ObjectCreator, RowFailure, build_payload,
    fallback_code, import_objects, import_objects_from_path, resolve_code,
};
