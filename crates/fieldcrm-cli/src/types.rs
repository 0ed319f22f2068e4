use std::path::PathBuf;

use fieldcrm_ingest::ImportSummary;

#[derive(Debug)]
pub struct ExportResult {
    pub output: PathBuf,
    pub objects: usize,
}

#[derive(Debug)]
pub struct ImportResult {
    pub source: PathBuf,
    pub summary: ImportSummary,
    pub dry_run: bool,
    /// Where dry-run payloads were written, if requested.
    pub emitted: Option<PathBuf>,
}
