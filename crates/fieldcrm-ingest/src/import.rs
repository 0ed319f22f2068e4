//! Bulk object import from delimited text.
//!
//! The import is forgiving: a row without an address, city or type is
//! skipped, a row the creator rejects is skipped, and the run carries on.
//! Only failing to read the input file stops it.
//!
//! Rows are created strictly one after another in file order, so the counts
//! and the creation order are deterministic.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use tracing::{Instrument, debug, info, info_span, warn};

use fieldcrm_model::{DEFAULT_OBJECT_STATUS, ObjectCreatePayload, ReverseLabelMap, normalize_phone};

use crate::csv::{Delimiter, ImportField, ImportHeaders, RowFields, split_cells, split_lines};
use crate::encoding::decode_csv_bytes;
use crate::error::{CreateError, IngestError, Result};

/// Destination for imported objects, normally the CRM API client.
#[async_trait]
pub trait ObjectCreator: Send {
    async fn create_object(
        &mut self,
        payload: &ObjectCreatePayload,
    ) -> std::result::Result<(), CreateError>;
}

/// Label maps and switches for one import run.
#[derive(Debug, Clone, Copy)]
pub struct ImportOptions<'a> {
    /// Lowercased object type label -> code.
    pub type_labels: &'a ReverseLabelMap,
    /// Lowercased object status label -> code.
    pub status_labels: &'a ReverseLabelMap,
    /// Rewrite contact phones to `+7XXXXXXXXXX` when they parse as such.
    pub normalize_phones: bool,
}

impl<'a> ImportOptions<'a> {
    pub fn new(type_labels: &'a ReverseLabelMap, status_labels: &'a ReverseLabelMap) -> Self {
        Self {
            type_labels,
            status_labels,
            normalize_phones: false,
        }
    }

    #[must_use]
    pub fn with_normalize_phones(mut self, enable: bool) -> Self {
        self.normalize_phones = enable;
        self
    }
}

/// Why a row was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// One or more of address, city or type were empty.
    MissingRequired(Vec<ImportField>),
    /// The creator refused the row.
    Rejected(CreateError),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MissingRequired(fields) => {
                let names: Vec<&str> = fields.iter().map(ImportField::canonical).collect();
                write!(f, "missing {}", names.join(", "))
            }
            FailureReason::Rejected(error) => write!(f, "{error}"),
        }
    }
}

/// A skipped row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based position among the non-empty lines, header included.
    pub line: usize,
    pub reason: FailureReason,
}

/// Outcome of an import run.
///
/// `skipped` always equals `failures.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
    pub failures: Vec<RowFailure>,
}

impl ImportSummary {
    /// True when the file held no data rows at all.
    pub fn is_empty(&self) -> bool {
        self.created == 0 && self.skipped == 0
    }

    fn record_created(&mut self) {
        self.created += 1;
    }

    fn record_skipped(&mut self, line: usize, reason: FailureReason) {
        self.skipped += 1;
        self.failures.push(RowFailure { line, reason });
    }
}

/// Code for a raw enum cell: the label map first, then [`fallback_code`].
pub fn resolve_code(raw: &str, labels: &ReverseLabelMap) -> String {
    match labels.get(raw) {
        Some(code) => code.to_string(),
        None => fallback_code(raw),
    }
}

/// Best guess for a value that is not a known label: treat it as a code.
pub fn fallback_code(raw: &str) -> String {
    raw.to_uppercase()
}

/// Turn one row into a create payload, or report the missing required fields.
pub fn build_payload(
    fields: &RowFields,
    options: &ImportOptions<'_>,
) -> std::result::Result<ObjectCreatePayload, Vec<ImportField>> {
    let missing = fields.missing_required();
    let (Some(address), Some(city_id), Some(type_raw)) = (
        fields.get(ImportField::Address),
        fields.get(ImportField::CityId),
        fields.get(ImportField::Type),
    ) else {
        return Err(missing);
    };

    let status_raw = fields
        .get(ImportField::Status)
        .unwrap_or(DEFAULT_OBJECT_STATUS);
    let contact_phone = fields.optional(ImportField::ContactPhone).map(|phone| {
        if options.normalize_phones {
            normalize_phone(&phone).unwrap_or(phone)
        } else {
            phone
        }
    });

    Ok(ObjectCreatePayload {
        object_type: resolve_code(type_raw, options.type_labels),
        address: address.to_string(),
        city_id: city_id.to_string(),
        status: resolve_code(status_raw, options.status_labels),
        district_id: fields.optional(ImportField::DistrictId),
        contact_name: fields.optional(ImportField::ContactName),
        contact_phone,
    })
}

/// Import objects from already decoded text.
///
/// Never fails: bad and rejected rows end up in [`ImportSummary::failures`].
pub async fn import_objects<C>(
    text: &str,
    options: &ImportOptions<'_>,
    creator: &mut C,
) -> ImportSummary
where
    C: ObjectCreator + ?Sized,
{
    let mut summary = ImportSummary::default();
    let lines = split_lines(text);
    let Some((header_line, rows)) = lines.split_first() else {
        return summary;
    };
    if rows.is_empty() {
        debug!("import input has no data rows");
        return summary;
    }

    let delimiter = Delimiter::detect(header_line);
    let headers = ImportHeaders::parse(header_line, delimiter);
    debug!(
        delimiter = %delimiter.as_char(),
        columns = headers.len(),
        rows = rows.len(),
        "parsed import header"
    );
    for field in ImportField::REQUIRED {
        if !headers.has_field(field) {
            warn!(field = field.canonical(), "header has no column for a required field");
        }
    }

    for (idx, line) in rows.iter().enumerate() {
        // Header is line 1.
        let line_no = idx + 2;
        let cells = split_cells(line, delimiter);
        let fields = headers.row_fields(&cells);

        let payload = match build_payload(&fields, options) {
            Ok(payload) => payload,
            Err(missing) => {
                debug!(line = line_no, ?missing, "skipping row without required fields");
                summary.record_skipped(line_no, FailureReason::MissingRequired(missing));
                continue;
            }
        };

        match creator.create_object(&payload).await {
            Ok(()) => {
                debug!(line = line_no, object_type = %payload.object_type, "object created");
                summary.record_created();
            }
            Err(error) => {
                warn!(line = line_no, %error, "object creation failed");
                summary.record_skipped(line_no, FailureReason::Rejected(error));
            }
        }
    }

    info!(
        created = summary.created,
        skipped = summary.skipped,
        "import finished"
    );
    summary
}

/// Read, decode and import a CSV file.
///
/// # Errors
///
/// Returns [`IngestError::FileRead`] when the file cannot be read. Row-level
/// problems never produce an error.
pub async fn import_objects_from_path<C>(
    path: &Path,
    options: &ImportOptions<'_>,
    creator: &mut C,
) -> Result<ImportSummary>
where
    C: ObjectCreator + ?Sized,
{
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let text = decode_csv_bytes(&bytes);
    let span = info_span!("import", path = %path.display());
    Ok(import_objects(&text, options, creator)
        .instrument(span)
        .await)
}
